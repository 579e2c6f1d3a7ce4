use std::str::FromStr;
use std::sync::Arc;

use chrono_tz::Tz;
use cron::Schedule;
use smartgoals_ai::Summarizer;

use crate::service::ReportService;

/// Parse a five-field cron expression.
///
/// The cron crate expects six fields (with seconds); prepend "0" so the
/// configured expression stays in the familiar five-field form.
pub(crate) fn parse_cron(expr: &str) -> anyhow::Result<Schedule> {
    let full_expr = format!("0 {expr}");

    Schedule::from_str(&full_expr)
        .map_err(|e| anyhow::anyhow!("invalid cron expression '{expr}': {e}"))
}

/// Run the report on the configured schedule until the process exits.
pub(crate) async fn run_schedule<S>(service: Arc<ReportService<S>>, schedule: Schedule, tz: Tz)
where
    S: Summarizer + Send + Sync + 'static,
{
    loop {
        let Some(next) = schedule.upcoming(tz).next() else {
            tracing::warn!("schedule has no upcoming run, stopping scheduler");
            return;
        };

        let wait = (next.with_timezone(&chrono::Utc) - chrono::Utc::now())
            .to_std()
            .unwrap_or_default();

        tracing::info!(next = %next, "next scheduled report run");
        tokio::time::sleep(wait).await;

        match service.run().await {
            Ok(outcome) => tracing::info!(%outcome, "scheduled run finished"),
            Err(error) => tracing::error!(%error, "scheduled run failed"),
        }
    }
}
