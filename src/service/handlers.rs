use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use smartgoals_ai::Summarizer;

use crate::service::ReportService;

#[derive(serde::Serialize)]
pub(crate) struct RunStatus {
    status: &'static str,
    message: String,
}

/// Handle GET / health checks.
pub(crate) async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "running" }))
}

/// Handle GET /run-report: execute one pipeline run.
///
/// Catch-all boundary: a failed run becomes an error payload, never a crash.
pub(crate) async fn run_report<S>(
    State(service): State<Arc<ReportService<S>>>,
) -> Json<RunStatus>
where
    S: Summarizer + Send + Sync + 'static,
{
    match service.run().await {
        Ok(message) => Json(RunStatus {
            status: "success",
            message,
        }),
        Err(error) => {
            tracing::error!(%error, "report run failed");
            Json(RunStatus {
                status: "error",
                message: error.to_string(),
            })
        }
    }
}
