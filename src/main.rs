mod config;
mod scheduler;
mod service;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use smartgoals_ai::claude::ClaudeClient;
use smartgoals_slack::SlackClient;

use crate::service::ReportService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = config::Config::new();

    tracing::info!(
        server_addr = %config.server_addr,
        channel_id = %config.channel_id,
        report_channel_id = %config.report_channel_id,
        timezone = %config.timezone,
        "starting service"
    );

    let slack = SlackClient::new(&config.slack_config)?;
    let summarizer = ClaudeClient::new(&config.ai_config)?;
    let service = Arc::new(ReportService::new(&config, slack, summarizer));

    if let Some(expr) = &config.schedule {
        let schedule = scheduler::parse_cron(expr)?;
        tokio::spawn(scheduler::run_schedule(
            Arc::clone(&service),
            schedule,
            config.timezone,
        ));
    }

    let app = Router::new()
        .route("/", get(service::handlers::health))
        .route(
            "/run-report",
            get(service::handlers::run_report::<ClaudeClient>),
        )
        .with_state(Arc::clone(&service));

    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
