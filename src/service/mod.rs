pub(crate) mod handlers;

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::Utc;
use smartgoals_ai::Summarizer;
use smartgoals_core::{
    ROSTER, ResolvedMessage, classify_messages, is_roster_member, render_report,
    write_report_file,
};
use smartgoals_slack::models::HistoryMessage;
use smartgoals_slack::{SlackClient, SlackError, split_message};

use crate::config::Config;

const SUMMARY_ERROR_PLACEHOLDER: &str = "Error generating summary.";

pub struct ReportService<S: Summarizer> {
    slack: SlackClient,
    summarizer: S,
    channel_id: String,
    report_channel_id: String,
    timezone: chrono_tz::Tz,
    window_hours: i64,
    output_file: Option<PathBuf>,
}

impl<S: Summarizer> ReportService<S> {
    pub fn new(config: &Config, slack: SlackClient, summarizer: S) -> Self {
        ReportService {
            slack,
            summarizer,
            channel_id: config.channel_id.clone(),
            report_channel_id: config.report_channel_id.clone(),
            timezone: config.timezone,
            window_hours: config.window_hours,
            output_file: config.output_file.clone(),
        }
    }

    /// One full fetch → resolve → summarize → classify → report run.
    pub async fn run(&self) -> anyhow::Result<String> {
        let now = Utc::now().with_timezone(&self.timezone);
        let today = now.date_naive();
        let oldest = (now - chrono::Duration::hours(self.window_hours)).timestamp();
        let latest = now.timestamp();

        let messages = self.fetch_window(oldest, latest).await;
        if messages.is_empty() {
            tracing::info!("no messages fetched from the channel");
            return Ok("No messages fetched from the channel.".to_string());
        }

        let resolved = self.resolve_and_summarize(messages).await;
        if resolved.is_empty() {
            tracing::info!("no roster updates in the window");
            return Ok("No roster updates in the window.".to_string());
        }

        let digest = classify_messages(&resolved, today).into_digest(&ROSTER, today);

        self.post_report(&render_report(&digest)).await;

        if let Some(path) = &self.output_file {
            if let Err(error) = write_report_file(path, &digest) {
                tracing::error!(%error, path = %path.display(), "failed writing report file");
            }
        }

        Ok(format!(
            "Report posted: {} submitted, {} not submitted.",
            digest.submitted.len(),
            digest.absent.len()
        ))
    }

    /// Channel history for the window; remote failures degrade to an empty
    /// batch so the run short-circuits instead of crashing.
    async fn fetch_window(&self, oldest: i64, latest: i64) -> Vec<HistoryMessage> {
        match self.slack.history(&self.channel_id, oldest, latest).await {
            Ok(messages) => messages,
            Err(SlackError::ChannelNotFound) => {
                tracing::error!(
                    channel_id = %self.channel_id,
                    "channel not found; check the id and the bot's permissions"
                );
                Vec::new()
            }
            Err(SlackError::InvalidAuth) => {
                tracing::error!("invalid Slack authentication token");
                Vec::new()
            }
            Err(SlackError::TokenRevoked) => {
                tracing::error!("Slack token revoked; issue a new one");
                Vec::new()
            }
            Err(error) => {
                tracing::error!(%error, "failed fetching channel history");
                Vec::new()
            }
        }
    }

    /// Keep roster members' messages, attaching display names and summaries.
    ///
    /// Identity lookups are cached for the run; summarization failures
    /// degrade to a placeholder instead of dropping the message.
    async fn resolve_and_summarize(&self, messages: Vec<HistoryMessage>) -> Vec<ResolvedMessage> {
        let mut names: HashMap<String, Option<String>> = HashMap::new();
        let mut resolved = Vec::new();

        for msg in messages {
            if !msg.is_user_message() {
                continue;
            }
            let Some(user_id) = msg.user.clone() else {
                continue;
            };

            let name = if let Some(cached) = names.get(&user_id) {
                cached.clone()
            } else {
                let looked_up = match self.slack.user_real_name(&user_id).await {
                    Ok(name) => Some(name),
                    Err(error) => {
                        tracing::warn!(%error, %user_id, "failed fetching user info");
                        None
                    }
                };
                names.insert(user_id, looked_up.clone());
                looked_up
            };

            let Some(person) = name else { continue };
            if !is_roster_member(&person) {
                continue;
            }

            let Some(timestamp) = msg.timestamp() else {
                tracing::warn!(ts = %msg.ts, "skipping message with unparseable timestamp");
                continue;
            };

            let summary = match self.summarizer.summarize(&msg.text).await {
                Ok(summary) => summary,
                Err(error) => {
                    tracing::error!(%error, %person, "summarization failed");
                    SUMMARY_ERROR_PLACEHOLDER.to_string()
                }
            };

            resolved.push(ResolvedMessage {
                person,
                timestamp: timestamp.with_timezone(&self.timezone),
                text: msg.text,
                summary,
            });
        }

        resolved
    }

    /// Post the report in order, one chunk per message; a failed chunk is
    /// logged and the rest still go out.
    async fn post_report(&self, report: &str) {
        for chunk in split_message(report) {
            if let Err(error) = self.slack.post_message(&self.report_channel_id, &chunk).await {
                tracing::error!(%error, "failed posting report chunk");
            }
        }
    }
}
