mod config;
mod error;
pub mod models;
mod utils;

#[cfg(test)]
mod tests;

use std::time::Duration;

pub use config::Config;
pub use error::*;
pub use utils::{SLACK_MAX_LENGTH, split_message};

use crate::models::{HistoryMessage, HistoryResponse, PostMessageResponse, UserInfoResponse};

const API_BASE: &str = "https://slack.com/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// conversations.history defaults to 100 messages per page; one page at
// this size covers a day of channel traffic.
const HISTORY_PAGE_LIMIT: u32 = 200;

pub struct SlackClient {
    client: reqwest::Client,
    token: String,
}

impl SlackClient {
    pub fn new(config: &Config) -> SlackResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            token: config.bot_token.clone(),
        })
    }

    /// Fetch all channel messages within `[oldest, latest]` (unix seconds).
    pub async fn history(
        &self,
        channel: &str,
        oldest: i64,
        latest: i64,
    ) -> SlackResult<Vec<HistoryMessage>> {
        let response = self
            .client
            .get(format!("{API_BASE}/conversations.history"))
            .bearer_auth(&self.token)
            .query(&[
                ("channel", channel.to_string()),
                ("oldest", oldest.to_string()),
                ("latest", latest.to_string()),
                ("limit", HISTORY_PAGE_LIMIT.to_string()),
            ])
            .send()
            .await?;

        let parsed: HistoryResponse = response.json().await?;

        if !parsed.ok {
            return Err(SlackError::from_api_code(
                parsed.error.as_deref().unwrap_or("unknown_error"),
            ));
        }

        tracing::debug!(count = parsed.messages.len(), "fetched channel history");

        Ok(parsed.messages)
    }

    /// Look up the display name behind an opaque member id.
    pub async fn user_real_name(&self, user_id: &str) -> SlackResult<String> {
        let response = self
            .client
            .get(format!("{API_BASE}/users.info"))
            .bearer_auth(&self.token)
            .query(&[("user", user_id)])
            .send()
            .await?;

        let parsed: UserInfoResponse = response.json().await?;

        if !parsed.ok {
            return Err(SlackError::from_api_code(
                parsed.error.as_deref().unwrap_or("unknown_error"),
            ));
        }

        parsed
            .user
            .and_then(|u| u.real_name)
            .ok_or_else(|| SlackError::Api("user has no real_name".to_string()))
    }

    /// Post a single message to a channel.
    pub async fn post_message(&self, channel: &str, text: &str) -> SlackResult<()> {
        let body = serde_json::json!({
            "channel": channel,
            "text": text,
            "mrkdwn": true,
        });

        let response = self
            .client
            .post(format!("{API_BASE}/chat.postMessage"))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let parsed: PostMessageResponse = response.json().await?;

        if !parsed.ok {
            return Err(SlackError::from_api_code(
                parsed.error.as_deref().unwrap_or("unknown_error"),
            ));
        }

        Ok(())
    }
}
