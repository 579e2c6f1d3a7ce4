mod models;

use std::time::Duration;

use crate::claude::models::{ClaudeMessage, ClaudeRequest, ClaudeResponse};
use crate::{AiError, AiResult, Config, Summarizer};

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const SUMMARY_PROMPT: &str = "You are a helpful assistant, summarizing today's \
work completed by each person for their boss in a very short and concise way.";

pub struct ClaudeClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl ClaudeClient {
    pub fn new(config: &Config) -> AiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }
}

impl Summarizer for ClaudeClient {
    async fn summarize(&self, text: &str) -> AiResult<String> {
        if text.trim().is_empty() {
            return Ok("No update text provided.".to_string());
        }

        let request = ClaudeRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            system: SUMMARY_PROMPT.to_string(),
            messages: vec![ClaudeMessage {
                role: "user".to_string(),
                content: text.to_string(),
            }],
        };

        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        // Check status before parsing
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "Claude API error");
            return Err(AiError::Api(format!("{status}: {body}")));
        }

        let response = response.json::<ClaudeResponse>().await?;

        if let Some(error) = response.error {
            return Err(AiError::Api(error.message));
        }

        Ok(response
            .content
            .first()
            .map(|c| c.text.trim().to_string())
            .unwrap_or_else(|| "No summary generated.".to_string()))
    }
}
