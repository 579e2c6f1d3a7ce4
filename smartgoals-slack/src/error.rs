#[derive(Debug, thiserror::Error)]
pub enum SlackError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Channel not found")]
    ChannelNotFound,

    #[error("Invalid authentication token")]
    InvalidAuth,

    #[error("Authentication token revoked")]
    TokenRevoked,

    #[error("Slack API error: {0}")]
    Api(String),
}

impl SlackError {
    /// Map a Slack `error` code string onto the closed error set.
    pub fn from_api_code(code: &str) -> Self {
        match code {
            "channel_not_found" => Self::ChannelNotFound,
            "invalid_auth" => Self::InvalidAuth,
            "token_revoked" => Self::TokenRevoked,
            other => Self::Api(other.to_string()),
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::InvalidAuth | Self::TokenRevoked)
    }
}

pub type SlackResult<T> = Result<T, SlackError>;
