/// Response from the Slack conversations.history API.
#[derive(Debug, serde::Deserialize)]
pub struct HistoryResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub messages: Vec<HistoryMessage>,
}

/// A message from the conversations.history response.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct HistoryMessage {
    /// Sender's member id; absent on some system messages.
    #[serde(default)]
    pub user: Option<String>,
    /// Timestamp string, `"<secs>.<frac>"`, also the message's unique id.
    pub ts: String,
    #[serde(default)]
    pub text: String,
    /// Present if the message was sent by a bot.
    #[serde(default)]
    pub bot_id: Option<String>,
    /// Message subtype (e.g., "bot_message", "channel_join").
    #[serde(default)]
    pub subtype: Option<String>,
}

impl HistoryMessage {
    pub fn timestamp(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        let seconds = self.ts.parse::<f64>().ok()?;
        chrono::DateTime::from_timestamp(seconds.trunc() as i64, (seconds.fract() * 1e9) as u32)
    }

    /// Ordinary user message, not a bot post or a join/leave notice.
    pub fn is_user_message(&self) -> bool {
        self.user.is_some() && self.bot_id.is_none() && self.subtype.is_none()
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct UserInfoResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[derive(Debug, serde::Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub real_name: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct PostMessageResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}
