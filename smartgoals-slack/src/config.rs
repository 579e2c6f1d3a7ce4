#[derive(serde::Deserialize)]
pub struct Config {
    pub bot_token: String,
}
