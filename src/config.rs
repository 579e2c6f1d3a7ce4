use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(serde::Deserialize)]
pub(crate) struct Config {
    pub server_addr: SocketAddr,

    /// Channel whose history is scanned for updates.
    pub channel_id: String,
    /// Channel the rendered report is posted to.
    pub report_channel_id: String,

    /// Reference timezone for "today".
    #[serde(default = "default_timezone")]
    pub timezone: chrono_tz::Tz,

    /// Trailing window scanned on each run.
    #[serde(default = "default_window_hours")]
    pub window_hours: i64,

    /// Five-field cron expression; no in-process schedule when unset.
    #[serde(default)]
    pub schedule: Option<String>,

    /// Flat-file copy of the report, skipped when unset.
    #[serde(default)]
    pub output_file: Option<PathBuf>,

    pub slack_config: smartgoals_slack::Config,
    pub ai_config: smartgoals_ai::Config,
}

fn default_timezone() -> chrono_tz::Tz {
    chrono_tz::US::Eastern
}

fn default_window_hours() -> i64 {
    24
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let env_config = config::Environment::default()
            .separator("__")
            .try_parsing(true);

        let mut conf_builder = config::Config::builder().add_source(env_config);

        if std::path::Path::new("Settings.toml").exists() {
            conf_builder = conf_builder.add_source(config::File::with_name("./Settings.toml"));
        }

        conf_builder
            .build()
            .unwrap()
            .try_deserialize::<Config>()
            .unwrap_or_else(|e| panic!("Error parsing config: {e}"))
    }
}
