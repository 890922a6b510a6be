//! Server configuration, loaded from environment variables at startup.

/// Runtime configuration for the taskdeck server.
///
/// Every field has a sensible default so the server works out-of-the-box
/// without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:8000"`).
    pub bind_address: String,

    /// `PostgreSQL` connection string. When unset the server falls back to
    /// the in-memory store, which is enough for demos and tests but loses
    /// all records on restart.
    pub database_url: Option<String>,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to
    /// defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("TASKDECK_BIND", "0.0.0.0:8000"),
            database_url: std::env::var("TASKDECK_DATABASE_URL").ok(),
            log_level: env_or("TASKDECK_LOG", "info"),
            log_json: std::env::var("TASKDECK_LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
