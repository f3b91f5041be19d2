use log::Level;

const DEFAULT_AUTH_ENDPOINT: &str = "/auth/google";

/// Build-time settings, baked in by `trunk build` from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub auth_endpoint: String,
    pub log_level: Level,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("VIBE_AUTH_ENDPOINT"),
            option_env!("VIBE_LOG_LEVEL"),
        )
    }

    fn from_values(auth_endpoint: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            auth_endpoint: auth_endpoint
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_AUTH_ENDPOINT)
                .to_string(),
            log_level: log_level
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(Level::Info),
        }
    }
}
