use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub mail: MailConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for session tokens. Overridden by the
    /// AUTH_SECRET environment variable when set.
    pub secret: String,
    pub token_lifetime_hours: i64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MailConfig {
    /// HTTP endpoint of the external mail transport. Unset means the
    /// sendemail relay is disabled.
    pub transport_url: Option<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 8080

[database]
path = "target/db/easypeasy.db"

[auth]
secret = "easypeasy-dev-secret"
token_lifetime_hours = 24
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    let mut config: Option<Config> = None;
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                config = Some(toml::from_str(&contents)?);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    let mut config = match config {
        Some(c) => c,
        None => {
            tracing::info!("Using default embedded configuration");
            toml::from_str(DEFAULT_CONFIG)?
        }
    };

    // The signing secret can always be injected through the environment
    if let Ok(secret) = std::env::var("AUTH_SECRET") {
        if !secret.is_empty() {
            config.auth.secret = secret;
        }
    }

    Ok(config)
}

/// Install the loaded configuration process-wide. Later calls are no-ops.
pub fn init(config: Config) -> &'static Config {
    CONFIG.get_or_init(|| config)
}

/// Access the active configuration, falling back to the embedded default
/// when `init` was never called (tests, tooling).
pub fn get() -> &'static Config {
    CONFIG.get_or_init(|| toml::from_str(DEFAULT_CONFIG).expect("embedded default config is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.path, "target/db/easypeasy.db");
        assert_eq!(config.auth.token_lifetime_hours, 24);
        assert!(config.mail.transport_url.is_none());
    }
}
