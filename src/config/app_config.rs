use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    /// Emit one log line per handled request
    pub request_log: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    #[default]
    Json,
}

const DEFAULT_ENV: &str = "dev";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_LEVEL: &str = "INFO";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: DEFAULT_ENV.to_string(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            request_log: true,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Raw settings as they appear in the environment, before defaults apply
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    app_env: Option<String>,
    host: Option<String>,
    port: Option<String>,
    log_level: Option<String>,
    log_json: Option<String>,
    request_log: Option<String>,
}

impl AppConfig {
    /// Load configuration from optional config files and the process environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(config::Environment::default())
    }

    fn load_from(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment.try_parsing(false))
            .build()?;

        let raw: RawSettings = config.try_deserialize()?;

        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawSettings) -> Self {
        let log_json = parse_flag(raw.log_json.as_deref(), true);

        Self {
            env: non_blank(raw.app_env).unwrap_or_else(|| DEFAULT_ENV.to_string()),
            server: ServerConfig {
                host: non_blank(raw.host).unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: non_blank(raw.port)
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
            },
            logging: LoggingConfig {
                level: non_blank(raw.log_level)
                    .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
                    .to_uppercase(),
                format: if log_json {
                    LogFormat::Json
                } else {
                    LogFormat::Pretty
                },
            },
            request_log: parse_flag(raw.request_log.as_deref(), true),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Interpret a boolean setting; blank or absent values fall back to `default`
fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(str::trim) {
        None | Some("") => default,
        Some(v) => matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "y" | "on"
        ),
    }
}
