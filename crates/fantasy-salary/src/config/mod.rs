use crate::workflows::salary::{Roster, ScoringConfig};
use serde::de::DeserializeOwned;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Desktop browser identity; some scorecard hosts reject non-browser clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_SOURCE_DOMAIN: &str = "espncricinfo.com";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub salary: SalaryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            salary: SalaryConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Scorecard source, outbound fetch settings, and the static salary inputs.
#[derive(Debug, Clone)]
pub struct SalaryConfig {
    pub source_domain: String,
    pub fetch_timeout: Duration,
    pub user_agent: String,
    pub roster_path: Option<PathBuf>,
    pub scoring_path: Option<PathBuf>,
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            source_domain: DEFAULT_SOURCE_DOMAIN.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            roster_path: None,
            scoring_path: None,
        }
    }
}

impl SalaryConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let source_domain = non_empty_var("SALARY_SOURCE_DOMAIN").unwrap_or(defaults.source_domain);
        let user_agent = non_empty_var("SALARY_USER_AGENT").unwrap_or(defaults.user_agent);

        let fetch_timeout = match non_empty_var("SALARY_FETCH_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidFetchTimeout { value: raw }),
            },
            None => defaults.fetch_timeout,
        };

        Ok(Self {
            source_domain,
            fetch_timeout,
            user_agent,
            roster_path: non_empty_var("SALARY_ROSTER_PATH").map(PathBuf::from),
            scoring_path: non_empty_var("SALARY_SCORING_PATH").map(PathBuf::from),
        })
    }

    /// Reads the roster file when configured, otherwise the built-in roster.
    pub fn load_roster(&self) -> Result<Roster, ConfigError> {
        match &self.roster_path {
            Some(path) => read_json(path),
            None => Ok(Roster::default()),
        }
    }

    /// Reads the scoring file when configured, otherwise the built-in weights.
    pub fn load_scoring(&self) -> Result<ScoringConfig, ConfigError> {
        match &self.scoring_path {
            Some(path) => read_json(path),
            None => Ok(ScoringConfig::default()),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidFetchTimeout {
        value: String,
    },
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseFile {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidFetchTimeout { value } => write!(
                f,
                "SALARY_FETCH_TIMEOUT_SECS must be a positive number of seconds (got '{value}')"
            ),
            ConfigError::ReadFile { path, .. } => {
                write!(f, "unable to read {}", path.display())
            }
            ConfigError::ParseFile { path, source } => {
                write!(f, "invalid JSON in {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidFetchTimeout { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::ReadFile { source, .. } => Some(source),
            ConfigError::ParseFile { source, .. } => Some(source),
        }
    }
}
