use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

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
    pub market: MarketConfig,
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
            market: MarketConfig::load()?,
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

/// Market-specific tuning consumed by the scoring and financing engines.
///
/// The city tiers and the reference income are deployment settings so the
/// same service can be pointed at a different market without code changes.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketConfig {
    pub primary_city: String,
    pub secondary_city: String,
    pub reference_monthly_income: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            primary_city: "Luanda".to_string(),
            secondary_city: "Benguela".to_string(),
            reference_monthly_income: 2_000_000.0,
        }
    }
}

impl MarketConfig {
    fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let primary_city =
            env::var("APP_PRIMARY_CITY").unwrap_or(defaults.primary_city);
        let secondary_city =
            env::var("APP_SECONDARY_CITY").unwrap_or(defaults.secondary_city);

        let reference_monthly_income = match env::var("APP_REFERENCE_INCOME") {
            Ok(raw) => {
                let parsed = raw
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ConfigError::InvalidReferenceIncome)?;
                if parsed <= 0.0 {
                    return Err(ConfigError::InvalidReferenceIncome);
                }
                parsed
            }
            Err(_) => defaults.reference_monthly_income,
        };

        Ok(Self {
            primary_city,
            secondary_city,
            reference_monthly_income,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidReferenceIncome,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidReferenceIncome => {
                write!(f, "APP_REFERENCE_INCOME must be a positive number")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidReferenceIncome => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_PRIMARY_CITY");
        env::remove_var("APP_SECONDARY_CITY");
        env::remove_var("APP_REFERENCE_INCOME");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.market, MarketConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn market_settings_come_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PRIMARY_CITY", "Lobito");
        env::set_var("APP_SECONDARY_CITY", "Huambo");
        env::set_var("APP_REFERENCE_INCOME", "1500000");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.market.primary_city, "Lobito");
        assert_eq!(config.market.secondary_city, "Huambo");
        assert_eq!(config.market.reference_monthly_income, 1_500_000.0);
    }

    #[test]
    fn rejects_non_numeric_reference_income() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_REFERENCE_INCOME", "plenty");
        let error = AppConfig::load().expect_err("income must be numeric");
        assert!(matches!(error, ConfigError::InvalidReferenceIncome));
    }

    #[test]
    fn rejects_negative_reference_income() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_REFERENCE_INCOME", "-10");
        let error = AppConfig::load().expect_err("income must be positive");
        assert!(matches!(error, ConfigError::InvalidReferenceIncome));
    }
}
