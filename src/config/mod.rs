use serde::Deserialize;
use std::env;
use std::str::FromStr;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub availability: AvailabilityConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

// Настройки базы данных
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub acquire_timeout_seconds: u64,
    pub run_migrations: bool,
}

// Настройки Redis (кеш сеансов включается только при url и TTL > 0)
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: Option<String>,
    pub show_cache_ttl_seconds: u64,
}

// Правила подсчета занятых мест
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityConfig {
    /// Статусы бронирований, места которых не считаются занятыми.
    pub ignored_booking_statuses: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Собирает конфигурацию из произвольного источника переменных.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &'static str, default: &str| -> String {
            lookup(name).unwrap_or_else(|| default.to_string())
        };

        Ok(Config {
            app: AppConfig {
                host: var("HOST", "0.0.0.0"),
                port: parse("PORT", var("PORT", "8000"))?,
                environment: var("ENVIRONMENT", "development"),
                rust_log: var("RUST_LOG", "show_availability=debug,tower_http=debug"),
                log_format: parse("LOG_FORMAT", var("LOG_FORMAT", "pretty"))?,
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
                pool_size: parse("DB_POOL_SIZE", var("DB_POOL_SIZE", "20"))?,
                acquire_timeout_seconds: parse(
                    "DB_ACQUIRE_TIMEOUT_SECONDS",
                    var("DB_ACQUIRE_TIMEOUT_SECONDS", "5"),
                )?,
                run_migrations: parse("RUN_MIGRATIONS", var("RUN_MIGRATIONS", "true"))?,
            },
            redis: RedisConfig {
                url: lookup("REDIS_URL").filter(|url| !url.trim().is_empty()),
                show_cache_ttl_seconds: parse(
                    "SHOW_CACHE_TTL_SECONDS",
                    var("SHOW_CACHE_TTL_SECONDS", "0"),
                )?,
            },
            availability: AvailabilityConfig {
                ignored_booking_statuses: split_list(&var("IGNORED_BOOKING_STATUSES", "")),
            },
        })
    }
}

fn parse<T>(name: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
        value,
    })
}

// "CANCELLED, EXPIRED" -> ["CANCELLED", "EXPIRED"]
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
