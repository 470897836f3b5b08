use std::env;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub log_dir: String,
    pub max_range_days: i64,
    pub source_fetch_timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
            max_range_days: env::var("MAX_RANGE_DAYS").unwrap_or_else(|_| "366".to_string()).parse().expect("MAX_RANGE_DAYS must be a number"),
            source_fetch_timeout_ms: env::var("SOURCE_FETCH_TIMEOUT_MS").unwrap_or_else(|_| "5000".to_string()).parse().expect("SOURCE_FETCH_TIMEOUT_MS must be a number"),
        }
    }

    pub fn source_fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.source_fetch_timeout_ms)
    }
}
