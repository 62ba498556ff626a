/*
 * Responsibility
 * - 環境変数の読み込み (PORT, APP_ENV, REQUEST_TIMEOUT_SECONDS)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            AppEnv::from_env(),
            std::env::var("REQUEST_TIMEOUT_SECONDS").ok().as_deref(),
        )
    }

    fn from_vars(
        port: Option<&str>,
        app_env: AppEnv,
        request_timeout_seconds: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let port: u16 = match port {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let request_timeout_seconds: u64 = match request_timeout_seconds {
            Some(raw) => raw
                .trim()
                .parse()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"))?,
            None => 30,
        };

        Ok(Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            app_env,
            request_timeout: Duration::from_secs(request_timeout_seconds),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::from_vars(None, AppEnv::Development, None).unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn explicit_values() {
        let config = Config::from_vars(Some("8080"), AppEnv::Production, Some("5")).unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert!(config.app_env.is_production());
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_vars(Some("http"), AppEnv::Development, None).unwrap_err();
        assert_eq!(err.to_string(), "invalid configuration: PORT");
    }

    #[test]
    fn rejects_zero_timeout() {
        assert!(Config::from_vars(None, AppEnv::Development, Some("0")).is_err());
    }

    #[test]
    fn app_env_parsing() {
        assert_eq!(AppEnv::parse("prod"), AppEnv::Production);
        assert_eq!(AppEnv::parse("PRODUCTION"), AppEnv::Production);
        assert_eq!(AppEnv::parse("staging"), AppEnv::Development);
    }
}
