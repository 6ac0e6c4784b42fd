use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const DEFAULT_QUOTE_URL: &str = "https://zenquotes.io/api/today";

/// Runtime configuration, read from the environment (and an optional `.env`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub loglevel: String,
    pub quote_url: Url,
    pub quote_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            database_url: "sqlite:journal.db".to_string(),
            loglevel: "info".to_string(),
            quote_url: Url::parse(DEFAULT_QUOTE_URL).expect("default quote url is valid"),
            quote_timeout_secs: 5,
        }
    }
}

impl Config {
    /// Defaults overlaid with `PORT`, `DATABASE_URL`, `LOGLEVEL`, `QUOTE_URL`
    /// and `QUOTE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::raw().only(&[
            "PORT",
            "DATABASE_URL",
            "LOGLEVEL",
            "QUOTE_URL",
            "QUOTE_TIMEOUT_SECS",
        ]))
    }

    pub fn quote_timeout(&self) -> Duration {
        Duration::from_secs(self.quote_timeout_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = Config::default();
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.database_url, "sqlite:journal.db");
        assert_eq!(cfg.quote_url.as_str(), DEFAULT_QUOTE_URL);
        assert_eq!(cfg.quote_timeout(), Duration::from_secs(5));
        assert_eq!(cfg.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn environment_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PORT", "8080");
            jail.set_env("QUOTE_TIMEOUT_SECS", "2");
            let cfg = Config::from_env()?;
            assert_eq!(cfg.port, 8080);
            assert_eq!(cfg.quote_timeout_secs, 2);
            assert_eq!(cfg.loglevel, "info");
            Ok(())
        });
    }

    #[test]
    fn malformed_port_is_rejected() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PORT", "not-a-port");
            assert!(Config::from_env().is_err());
            Ok(())
        });
    }
}
