use std::env;

const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-in-production";

/// Process configuration, read once from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub production: bool,
    pub secret_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://./data/barbershop.db".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(5000);
        let production = env::var("APP_ENV")
            .map(|value| value == "production")
            .unwrap_or(false);
        let secret_key =
            env::var("SECRET_KEY").unwrap_or_else(|_| DEFAULT_SECRET_KEY.to_string());

        Self {
            database_url,
            port,
            production,
            secret_key,
        }
    }

    pub fn default_log_filter(&self) -> &'static str {
        if self.production {
            "info"
        } else {
            "debug"
        }
    }

    pub fn secret_key_is_default(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        let config = Config {
            database_url: "sqlite://./data/barbershop.db".to_string(),
            port: 5000,
            production: false,
            secret_key: DEFAULT_SECRET_KEY.to_string(),
        };
        assert!(config.secret_key_is_default());
        assert_eq!(config.default_log_filter(), "debug");
    }

    #[test]
    fn production_filter_is_info() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            port: 8080,
            production: true,
            secret_key: "real-secret".to_string(),
        };
        assert!(!config.secret_key_is_default());
        assert_eq!(config.default_log_filter(), "info");
    }
}
