use anyhow::{Context, Result};
use validator::Validate;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 3306;
const DEFAULT_USER: &str = "root";
const DEFAULT_PASSWORD: &str = "root";
const DEFAULT_DATABASE: &str = "hotel_booking_db";
const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Clone, Validate)]
pub struct DatabaseConfig {
    #[validate(length(min = 1, message = "DB_HOST must not be empty"))]
    pub host: String,
    #[validate(range(min = 1, message = "DB_PORT must be greater than zero"))]
    pub port: u16,
    #[validate(length(min = 1, message = "DB_USER must not be empty"))]
    pub user: String,
    pub password: String,
    #[validate(length(min = 1, message = "DB_NAME must not be empty"))]
    pub database: String,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.into(),
            password: DEFAULT_PASSWORD.into(),
            database: DEFAULT_DATABASE.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub log_dir: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Every key is optional; unset keys fall back to the local development
    /// database the tool was written against.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DatabaseConfig::default();

        let port = match lookup("DB_PORT") {
            Some(port_str) => port_str
                .parse::<u16>()
                .context("DB_PORT must be a valid u16 integer")?,
            None => defaults.port,
        };

        let database = DatabaseConfig {
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port,
            user: lookup("DB_USER").unwrap_or(defaults.user),
            password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
            database: lookup("DB_NAME").unwrap_or(defaults.database),
        };

        database
            .validate()
            .context("Invalid database configuration")?;

        let log_dir = lookup("LOG_DIR").unwrap_or_else(|| DEFAULT_LOG_DIR.to_string());

        Ok(Self { database, log_dir })
    }
}
