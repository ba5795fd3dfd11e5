use sqlx::{
    Connection,
    mysql::{MySqlConnectOptions, MySqlConnection},
};
use tracing::{error, info};

use crate::{config::DatabaseConfig, utils::AppError};

pub struct ConnectionManager;

impl ConnectionManager {
    pub fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database)
    }

    /// Opens the single connection the repair run works on. No retry.
    pub async fn connect(config: &DatabaseConfig) -> Result<MySqlConnection, AppError> {
        info!(
            "Connecting to database {} at {}:{} as {}",
            config.database, config.host, config.port, config.user
        );

        let options = Self::connect_options(config);

        match MySqlConnection::connect_with(&options).await {
            Ok(conn) => {
                info!("Database connection established");
                Ok(conn)
            }
            Err(e) => {
                error!("Failed to connect to database: {e}");
                Err(AppError::SqlxError(e))
            }
        }
    }
}
