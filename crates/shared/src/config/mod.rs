mod database;
mod myconfig;

pub use self::database::ConnectionManager;
pub use self::myconfig::{Config, DatabaseConfig};
