pub mod console;
mod errors;
mod logger;

pub use self::console::{ScriptedConsole, StdConsole};
pub use self::errors::AppError;
pub use self::logger::init_logger;
