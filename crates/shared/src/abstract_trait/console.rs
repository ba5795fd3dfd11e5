use async_trait::async_trait;
use std::sync::Arc;

use crate::utils::AppError;

pub type DynConsole = Arc<dyn ConsoleTrait + Send + Sync>;

#[async_trait]
pub trait ConsoleTrait {
    fn write_line(&self, line: &str);
    /// Returns the raw answer line, trailing newline included.
    async fn ask(&self, question: &str) -> Result<String, AppError>;
}
