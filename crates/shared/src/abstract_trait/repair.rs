use async_trait::async_trait;
use std::sync::Arc;

use crate::{domain::response::RepairOutcome, utils::AppError};

pub type DynRepairService = Arc<dyn RepairServiceTrait + Send + Sync>;

#[async_trait]
pub trait RepairServiceTrait {
    async fn run(&self) -> Result<RepairOutcome, AppError>;
}
