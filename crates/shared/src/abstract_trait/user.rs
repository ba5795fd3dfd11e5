use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{request::RepairRequest, response::RepairResponse},
    model::user::User,
    utils::AppError,
};

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepositoryTrait {
    /// Rows where `dob IS NULL OR address IS NULL OR address = ''`.
    async fn find_missing_fields(&self) -> Result<Vec<User>, AppError>;
    /// Both bulk updates share one transaction.
    async fn repair_missing_fields(
        &self,
        request: &RepairRequest,
    ) -> Result<RepairResponse, AppError>;
    async fn count_missing_fields(&self) -> Result<i64, AppError>;
    /// Releases the connection. Calling it again is a no-op.
    async fn close(&self) -> Result<(), AppError>;
}
