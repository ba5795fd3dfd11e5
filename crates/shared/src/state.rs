use std::sync::Arc;

use crate::{
    abstract_trait::{DynConsole, DynRepairService, DynUserRepository},
    config::{Config, ConnectionManager},
    domain::request::RepairRequest,
    repository::UserRepository,
    service::RepairService,
    utils::AppError,
};

#[derive(Clone)]
pub struct AppState {
    pub repair_service: DynRepairService,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("repair_service", &"DynRepairService")
            .finish()
    }
}

impl AppState {
    /// Opens the connection and wires the repair pipeline around it.
    pub async fn new(config: &Config, console: DynConsole) -> Result<Self, AppError> {
        let conn = ConnectionManager::connect(&config.database).await?;

        let user_repository = Arc::new(UserRepository::new(conn)) as DynUserRepository;

        Ok(Self::from_parts(user_repository, console))
    }

    pub fn from_parts(user_repository: DynUserRepository, console: DynConsole) -> Self {
        let repair_service = Arc::new(RepairService::new(
            user_repository,
            console,
            RepairRequest::default(),
        )) as DynRepairService;

        Self { repair_service }
    }
}
