use async_trait::async_trait;
use std::time::Instant;
use tracing::{error, info, warn};

use crate::{
    abstract_trait::{DynConsole, DynUserRepository, RepairServiceTrait},
    domain::{
        request::{CONFIRM_PROMPT, RepairRequest, is_confirmed},
        response::{
            RepairOutcome, RepairStats,
            report::{
                CleanReport, MissingFieldsReport, RepairSummary, ScanHeader, VerificationReport,
            },
        },
    },
    utils::AppError,
};

pub struct RepairService {
    repository: DynUserRepository,
    console: DynConsole,
    request: RepairRequest,
}

impl std::fmt::Debug for RepairService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepairService")
            .field("repository", &"DynUserRepository")
            .field("console", &"DynConsole")
            .field("request", &self.request)
            .finish()
    }
}

impl RepairService {
    pub fn new(repository: DynUserRepository, console: DynConsole, request: RepairRequest) -> Self {
        Self {
            repository,
            console,
            request,
        }
    }

    async fn execute(&self) -> Result<RepairOutcome, AppError> {
        self.console.write_line(&ScanHeader.to_string());

        let users = self.repository.find_missing_fields().await?;

        if users.is_empty() {
            self.console.write_line(&CleanReport.to_string());
            return Ok(RepairOutcome::Clean);
        }

        let found = users.len();
        self.console
            .write_line(&MissingFieldsReport(&users).to_string());

        let answer = self.console.ask(CONFIRM_PROMPT).await?;

        if !is_confirmed(&answer) {
            info!("Repair of {found} users cancelled by operator");
            self.console.write_line("Operation cancelled.");
            return Ok(RepairOutcome::Cancelled { found });
        }

        let response = self
            .repository
            .repair_missing_fields(&self.request)
            .await?;

        self.console.write_line(&RepairSummary(response).to_string());

        let remaining = self.repository.count_missing_fields().await?;

        if remaining != 0 {
            warn!("{remaining} users still have missing fields after repair");
        }

        self.console
            .write_line(&VerificationReport(remaining).to_string());

        Ok(RepairOutcome::Repaired(RepairStats {
            found,
            dob_updated: response.dob_updated,
            address_updated: response.address_updated,
            remaining,
        }))
    }
}

#[async_trait]
impl RepairServiceTrait for RepairService {
    async fn run(&self) -> Result<RepairOutcome, AppError> {
        let start_time = Instant::now();
        info!("Starting operation: RepairMissingUserFields");

        let result = self.execute().await;

        if let Err(e) = self.repository.close().await {
            error!("Failed to release database connection: {e}");
        }

        let elapsed = start_time.elapsed().as_secs_f64();

        match &result {
            Ok(outcome) => {
                info!("Operation completed successfully in {elapsed:.3}s: {outcome:?}")
            }
            Err(e) => error!("Operation failed after {elapsed:.3}s: {e}"),
        }

        result
    }
}
