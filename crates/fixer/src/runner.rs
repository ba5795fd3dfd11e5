use shared::{
    abstract_trait::{DynConsole, DynRepairService},
    config::Config,
    domain::response::RepairOutcome,
    state::AppState,
    utils::AppError,
};
use tracing::error;

/// Connects, runs the repair pipeline and swallows any failure after printing
/// it. `None` means the run ended in an error.
pub async fn run(config: &Config, console: DynConsole) -> Option<RepairOutcome> {
    let state = match AppState::new(config, console.clone()).await {
        Ok(state) => state,
        Err(e) => {
            report_failure(&console, &e);
            return None;
        }
    };

    run_service(&state.repair_service, &console).await
}

pub async fn run_service(
    service: &DynRepairService,
    console: &DynConsole,
) -> Option<RepairOutcome> {
    match service.run().await {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            report_failure(console, &e);
            None
        }
    }
}

pub fn report_failure(console: &DynConsole, err: &AppError) {
    error!("Repair run failed: {err}");

    if err.is_database() {
        console.write_line(&format!("❌ {err}"));
    } else {
        console.write_line(&format!("❌ Error: {err}"));
    }
}
