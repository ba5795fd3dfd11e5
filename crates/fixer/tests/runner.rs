use chrono::NaiveDate;
use fixer::runner::{report_failure, run, run_service};
use shared::{
    abstract_trait::{DynConsole, DynUserRepository},
    config::{Config, DatabaseConfig},
    domain::response::{RepairOutcome, RepairStats},
    model::user::User,
    repository::InMemoryUserRepository,
    state::AppState,
    utils::{AppError, ScriptedConsole},
};
use std::sync::Arc;

fn user(id: i64, date_of_birth: Option<NaiveDate>, address: &str) -> User {
    User {
        user_id: id,
        email: format!("guest{id}@example.com"),
        first_name: Some("Guest".into()),
        last_name: Some(id.to_string()),
        date_of_birth,
        address: Some(address.to_string()),
    }
}

fn scenario_rows() -> Vec<User> {
    vec![
        user(1, None, "123 St"),
        user(2, NaiveDate::from_ymd_opt(1985, 5, 5), ""),
    ]
}

async fn run_against(
    repository: Arc<InMemoryUserRepository>,
    answer: &str,
) -> (Option<RepairOutcome>, Arc<ScriptedConsole>) {
    let console = Arc::new(ScriptedConsole::answering(answer));
    let state = AppState::from_parts(
        repository as DynUserRepository,
        console.clone() as DynConsole,
    );

    let outcome = run_service(&state.repair_service, &(console.clone() as DynConsole)).await;

    (outcome, console)
}

#[tokio::test]
async fn confirmed_run_repairs_both_rows() {
    let repository = Arc::new(InMemoryUserRepository::new(scenario_rows()));

    let (outcome, console) = run_against(repository.clone(), "yes\n").await;

    assert_eq!(
        outcome,
        Some(RepairOutcome::Repaired(RepairStats {
            found: 2,
            dob_updated: 1,
            address_updated: 1,
            remaining: 0,
        }))
    );

    let users = repository.users();
    assert_eq!(users[0].date_of_birth, NaiveDate::from_ymd_opt(1990, 1, 1));
    assert_eq!(users[0].address.as_deref(), Some("123 St"));
    assert_eq!(users[1].date_of_birth, NaiveDate::from_ymd_opt(1985, 5, 5));
    assert_eq!(users[1].address.as_deref(), Some("Not provided"));

    assert_eq!(repository.close_calls(), 1);
    assert!(console.output().contains("⚠️  Found 2 user(s) with NULL values:"));
    assert!(console.output().contains("✅ All users now have valid DOB and address!"));
}

#[tokio::test]
async fn declined_run_leaves_rows_untouched() {
    let repository = Arc::new(InMemoryUserRepository::new(scenario_rows()));

    let (outcome, console) = run_against(repository.clone(), "no\n").await;

    assert_eq!(outcome, Some(RepairOutcome::Cancelled { found: 2 }));
    assert_eq!(outcome.map(|o| o.rows_updated()), Some(0));
    assert_eq!(repository.users(), scenario_rows());
    assert_eq!(repository.close_calls(), 1);
    assert!(console.output().contains("Operation cancelled."));
}

#[tokio::test]
async fn clean_table_never_prompts() {
    let dob = NaiveDate::from_ymd_opt(1970, 2, 3);
    let repository = Arc::new(InMemoryUserRepository::new(vec![user(7, dob, "9 Elm Rd")]));

    let (outcome, console) = run_against(repository.clone(), "yes").await;

    assert_eq!(outcome, Some(RepairOutcome::Clean));
    assert!(console.questions().is_empty());
    assert_eq!(repository.close_calls(), 1);
}

#[tokio::test]
async fn failures_are_printed_and_swallowed() {
    let repository = Arc::new(InMemoryUserRepository::new(scenario_rows()));

    let (first, _) = run_against(repository.clone(), "no").await;
    assert!(first.is_some());

    // The connection is gone after the first run; a second run must fail
    // gracefully and still release exactly once more.
    let (second, console) = run_against(repository.clone(), "yes").await;

    assert_eq!(second, None);
    assert_eq!(repository.close_calls(), 2);
    assert!(
        console
            .output()
            .contains("❌ Error: Database connection already released")
    );
}

#[test]
fn failure_marker_distinguishes_database_errors() {
    let console = Arc::new(ScriptedConsole::default());
    let dyn_console = console.clone() as DynConsole;

    report_failure(&dyn_console, &AppError::SqlxError(sqlx::Error::RowNotFound));
    report_failure(&dyn_console, &AppError::InternalError("boom".into()));
    report_failure(
        &dyn_console,
        &AppError::IoError(std::io::Error::other("stdin closed")),
    );

    let lines = console.lines();
    assert!(lines[0].starts_with("❌ Database error: "));
    assert_eq!(lines[1], "❌ Error: boom");
    assert_eq!(lines[2], "❌ Error: stdin closed");
}

#[tokio::test]
async fn unreachable_database_is_reported_not_raised() {
    let config = Config {
        database: DatabaseConfig {
            host: "127.0.0.1".into(),
            port: 1,
            ..DatabaseConfig::default()
        },
        log_dir: "logs".into(),
    };
    let console = Arc::new(ScriptedConsole::answering("yes"));

    let outcome = run(&config, console.clone() as DynConsole).await;

    assert_eq!(outcome, None);
    assert!(console.questions().is_empty());
    assert!(console.output().starts_with("❌ Database error: "));
}
