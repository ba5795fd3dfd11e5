use anyhow::{Context, Result};
use dotenv::dotenv;
use fixer::runner;
use shared::{
    abstract_trait::DynConsole,
    config::Config,
    utils::{StdConsole, init_logger},
};
use std::sync::Arc;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _log_guard =
        init_logger(&config.log_dir, "fix_user_fields").context("Failed to initialize logger")?;

    println!("\n🔧 User Fields Fix Script");
    println!("This script will check and fix users with NULL DOB or address\n");

    let console = Arc::new(StdConsole::new()) as DynConsole;

    let outcome = runner::run(&config, console).await;

    info!("Repair run finished: {:?}", outcome);

    println!("\n✅ Script completed!");

    Ok(())
}
