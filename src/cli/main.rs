mod commands;

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use atm_simulation::api::AtmApi;
use atm_simulation::{AccountService, AccountStore};
use commands::{Args, Parser};

fn main() -> Result<()> {
    // Parse the CLI arguments
    let args = Args::parse();

    // Initialize logger with default level of info (can be overridden with RUST_LOG)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. Build the account store
    let store = match &args.accounts {
        Some(path) => {
            log::info!("Loading accounts from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open accounts file: {}", path.display()))?;
            AccountStore::load_csv(file)
                .with_context(|| format!("Failed to load accounts from {}", path.display()))?
        }
        None => AccountStore::seeded(),
    };
    log::info!("ATM ready with {} accounts", store.len());

    // 2. Wire the service and request layer
    let api = AtmApi::new(AccountService::with_store(store, args.rules()));

    // 3. Replay the request script, writing responses to stdout
    let stdout = io::stdout().lock();
    let summary = match args.input_path() {
        Some(path) => {
            log::info!("Processing requests from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            api.process_requests(BufReader::new(file), stdout)
        }
        None => {
            log::info!("Processing requests from stdin");
            api.process_requests(io::stdin().lock(), stdout)
        }
    }
    .context("Failed to process requests")?;

    log::info!(
        "Done: {} succeeded, {} failed",
        summary.succeeded,
        summary.failed
    );

    Ok(())
}
