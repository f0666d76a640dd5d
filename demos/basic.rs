//! Basic example of using the ATM request layer.
//!
//! Run with: `cargo run --example basic`

use atm_simulation::api::AtmApi;
use std::io::Cursor;

fn main() {
    // Initialize logger (optional, but shows what's happening)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Sample requests, one JSON object per line
    let requests = r#"{"method":"GET","path":"/api/v1/account/balance"}
{"method":"POST","path":"/api/v1/account/validate","body":{"accountNumber":"112233","pin":"012108"}}
{"method":"GET","path":"/api/v1/account/balance"}
{"method":"GET","path":"/api/v1/account/withdraw?amount=30"}
{"method":"GET","path":"/api/v1/account/withdraw?amount=35"}
{"method":"POST","path":"/api/v1/account/transfer","body":{"toAccountNumber":"112244","amount":20,"referenceNumber":"213342"}}
{"method":"GET","path":"/api/v1/account/exit"}
"#;

    let api = AtmApi::default();
    api.process_requests(Cursor::new(requests), std::io::stdout())
        .expect("Failed to process requests");

    println!("\n=== Final Account State ===");
    for account in api.service().store().snapshots() {
        println!(
            "{} ({}): {}",
            account.account_number, account.name, account.balance
        );
    }
}
