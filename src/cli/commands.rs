pub(crate) use clap::Parser;
use atm_simulation::{Decimal, Rules};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "atm-simulation",
    author,
    version,
    about = "A simple ATM backend simulation",
    long_about = None,
    after_help = "INPUT:\n    One JSON request per line, e.g.\n    {\"method\":\"POST\",\"path\":\"/api/v1/account/validate\",\"body\":{\"accountNumber\":\"112233\",\"pin\":\"012108\"}}\n\nOUTPUT:\n    One JSON response per request is printed to stdout.\n    Use shell redirection to save to a file:\n\n    atm-simulation requests.jsonl > responses.jsonl"
)]
pub struct Args {
    /// Path to the request script; reads stdin when omitted or `-`
    #[arg(index = 1, value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// CSV file with columns: name, account_number, pin, balance
    #[arg(long, value_name = "CSV")]
    pub accounts: Option<PathBuf>,

    /// Allow withdrawals that are not a multiple of 10
    #[arg(long)]
    pub no_denomination_check: bool,

    /// Largest single withdrawal
    #[arg(long, value_name = "AMOUNT", default_value = "1000")]
    pub max_withdraw: Decimal,

    /// Largest single transfer
    #[arg(long, value_name = "AMOUNT", default_value = "1000")]
    pub max_transfer: Decimal,
}

impl Args {
    pub fn rules(&self) -> Rules {
        let defaults = Rules::default();
        Rules {
            max_withdraw: self.max_withdraw,
            withdraw_denomination: if self.no_denomination_check {
                None
            } else {
                defaults.withdraw_denomination
            },
            max_transfer: self.max_transfer,
            ..defaults
        }
    }

    /// The request script path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input_file
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }
}
