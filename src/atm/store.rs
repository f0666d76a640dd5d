use std::collections::HashMap;
use std::io::Read;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Deserialize;

use super::account::{Account, AccountNumber, AccountSnapshot};
use super::error::{Error, SeedError};
use super::Decimal;

/// Raw seed row as parsed from CSV input.
#[derive(Debug, Deserialize)]
struct SeedRecord {
    name: String,
    account_number: String,
    pin: String,
    /// Parsed from the field text so no precision is lost.
    #[serde(with = "rust_decimal::serde::str")]
    balance: Decimal,
}

/// In-memory account storage shared by every ATM operation.
///
/// All reads and writes go through a single mutex so that a
/// check-then-mutate sequence (e.g. balance check then debit) is atomic.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: Mutex<HashMap<AccountNumber, Account>>,
}

impl AccountStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the two sample accounts every ATM starts with.
    pub fn seeded() -> Self {
        let seeds = [
            ("John Doe", "112233", "012108"),
            ("Jane Doe", "112244", "932012"),
        ];
        let accounts = seeds
            .into_iter()
            .map(|(name, number, pin)| {
                (
                    number.to_string(),
                    Account::trusted(name, number, pin, Decimal::ONE_HUNDRED),
                )
            })
            .collect();
        log::trace!("AccountStore seeded with sample accounts");
        Self {
            accounts: Mutex::new(accounts),
        }
    }

    /// Build a store from already-validated accounts, rejecting duplicates.
    pub fn from_accounts<I>(accounts: I) -> Result<Self, SeedError>
    where
        I: IntoIterator<Item = Account>,
    {
        let mut map = HashMap::new();
        for account in accounts {
            let number = account.account_number().to_string();
            if map.contains_key(&number) {
                return Err(SeedError::DuplicateAccount { account: number });
            }
            map.insert(number, account);
        }
        Ok(Self {
            accounts: Mutex::new(map),
        })
    }

    /// Load accounts from CSV with columns: `name, account_number, pin, balance`.
    /// The CSV reader is buffered internally; do not wrap `reader` in a `BufReader`.
    pub fn load_csv<R: Read>(reader: R) -> Result<Self, Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut accounts = Vec::new();
        for result in csv_reader.deserialize() {
            let record: SeedRecord = result?;
            log::trace!(
                "Seed row: account={} name={:?}",
                record.account_number,
                record.name
            );
            accounts.push(Account::new(
                record.name,
                record.account_number,
                record.pin,
                record.balance,
            )?);
        }

        let store = Self::from_accounts(accounts)?;
        log::info!("Loaded {} accounts from seed file", store.len());
        Ok(store)
    }

    /// Number of accounts held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of one account, if it exists.
    pub fn snapshot(&self, account_number: &str) -> Option<AccountSnapshot> {
        self.lock().get(account_number).map(Account::snapshot)
    }

    /// Snapshots of every account, ordered by account number.
    pub fn snapshots(&self) -> Vec<AccountSnapshot> {
        let mut all: Vec<_> = self.lock().values().map(Account::snapshot).collect();
        all.sort_by(|a, b| a.account_number.cmp(&b.account_number));
        all
    }

    /// Run `f` with exclusive access to the account map.
    pub(super) fn with_accounts<T>(
        &self,
        f: impl FnOnce(&mut HashMap<AccountNumber, Account>) -> T,
    ) -> T {
        f(&mut self.lock())
    }

    // Operations only mutate after every check has passed, so a poisoned map
    // is still consistent and can be reused.
    fn lock(&self) -> MutexGuard<'_, HashMap<AccountNumber, Account>> {
        self.accounts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
