//! ATM core.
//!
//! This module contains the account validation and balance-mutation logic:
//! - `AccountService` - PIN validation, withdrawal, balance check and transfer
//! - `AccountStore` - Mutex-guarded in-memory account storage
//! - `Account` / `AccountSnapshot` - Account state and its PIN-free view
//! - `Rules` - Withdrawal and transfer limits
//! - `Error` types - Customer-facing and seed-loading errors

mod account;
mod account_service;
mod error;
mod rules;
mod store;
mod transfer;

pub(crate) use rust_decimal::Decimal;

pub use account::{Account, AccountNumber, AccountSnapshot, CREDENTIAL_LENGTH};
pub use account_service::AccountService;
pub use error::{AtmError, Error, SeedError, BAD_REQUEST};
pub use rules::Rules;
pub use store::AccountStore;
pub use transfer::TransferRequest;
