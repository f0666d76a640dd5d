//! ATM backend simulation.
//!
//! Provides PIN validation, withdrawal, balance check and inter-account
//! transfer over an in-memory account store, plus a transport-free request
//! layer with session-based authentication.

pub mod api;
mod atm;

pub use atm::{
    Account, AccountNumber, AccountService, AccountSnapshot, AccountStore, AtmError, Error, Rules,
    SeedError, TransferRequest, BAD_REQUEST, CREDENTIAL_LENGTH,
};
pub use rust_decimal::Decimal;
