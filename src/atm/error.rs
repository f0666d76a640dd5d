use crate::atm::Decimal;

/// HTTP status every domain validation failure maps to.
pub const BAD_REQUEST: u16 = 400;

/// Top-level error type for loading and driving the ATM.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),
}

/// Errors while building the account store from seed records (hard errors).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("Account {account} has an invalid account number")]
    InvalidAccountNumber { account: String },

    #[error("Account {account} has an invalid PIN")]
    InvalidPin { account: String },

    #[error("Account {account} has a negative balance {balance}")]
    NegativeBalance { account: String, balance: Decimal },

    #[error("Account {account} is defined more than once")]
    DuplicateAccount { account: String },
}

/// Soft (customer-facing) errors from account operations.
///
/// The `Display` output of each variant is the exact message shown to the
/// customer, so the wording must not change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AtmError {
    #[error("Account Number is required")]
    AccountNumberRequired,

    #[error("PIN is required")]
    PinRequired,

    #[error("Account Number should have 6 digits length")]
    AccountNumberTooShort,

    #[error("PIN should have 6 digits length")]
    PinTooShort,

    #[error("Account Number should only contains numbers")]
    AccountNumberNotNumeric,

    #[error("PIN should only contains numbers")]
    PinNotNumeric,

    #[error("Invalid Account Number/PIN")]
    InvalidCredentials,

    #[error("Invalid withdraw amount")]
    InvalidWithdrawAmount,

    #[error("Maximum amount to withdraw is ${max}")]
    WithdrawLimitExceeded { max: Decimal },

    #[error("Invalid ammount")]
    InvalidDenomination,

    #[error("Insufficient balance ${requested}")]
    InsufficientBalance { requested: Decimal },

    #[error("From and Destination account number cannot be the same")]
    SameAccount,

    #[error("Invalid account")]
    InvalidAccount,

    #[error("Invalid transfer amount")]
    InvalidTransferAmount,

    #[error("Maximum amount to transfer is ${max}")]
    TransferLimitExceeded { max: Decimal },

    #[error("Minimum amount to transfer is ${min}")]
    TransferBelowMinimum { min: Decimal },

    #[error("Invalid Reference Number")]
    InvalidReferenceNumber,

    #[error("Destination account cannot hold this amount")]
    BalanceOverflow,
}

impl AtmError {
    /// Status code reported alongside the message.
    pub fn status(&self) -> u16 {
        BAD_REQUEST
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_limit_messages_render_amounts() {
        let err = AtmError::WithdrawLimitExceeded { max: dec!(1000) };
        assert_eq!(err.to_string(), "Maximum amount to withdraw is $1000");

        let err = AtmError::TransferBelowMinimum { min: dec!(1) };
        assert_eq!(err.to_string(), "Minimum amount to transfer is $1");
    }

    #[test]
    fn test_every_domain_error_is_bad_request() {
        assert_eq!(AtmError::InvalidCredentials.status(), 400);
        assert_eq!(AtmError::InvalidReferenceNumber.status(), 400);
    }
}
