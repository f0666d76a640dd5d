use super::error::{AtmError, SeedError};
use super::Decimal;
use serde::{Deserialize, Serialize};

pub type AccountNumber = String;

/// Length every account number and PIN must have.
pub const CREDENTIAL_LENGTH: usize = 6;

/// Returns true if `value` is non-empty and made only of ASCII digits.
pub(crate) fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// A customer account held by the ATM.
///
/// The PIN never leaves this type; callers outside the store only ever see
/// an [`AccountSnapshot`].
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    name: String,
    account_number: AccountNumber,
    pin: String,
    balance: Decimal,
}

impl Account {
    /// Build an account, rejecting malformed credentials or a negative balance.
    pub fn new(
        name: impl Into<String>,
        account_number: impl Into<AccountNumber>,
        pin: impl Into<String>,
        balance: Decimal,
    ) -> Result<Self, SeedError> {
        let account = Self {
            name: name.into(),
            account_number: account_number.into(),
            pin: pin.into(),
            balance,
        };
        account.validate()?;
        Ok(account)
    }

    /// Build an account from values known to be well-formed.
    pub(super) fn trusted(name: &str, account_number: &str, pin: &str, balance: Decimal) -> Self {
        let account = Self {
            name: name.to_string(),
            account_number: account_number.to_string(),
            pin: pin.to_string(),
            balance,
        };
        debug_assert!(account.validate().is_ok(), "malformed built-in account");
        account
    }

    fn validate(&self) -> Result<(), SeedError> {
        let account = || self.account_number.clone();
        if self.account_number.len() != CREDENTIAL_LENGTH || !is_numeric(&self.account_number) {
            return Err(SeedError::InvalidAccountNumber { account: account() });
        }
        if self.pin.len() != CREDENTIAL_LENGTH || !is_numeric(&self.pin) {
            return Err(SeedError::InvalidPin { account: account() });
        }
        if self.balance < Decimal::ZERO {
            return Err(SeedError::NegativeBalance {
                account: account(),
                balance: self.balance,
            });
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub(super) fn pin_matches(&self, pin: &str) -> bool {
        self.pin == pin
    }

    /// Debit the account.
    /// Caller must ensure the balance covers `amount`.
    pub(super) fn debit(&mut self, amount: Decimal) {
        debug_assert!(
            self.balance >= amount,
            "debit of {amount} would overdraw account {}",
            self.account_number
        );
        self.balance -= amount;
        self.balance = self.balance.normalize();
    }

    /// Credit the account.
    /// Leaves the balance untouched if it cannot represent the result.
    pub(super) fn credit(&mut self, amount: Decimal) -> Result<(), AtmError> {
        debug_assert!(amount > Decimal::ZERO, "credit of non-positive amount {amount}");
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AtmError::BalanceOverflow)?
            .normalize();
        Ok(())
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            name: self.name.clone(),
            account_number: self.account_number.clone(),
            balance: self.balance,
        }
    }
}

/// Public view of an account: everything except the PIN.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountSnapshot {
    pub name: String,
    pub account_number: AccountNumber,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn john() -> Account {
        Account::new("John Doe", "112233", "012108", dec!(100)).unwrap()
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("012108"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("a12345"));
        assert!(!is_numeric("-12345"));
        assert!(!is_numeric("12 345"));
    }

    #[test]
    fn test_new_rejects_bad_account_number() {
        let err = Account::new("X", "11223", "012108", dec!(1)).unwrap_err();
        assert_eq!(
            err,
            SeedError::InvalidAccountNumber {
                account: "11223".to_string()
            }
        );
        assert!(Account::new("X", "11a233", "012108", dec!(1)).is_err());
    }

    #[test]
    fn test_new_rejects_bad_pin_and_negative_balance() {
        assert!(matches!(
            Account::new("X", "112233", "01210", dec!(1)),
            Err(SeedError::InvalidPin { .. })
        ));
        assert!(matches!(
            Account::new("X", "112233", "012108", dec!(-0.01)),
            Err(SeedError::NegativeBalance { .. })
        ));
        assert!(Account::new("X", "112233", "012108", Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_debit_and_credit_adjust_balance() {
        let mut account = john();
        account.debit(dec!(40));
        assert_eq!(account.balance(), dec!(60));
        account.credit(dec!(15.50)).unwrap();
        assert_eq!(account.balance(), dec!(75.5));
        assert_eq!(account.balance().to_string(), "75.5");
    }

    #[test]
    fn test_credit_overflow_leaves_balance_unchanged() {
        let mut account = Account::new("Rich", "100002", "222222", Decimal::MAX).unwrap();
        assert_eq!(account.credit(dec!(10)), Err(AtmError::BalanceOverflow));
        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[test]
    fn test_snapshot_hides_pin() {
        let json = serde_json::to_value(john().snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "John Doe",
                "accountNumber": "112233",
                "balance": 100.0
            })
        );
    }

    #[test]
    fn test_pin_matches() {
        let account = john();
        assert!(account.pin_matches("012108"));
        assert!(!account.pin_matches("012109"));
    }
}
