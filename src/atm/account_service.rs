use super::account::{is_numeric, AccountSnapshot, CREDENTIAL_LENGTH};
use super::error::AtmError;
use super::rules::Rules;
use super::store::AccountStore;
use super::transfer::TransferRequest;
use super::Decimal;

/// ATM account operations: PIN validation, withdrawal, balance check and transfer.
///
/// Every operation validates its input first and only touches balances once
/// all checks pass. Checks and mutation for one call run under a single
/// store lock, so the service can be shared across threads.
#[derive(Debug, Default)]
pub struct AccountService {
    store: AccountStore,
    rules: Rules,
}

fn is_blank(value: &str) -> bool {
    value.trim_matches(' ').is_empty()
}

/// Checks shared by PIN validation and balance check, in order.
fn check_account_number_format(account_number: &str) -> Result<(), AtmError> {
    if is_blank(account_number) {
        return Err(AtmError::AccountNumberRequired);
    }
    if account_number.len() < CREDENTIAL_LENGTH {
        return Err(AtmError::AccountNumberTooShort);
    }
    if !is_numeric(account_number) {
        return Err(AtmError::AccountNumberNotNumeric);
    }
    Ok(())
}

impl AccountService {
    /// Service over the two sample accounts with default limits.
    pub fn new() -> Self {
        Self::with_store(AccountStore::seeded(), Rules::default())
    }

    pub fn with_store(store: AccountStore, rules: Rules) -> Self {
        log::debug!(
            "AccountService initialized with {} accounts, rules={:?}",
            store.len(),
            rules
        );
        Self { store, rules }
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Check an account number / PIN pair against the stored accounts.
    pub fn validate_pin(&self, account_number: &str, pin: &str) -> Result<(), AtmError> {
        log::trace!("[validate] account={account_number}");

        if is_blank(account_number) {
            return Err(AtmError::AccountNumberRequired);
        }
        if is_blank(pin) {
            return Err(AtmError::PinRequired);
        }
        if account_number.len() < CREDENTIAL_LENGTH {
            return Err(AtmError::AccountNumberTooShort);
        }
        if pin.len() < CREDENTIAL_LENGTH {
            return Err(AtmError::PinTooShort);
        }
        if !is_numeric(account_number) {
            return Err(AtmError::AccountNumberNotNumeric);
        }
        if !is_numeric(pin) {
            return Err(AtmError::PinNotNumeric);
        }

        let matches = self.store.with_accounts(|accounts| {
            accounts
                .get(account_number)
                .is_some_and(|account| account.pin_matches(pin))
        });
        if !matches {
            return Err(AtmError::InvalidCredentials);
        }

        log::debug!("[validate] account={account_number} authenticated");
        Ok(())
    }

    /// Withdraw cash from an account and return its updated snapshot.
    pub fn withdraw(
        &self,
        account_number: &str,
        amount: Decimal,
    ) -> Result<AccountSnapshot, AtmError> {
        log::trace!("[withdraw] account={account_number} amount={amount}");

        if account_number.is_empty() {
            return Err(AtmError::AccountNumberRequired);
        }
        if amount <= Decimal::ZERO {
            return Err(AtmError::InvalidWithdrawAmount);
        }
        if amount > self.rules.max_withdraw {
            return Err(AtmError::WithdrawLimitExceeded {
                max: self.rules.max_withdraw,
            });
        }
        if !self.rules.is_dispensable(amount) {
            return Err(AtmError::InvalidDenomination);
        }

        let snapshot = self.store.with_accounts(|accounts| -> Result<AccountSnapshot, AtmError> {
            let account = accounts
                .get_mut(account_number)
                .ok_or(AtmError::InvalidCredentials)?;

            if account.balance() < amount {
                return Err(AtmError::InsufficientBalance {
                    requested: amount.normalize(),
                });
            }

            account.debit(amount);
            Ok(account.snapshot())
        })?;

        log::debug!(
            "[withdraw] account={account_number} amount={amount} -> new_balance={}",
            snapshot.balance
        );
        Ok(snapshot)
    }

    /// Read an account's current state without changing it.
    pub fn balance_check(&self, account_number: &str) -> Result<AccountSnapshot, AtmError> {
        log::trace!("[balance] account={account_number}");

        check_account_number_format(account_number)?;
        self.store
            .snapshot(account_number)
            .ok_or(AtmError::InvalidCredentials)
    }

    /// Move money between two accounts and return the source snapshot.
    pub fn transfer(&self, transfer: &TransferRequest) -> Result<AccountSnapshot, AtmError> {
        log::trace!("{transfer}");

        let from = transfer.from_account_number.as_str();
        let to = transfer.to_account_number.as_str();
        let amount = transfer.amount;

        if from.is_empty() || to.is_empty() {
            return Err(AtmError::AccountNumberRequired);
        }
        if from == to {
            return Err(AtmError::SameAccount);
        }
        if !is_numeric(from) {
            return Err(AtmError::InvalidAccount);
        }

        let snapshot = self.store.with_accounts(|accounts| -> Result<AccountSnapshot, AtmError> {
            if !accounts.contains_key(from) || !accounts.contains_key(to) {
                return Err(AtmError::InvalidAccount);
            }
            if amount <= Decimal::ZERO {
                return Err(AtmError::InvalidTransferAmount);
            }
            if amount > self.rules.max_transfer {
                return Err(AtmError::TransferLimitExceeded {
                    max: self.rules.max_transfer,
                });
            }
            if amount < self.rules.min_transfer {
                return Err(AtmError::TransferBelowMinimum {
                    min: self.rules.min_transfer,
                });
            }
            if accounts[from].balance() < amount {
                return Err(AtmError::InsufficientBalance {
                    requested: amount.normalize(),
                });
            }
            if transfer.reference().is_some_and(|r| !is_numeric(r)) {
                return Err(AtmError::InvalidReferenceNumber);
            }

            // Credit first: it is the only step that can still fail.
            accounts
                .get_mut(to)
                .ok_or(AtmError::InvalidAccount)?
                .credit(amount)?;
            let source = accounts
                .get_mut(from)
                .ok_or(AtmError::InvalidAccount)?;
            source.debit(amount);
            Ok(source.snapshot())
        })?;

        log::debug!(
            "[transfer] from={from} to={to} amount={amount} -> new_balance={}",
            snapshot.balance
        );
        Ok(snapshot)
    }
}
