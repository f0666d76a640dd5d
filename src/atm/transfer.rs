use super::account::AccountNumber;
use super::Decimal;
use serde::Deserialize;

/// A request to move money between two accounts.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    #[serde(default)]
    pub from_account_number: AccountNumber,
    #[serde(default)]
    pub to_account_number: AccountNumber,
    /// Optional reconciliation reference; blank counts as absent.
    #[serde(default)]
    pub reference_number: Option<String>,
    /// Missing amount reads as zero and is rejected by the amount checks.
    #[serde(default)]
    pub amount: Decimal,
}

impl TransferRequest {
    pub fn new(
        from: impl Into<AccountNumber>,
        to: impl Into<AccountNumber>,
        amount: Decimal,
    ) -> Self {
        Self {
            from_account_number: from.into(),
            to_account_number: to.into(),
            reference_number: None,
            amount,
        }
    }

    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference_number = Some(reference.into());
        self
    }

    /// The reference number, if one was given and is not blank.
    pub fn reference(&self) -> Option<&str> {
        self.reference_number
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

impl std::fmt::Display for TransferRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[transfer] from={} to={} amount={}",
            self.from_account_number, self.to_account_number, self.amount
        )?;
        if let Some(reference) = self.reference() {
            write!(f, " ref={reference}")?;
        }
        Ok(())
    }
}
