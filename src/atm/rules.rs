use super::Decimal;

/// Business limits applied by [`AccountService`](super::AccountService).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    /// Largest single withdrawal.
    pub max_withdraw: Decimal,
    /// Withdrawals must be a multiple of this note size. `None` disables the check.
    pub withdraw_denomination: Option<Decimal>,
    /// Largest single transfer.
    pub max_transfer: Decimal,
    /// Smallest single transfer.
    pub min_transfer: Decimal,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_withdraw: Decimal::ONE_THOUSAND,
            withdraw_denomination: Some(Decimal::TEN),
            max_transfer: Decimal::ONE_THOUSAND,
            min_transfer: Decimal::ONE,
        }
    }
}

impl Rules {
    /// Returns true if `amount` can be paid out in whole notes.
    pub(super) fn is_dispensable(&self, amount: Decimal) -> bool {
        match self.withdraw_denomination {
            Some(note) if !note.is_zero() => (amount % note).is_zero(),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_denomination_is_ten() {
        let rules = Rules::default();
        assert!(rules.is_dispensable(dec!(50)));
        assert!(rules.is_dispensable(dec!(1000)));
        assert!(!rules.is_dispensable(dec!(901)));
        assert!(!rules.is_dispensable(dec!(10.5)));
    }

    #[test]
    fn test_disabled_denomination_accepts_anything() {
        let rules = Rules {
            withdraw_denomination: None,
            ..Rules::default()
        };
        assert!(rules.is_dispensable(dec!(901)));
        assert!(rules.is_dispensable(dec!(0.01)));
    }
}
