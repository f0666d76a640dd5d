use crate::atm::AccountNumber;

/// Per-client authentication state carried between requests.
///
/// A session starts anonymous, becomes authenticated for one account after
/// a successful PIN validation and is cleared again on exit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
    account_number: Option<AccountNumber>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// The account this session is logged in to, if any.
    pub fn account_number(&self) -> Option<&str> {
        if self.authenticated {
            self.account_number.as_deref()
        } else {
            None
        }
    }

    /// Replace any previous state with a fresh login for `account_number`.
    pub(crate) fn login(&mut self, account_number: impl Into<AccountNumber>) {
        *self = Self {
            authenticated: true,
            account_number: Some(account_number.into()),
        };
    }

    pub(crate) fn logout(&mut self) {
        *self = Self::default();
    }
}
