use crate::models::errors::AccountError;
use crate::models::AccountKind;
use crate::types::Monetary;
use std::str::FromStr;

/// A single bank account.
///
/// The balance can only be read from outside the crate. Withdrawal policies are the
/// only code that debits it, after they have checked the amount against the balance.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Account {
    kind: AccountKind,
    balance: Monetary
}

impl Account {
    /// Creates an account of the given kind holding its opening balance.
    pub fn new(kind: AccountKind) -> Self {
        Self {
            kind,
            balance: kind.initial_balance()
        }
    }

    /// Creates an account from a type label, `"Savings"` or `"Checking"`.
    ///
    /// # Errors
    /// Returns `AccountError::UnknownAccountType` for any other label.
    pub fn create(account_type: &str) -> Result<Self, AccountError> {
        AccountKind::from_str(account_type).map(Account::new)
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Monetary {
        self.balance
    }

    pub(crate) fn debit(&mut self, amount: Monetary) -> Result<Monetary, AccountError> {
        self.balance = self.balance.checked_sub(amount)
            .ok_or(AccountError::Overflow {
                kind: self.kind,
                balance: self.balance,
                amount
            })?;

        Ok(self.balance)
    }
}
