mod account;
mod errors;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::types::Monetary;

pub use account::Account;
pub use errors::AccountError;

/// The fixed set of account types the bank offers.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AccountKind {
    Savings,
    Checking
}

impl AccountKind {
    /// Opening balance for a freshly created account of this kind.
    pub fn initial_balance(self) -> Monetary {
        match self {
            AccountKind::Savings => Monetary::from(1000),
            AccountKind::Checking => Monetary::from(500)
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Checking => "Checking"
        }
    }
}

impl FromStr for AccountKind {
    type Err = AccountError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "Savings" => Ok(AccountKind::Savings),
            "Checking" => Ok(AccountKind::Checking),
            _ => Err(AccountError::UnknownAccountType { label: label.to_string() })
        }
    }
}

impl Display for AccountKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}
