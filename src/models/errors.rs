use thiserror::Error;

use crate::models::AccountKind;
use crate::types::Monetary;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Unknown account type [{label}]")]
    UnknownAccountType {
        label: String
    },
    #[error("Numeric overflow occurred debiting [{amount}] from [{kind}] account with balance [{balance}]")]
    Overflow {
        kind: AccountKind,
        balance: Monetary,
        amount: Monetary
    }
}
