use thiserror::Error;

use crate::models::AccountError;
use crate::types::Monetary;

#[derive(Debug, Error)]
pub enum WithdrawalError {
    #[error("Withdrawal amount must not be negative, got [{amount}]")]
    NegativeAmount {
        amount: Monetary
    },
    #[error(transparent)]
    Account(#[from] AccountError)
}
