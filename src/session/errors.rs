use std::io;
use std::num::ParseIntError;

use thiserror::Error;

use crate::models::AccountError;
use crate::policies::WithdrawalError;
use crate::types::MonetaryError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Input ended before the session was complete")]
    InputClosed,
    #[error("Account for user [{username}] is no longer registered")]
    AccountUnavailable {
        username: String
    },
    #[error("Withdrawal policy choice [{input}] is not a whole number")]
    InvalidPolicyChoice {
        input: String,
        source: ParseIntError
    },
    #[error("Withdrawal amount [{input}] is invalid")]
    InvalidAmount {
        input: String,
        source: MonetaryError
    },
    #[error(transparent)]
    Withdrawal(#[from] WithdrawalError),
    #[error(transparent)]
    Account(#[from] AccountError)
}
