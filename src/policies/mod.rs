mod errors;
mod withdrawal_policy;

use crate::types::Monetary;

pub use errors::WithdrawalError;
pub use withdrawal_policy::{WithdrawalPolicy, FAST_WITHDRAW_LIMIT};

/// Result of applying a withdrawal policy.
///
/// None of these are errors: a declined withdrawal is reported to the user and the
/// session still completes normally.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum WithdrawalOutcome {
    Success {
        new_balance: Monetary
    },
    InsufficientFunds,
    LimitExceeded {
        limit: Monetary
    }
}
