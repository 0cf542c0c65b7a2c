mod atm_session;
mod errors;

use crate::policies::{WithdrawalOutcome, WithdrawalPolicy};
use crate::types::{Monetary, Username};

pub use atm_session::AtmSession;
pub use errors::SessionError;

/// How a single ATM session ended, when it ended without an error.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SessionOutcome {
    /// The username was not registered; nothing else was asked.
    UnknownUser {
        username: Username
    },
    /// A withdrawal was attempted and its outcome reported to the user.
    Completed {
        policy: WithdrawalPolicy,
        amount: Monetary,
        outcome: WithdrawalOutcome
    }
}
