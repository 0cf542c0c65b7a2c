use crate::models::Account;
use crate::policies::errors::WithdrawalError;
use crate::policies::WithdrawalOutcome;
use crate::types::Monetary;
use tracing::debug;

/// Largest single amount a fast withdrawal may take out.
pub const FAST_WITHDRAW_LIMIT: i64 = 500;

/// The interchangeable rules for taking money out of an account.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum WithdrawalPolicy {
    /// Limited only by the available balance.
    Normal,
    /// Capped at `FAST_WITHDRAW_LIMIT` per withdrawal.
    Fast
}

impl WithdrawalPolicy {
    /// Maps the numeric menu choice to a policy: `1` is normal, anything else is fast.
    pub fn from_choice(choice: i32) -> Self {
        match choice {
            1 => WithdrawalPolicy::Normal,
            _ => WithdrawalPolicy::Fast
        }
    }

    /// Applies a withdrawal of `amount` to `account` under this policy's rules.
    ///
    /// The account is only modified when the returned outcome is `Success`.
    ///
    /// # Errors
    /// Returns `WithdrawalError::NegativeAmount` for a negative amount. A zero amount
    /// is accepted and leaves the balance as it is.
    pub fn apply(self, account: &mut Account, amount: Monetary) -> Result<WithdrawalOutcome, WithdrawalError> {
        if amount.is_negative() {
            return Err(WithdrawalError::NegativeAmount { amount })
        }

        if self == WithdrawalPolicy::Fast {
            let limit = Monetary::from(FAST_WITHDRAW_LIMIT);

            if amount > limit {
                debug!("Fast withdrawal of [{amount}] is over the limit [{limit}]");
                return Ok(WithdrawalOutcome::LimitExceeded { limit })
            }
        }

        if account.balance() < amount {
            debug!("[{:?}] withdrawal of [{amount}] exceeds balance [{}]", self, account.balance());
            return Ok(WithdrawalOutcome::InsufficientFunds)
        }

        let new_balance = account.debit(amount)?;

        debug!("[{:?}] withdrawal of [{amount}] from [{}] account, new balance [{new_balance}]", self, account.kind());

        Ok(WithdrawalOutcome::Success { new_balance })
    }

    /// Formats the message shown to the user for an outcome of this policy.
    pub fn receipt(self, amount: Monetary, outcome: &WithdrawalOutcome) -> String {
        match (self, outcome) {
            (WithdrawalPolicy::Normal, WithdrawalOutcome::Success { new_balance }) => {
                format!("Du har tagit ut {amount}. Ny balans: {new_balance}")
            },
            (WithdrawalPolicy::Fast, WithdrawalOutcome::Success { new_balance }) => {
                format!("Du har snabbt tagit ut {amount}. Ny balans: {new_balance}")
            },
            (_, WithdrawalOutcome::InsufficientFunds) => "Otillräcklig balans.".to_string(),
            (_, WithdrawalOutcome::LimitExceeded { limit }) => format!("Snabbuttag är begränsat till {limit}.")
        }
    }
}
