use crate::models::Account;
use crate::policies::WithdrawalPolicy;
use crate::session::errors::SessionError;
use crate::session::SessionOutcome;
use crate::storage::AccountDirectory;
use crate::types::Monetary;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, warn};

const USERNAME_PROMPT: &str = "Ange användarnamn user1 eller user2:";
const POLICY_PROMPT: &str = "Välj uttagsstrategi: 1 för Normal Uttag, 2 för Snabb Uttag";
const AMOUNT_PROMPT: &str = "Ange belopp att ta ut:";
const UNKNOWN_USER_MESSAGE: &str = "Fel användarnamn.";

/// Drives one interactive ATM session: log in, pick a withdrawal policy, withdraw once.
pub struct AtmSession {
    directory: AccountDirectory
}

impl AtmSession {
    /// Creates a session over an already populated directory.
    pub fn new(directory: AccountDirectory) -> Self {
        Self {
            directory
        }
    }

    /// Creates a session with `user1` holding a savings account and `user2` a checking account.
    pub fn with_default_accounts() -> Result<Self, SessionError> {
        let directory = AccountDirectory::new();

        directory.register("user1", Account::create("Savings")?);
        directory.register("user2", Account::create("Checking")?);

        Ok(Self::new(directory))
    }

    pub fn directory(&self) -> &AccountDirectory {
        &self.directory
    }

    /// Runs the dialogue once, reading answers from `input` and writing prompts and
    /// results to `output`.
    ///
    /// Declined withdrawals and unknown usernames are reported to the user and end the
    /// session normally.
    ///
    /// # Errors
    /// Returns `SessionError` if the input ends early, the policy choice or amount
    /// cannot be parsed, the amount is negative, or reading/writing fails.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<SessionOutcome, SessionError> {
        prompt(output, USERNAME_PROMPT)?;
        let username = read_line(input)?;

        let Some(kind) = self.directory.lookup(&username).map(|account| account.kind()) else {
            warn!("Login attempted with unknown user [{username}]");
            writeln!(output, "{UNKNOWN_USER_MESSAGE}")?;
            output.flush()?;
            return Ok(SessionOutcome::UnknownUser { username })
        };

        info!("User [{username}] logged in to [{kind}] account");

        prompt(output, POLICY_PROMPT)?;
        let choice = read_line(input)?;
        let policy = choice.trim().parse::<i32>()
            .map(WithdrawalPolicy::from_choice)
            .map_err(|source| SessionError::InvalidPolicyChoice { input: choice.clone(), source })?;

        debug!("User [{username}] selected [{policy:?}] withdrawal");

        prompt(output, AMOUNT_PROMPT)?;
        let entered = read_line(input)?;
        let amount = Monetary::from_str(&entered)
            .map_err(|source| SessionError::InvalidAmount { input: entered.clone(), source })?;

        //NOTE: The account handle locks its directory shard, so it is only taken once all input has been read
        let mut account = self.directory.lookup(&username)
            .ok_or_else(|| SessionError::AccountUnavailable { username: username.clone() })?;
        let outcome = policy.apply(&mut account, amount)?;
        drop(account);

        writeln!(output, "{}", policy.receipt(amount, &outcome))?;
        output.flush()?;

        info!("User [{username}] [{policy:?}] withdrawal of [{amount}] finished: {outcome:?}");

        Ok(SessionOutcome::Completed { policy, amount, outcome })
    }
}

fn prompt<W: Write>(output: &mut W, message: &str) -> Result<(), SessionError> {
    writeln!(output, "{message}")?;
    output.flush()?;

    Ok(())
}

/// Reads one line with only its terminator removed.
fn read_line<R: BufRead>(input: &mut R) -> Result<String, SessionError> {
    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        return Err(SessionError::InputClosed)
    }

    if line.ends_with('\n') {
        line.pop();

        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
