use std::io::{stderr, stdin, stdout};

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use atm_simulator::session::{AtmSession, SessionOutcome};

fn main() -> Result<()> {
    let log_level = std::env::args().nth(1)
        .map(|s| parse_log_level(&s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let session = AtmSession::with_default_accounts()?;

    let mut input = stdin().lock();
    let mut output = stdout().lock();

    match session.run(&mut input, &mut output) {
        Ok(SessionOutcome::UnknownUser { username }) => {
            info!("Session ended, user [{username}] is not registered");
        },
        Ok(SessionOutcome::Completed { policy, amount, outcome }) => {
            info!("Session ended after [{policy:?}] withdrawal of [{amount}]: {outcome:?}");
        },
        Err(session_error) => {
            error!("Session aborted: {session_error}");
            return Err(session_error.into());
        }
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the ATM dialogue, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
