use std::io::Write;
use std::process::{Command, Output, Stdio};
use anyhow::{anyhow, Result};

fn run_atm(answers: &str) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_atm-simulator");

    let mut child = Command::new(binary_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child.stdin.take()
        .ok_or_else(|| anyhow!("stdin of the ATM process was not captured"))?
        .write_all(answers.as_bytes())?;

    Ok(child.wait_with_output()?)
}

#[test]
fn test_cli_normal_withdrawal_prints_new_balance() -> Result<()> {
    let output = run_atm("user1\n1\n200\n")?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines, vec![
        "Ange användarnamn user1 eller user2:",
        "Välj uttagsstrategi: 1 för Normal Uttag, 2 för Snabb Uttag",
        "Ange belopp att ta ut:",
        "Du har tagit ut 200. Ny balans: 800"
    ]);

    Ok(())
}

#[test]
fn test_cli_fast_withdrawal_over_limit_is_declined() -> Result<()> {
    let output = run_atm("user2\n2\n600\n")?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout.lines().last(), Some("Snabbuttag är begränsat till 500."));

    Ok(())
}

#[test]
fn test_cli_unknown_user_ends_session() -> Result<()> {
    let output = run_atm("user3\n")?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines, vec!["Ange användarnamn user1 eller user2:", "Fel användarnamn."]);

    Ok(())
}

#[test]
fn test_cli_fails_on_unparseable_amount() -> Result<()> {
    let output = run_atm("user1\n1\nmycket\n")?;

    assert!(!output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(!stdout.contains("Ny balans"));
    assert!(!output.stderr.is_empty());

    Ok(())
}

#[test]
fn test_cli_fails_on_unparseable_policy_choice() -> Result<()> {
    let output = run_atm("user1\nett\n100\n")?;

    assert!(!output.status.success());

    Ok(())
}
