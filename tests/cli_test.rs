use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_summary() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("reelpay"));
    cmd.args(["--rounds", "500", "--seed", "42", "--bet", "2"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("machine: Classic Fruits"))
        .stdout(predicate::str::contains("idle payline: seven|seven|seven"))
        .stdout(predicate::str::contains("rounds: 500"))
        .stdout(predicate::str::contains("wagered: 1000"));

    Ok(())
}

#[test]
fn test_cli_is_reproducible_with_seed() {
    let run = || {
        Command::new(cargo_bin!("reelpay"))
            .args(["--rounds", "300", "--seed", "7", "--lucky-coin", "--json"])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let report: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(report["rounds"], 300);
    assert_eq!(report["rule_hits"].as_array().unwrap().len(), 9);
}

#[test]
fn test_cli_writes_round_log() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("rounds.csv");

    Command::new(cargo_bin!("reelpay"))
        .args(["--rounds", "25", "--seed", "3"])
        .arg("--log")
        .arg(&log)
        .assert()
        .success();

    let content = std::fs::read_to_string(&log).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("round,left,middle,right,bet,lucky_coin,rule,result,payout,bonus")
    );
    assert_eq!(lines.count(), 25);
}

#[test]
fn test_cli_rejects_out_of_range_bet() {
    let mut cmd = Command::new(cargo_bin!("reelpay"));
    cmd.args(["--bet", "4"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}
