use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn warden(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("warden").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("WARDEN_DATA_DIR")
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE")
        .env("NO_COLOR", "1");
    cmd
}

fn saved_actions(dir: &TempDir) -> serde_json::Value {
    let content = fs::read_to_string(dir.path().join("calc_data/saved_actions.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_first_run_creates_data_files() {
    let dir = TempDir::new().unwrap();

    warden(&dir).write_stdin("stop\n").assert().success();

    let settings = fs::read_to_string(dir.path().join("calc_data/settings.ini")).unwrap();
    assert_eq!(
        settings,
        "[Calculator]\nsavepath = \"calc_data/saved_actions.json\"\nshowhistory = True\nshowentrysum = True\n\n"
    );
    assert_eq!(saved_actions(&dir), serde_json::json!({"actions": []}));
}

#[test]
fn test_shell_session() {
    let dir = TempDir::new().unwrap();

    warden(&dir)
        .write_stdin("5 + 3\nsqrt 16\n5 / 0\nfoo bar baz\nstop\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("WARDEN-CALCULATOR"))
        .stdout(predicate::str::contains("> clear history"))
        .stdout(predicate::str::contains("The result is 8.0"))
        .stdout(predicate::str::contains("The result is 4.0"))
        .stdout(predicate::str::contains("MATH ERROR"))
        .stdout(predicate::str::contains("Invalid input"))
        .stdout(predicate::str::contains("5 + 3 = 8.0"))
        .stdout(predicate::str::contains("Sum of last 5 results: 12.0"))
        .stdout(predicate::str::contains("Stopping the program..."));

    assert_eq!(
        saved_actions(&dir),
        serde_json::json!({"actions": [{"5 + 3": 8.0}, {"sqrt 16": 4.0}]})
    );
}

#[test]
fn test_shell_ends_on_eof() {
    let dir = TempDir::new().unwrap();

    warden(&dir)
        .write_stdin("2 * 21\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The result is 42.0"));
}

#[test]
fn test_shell_survives_non_utf8_line() {
    let dir = TempDir::new().unwrap();

    warden(&dir)
        .write_stdin(b"\xff\xfe\n5 + 3\nstop\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input"))
        .stdout(predicate::str::contains("The result is 8.0"))
        .stdout(predicate::str::contains("Stopping the program..."));

    assert_eq!(
        saved_actions(&dir),
        serde_json::json!({"actions": [{"5 + 3": 8.0}]})
    );
}

#[test]
fn test_history_with_bare_infinity_is_kept() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("calc_data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("saved_actions.json"),
        r#"{"actions": [{"1 + 1": 2.0}, {"1e308 * 10": Infinity}]}"#,
    )
    .unwrap();

    warden(&dir)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 + 1 = 2.0"))
        .stdout(predicate::str::contains("1e308 * 10 = NaN"));

    assert_eq!(
        saved_actions(&dir),
        serde_json::json!({"actions": [{"1 + 1": 2.0}, {"1e308 * 10": null}]})
    );
}

#[test]
fn test_clear_history_in_shell() {
    let dir = TempDir::new().unwrap();

    warden(&dir)
        .write_stdin("1 + 1\nclear history\n2 + 2\nstop\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared calculator history"));

    assert_eq!(
        saved_actions(&dir),
        serde_json::json!({"actions": [{"2 + 2": 4.0}]})
    );
}

#[test]
fn test_history_survives_restart() {
    let dir = TempDir::new().unwrap();

    warden(&dir).args(["eval", "5", "+", "3"]).assert().success();
    warden(&dir).args(["eval", "SIN", "90"]).assert().success();
    warden(&dir).args(["eval", "10", "-", "4"]).assert().success();

    warden(&dir)
        .args(["history", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sin 90 = 1.0"))
        .stdout(predicate::str::contains("10 - 4 = 6.0"))
        .stdout(predicate::str::contains("5 + 3").not());
}

#[test]
fn test_eval_errors_exit_nonzero_and_write_nothing() {
    let dir = TempDir::new().unwrap();

    warden(&dir)
        .args(["eval", "5", "/", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Division by zero"));

    warden(&dir)
        .args(["eval", "5", "++", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));

    assert_eq!(saved_actions(&dir), serde_json::json!({"actions": []}));
}

#[test]
fn test_eval_negative_operand() {
    let dir = TempDir::new().unwrap();

    warden(&dir)
        .args(["eval", "-1.5", "*", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The result is -3.0"));
}

#[test]
fn test_hidden_history_respects_setting() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("calc_data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("settings.ini"),
        "[Calculator]\nsavepath = \"calc_data/saved_actions.json\"\nshowhistory = False\nshowentrysum = False\n",
    )
    .unwrap();

    warden(&dir).args(["eval", "7", "*", "6"]).assert().success();
    warden(&dir)
        .write_stdin("stop\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculator History").not())
        .stdout(predicate::str::contains("Sum of last").not());
}

#[test]
fn test_missing_option_is_restored() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("calc_data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("settings.ini"), "[Calculator]\nshowhistory = False\n").unwrap();

    warden(&dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("savepath = calc_data/saved_actions.json"))
        .stdout(predicate::str::contains("showhistory = False"))
        .stdout(predicate::str::contains("showentrysum = True"));

    let settings = fs::read_to_string(data_dir.join("settings.ini")).unwrap();
    assert!(settings.contains("savepath = \"calc_data/saved_actions.json\""));
}

#[test]
fn test_config_unknown_key_fails() {
    let dir = TempDir::new().unwrap();

    warden(&dir)
        .args(["config", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'nope'"));
}

#[test]
fn test_custom_data_dir() {
    let dir = TempDir::new().unwrap();

    warden(&dir)
        .args(["--data-dir", "elsewhere", "eval", "2", "+", "2"])
        .assert()
        .success();

    assert!(dir.path().join("elsewhere/settings.ini").exists());
    let content = fs::read_to_string(dir.path().join("elsewhere/saved_actions.json")).unwrap();
    assert!(content.contains("\"2 + 2\": 4.0"));
}

#[test]
fn test_clear_and_sum_subcommands() {
    let dir = TempDir::new().unwrap();

    warden(&dir).args(["eval", "1", "+", "2"]).assert().success();
    warden(&dir).args(["eval", "3", "+", "4"]).assert().success();

    warden(&dir)
        .args(["sum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum of last 5 results: 10.0"));

    warden(&dir).args(["clear"]).assert().success();
    assert_eq!(saved_actions(&dir), serde_json::json!({"actions": []}));

    warden(&dir)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History is empty."));
}
