use std::env;
use std::sync::{Mutex, OnceLock};

use leavechain_cli::commands::{config, demo, submit};
use serde_json::Value;

#[test]
fn demo_emits_one_line_per_canonical_request() {
    let result = demo::run();
    assert_eq!(result.exit_code, 0, "demo walkthrough always succeeds");

    let lines: Vec<&str> = result.output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "DirectManager allows conk to take a 2-day leave",
            "DeptManager allows pht to take a 5-day leave",
            "GeneralManager allows penghantian to take a 10-day leave",
            "DeptManager rejects zzm to have a 4-day leave",
        ]
    );
}

#[test]
fn demo_output_is_stable_across_runs() {
    assert_eq!(demo::run().output, demo::run().output);
}

#[test]
fn submit_reports_an_approval_with_exit_zero() {
    let result = submit::run("conk", 2, false);
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.output, "DirectManager allows conk to take a 2-day leave");
}

#[test]
fn submit_reports_a_rejection_with_exit_one() {
    let result = submit::run("zzm", 4, false);
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.output, "DeptManager rejects zzm to have a 4-day leave");
}

#[test]
fn submit_routes_negative_day_counts_to_the_direct_manager() {
    let result = submit::run("zzm", -1, false);
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.output, "DirectManager rejects zzm to have a -1-day leave");
}

#[test]
fn submit_json_payload_carries_the_decision_record() {
    let result = submit::run("pht", 5, true);
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["approved"], true);
    assert_eq!(payload["outcome"]["Approved"]["role"], "DeptManager");
    assert_eq!(payload["decision"]["message"], "DeptManager allows pht to take a 5-day leave");
    assert_eq!(payload["decision"]["days"], 5);
}

#[test]
fn config_reports_defaults_when_nothing_is_set() {
    with_env(&[], || {
        let output = config::run();
        assert!(output.contains("logging.level = info (default)"), "got: {output}");
        assert!(output.contains("logging.format = compact (default)"), "got: {output}");
    });
}

#[test]
fn config_attributes_env_overrides_to_their_variable() {
    with_env(&[("LEAVECHAIN_LOGGING_LEVEL", "debug")], || {
        let output = config::run();
        assert!(
            output.contains("logging.level = debug (env:LEAVECHAIN_LOGGING_LEVEL)"),
            "got: {output}"
        );
    });
}

#[test]
fn config_surfaces_validation_failures() {
    with_env(&[("LEAVECHAIN_LOGGING_LEVEL", "verbose")], || {
        let output = config::run();
        assert!(output.contains("config validation failed"), "got: {output}");
    });
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output must be valid JSON")
}

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn with_env<T>(vars: &[(&str, &str)], run: impl FnOnce() -> T) -> T {
    let guard = env_lock().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    for (key, value) in vars {
        env::set_var(key, value);
    }
    let result = run();
    for (key, _) in vars {
        env::remove_var(key);
    }
    drop(guard);
    result
}
