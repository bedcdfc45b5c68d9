use std::process::Command;

// None of these scenarios may reach the network; the URL points at a closed
// port so an accidental request fails loudly.
fn run_tda(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_tda"))
        .args(args)
        .env("DAYCAPTAIN_URL", "http://127.0.0.1:1")
        .env("DC_API_TOKEN", "token")
        .env_remove("DC_API_TOKEN_COMMAND")
        .env("TZ", "UTC0")
        .output()
        .expect("failed to run tda")
}

#[test]
fn version_flag_short_circuits() {
    let output = run_tda(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "stdout: {stdout}");
}

#[test]
fn help_shows_token_instructions() {
    let output = run_tda(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "stdout: {stdout}");
    assert!(stdout.contains("DC_API_TOKEN_COMMAND"), "stdout: {stdout}");
}

#[test]
fn missing_task_name_is_a_usage_error() {
    let output = run_tda(&["-t"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
}

#[test]
fn unknown_flags_are_rejected() {
    let output = run_tda(&["--unknown", "hello world"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn extra_positional_arguments_are_rejected() {
    let output = run_tda(&["--tomorrow", "something", "hello world"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_token_is_a_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_tda"))
        .args(["hello world"])
        .env("DAYCAPTAIN_URL", "http://127.0.0.1:1")
        .env_remove("DC_API_TOKEN")
        .env_remove("DC_API_TOKEN_COMMAND")
        .env("TZ", "UTC0")
        .output()
        .expect("failed to run tda");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Token is mandatory"), "stderr: {stderr}");
}

#[test]
fn invalid_date_is_reported() {
    let output = run_tda(&["-d", "2021-13-01", "hello world"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid_date"), "stderr: {stderr}");
}

#[test]
fn invalid_week_pattern_is_reported() {
    let output = run_tda(&["-w", "2021-05", "hello world"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid ISO week format: 2021-05"),
        "stderr: {stderr}"
    );
}

#[test]
fn week_before_2020_is_reported() {
    let output = run_tda(&["-w", "2019-W5", "hello world"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("year must be >= 2020"), "stderr: {stderr}");
}

#[test]
fn out_of_range_week_is_reported() {
    let output = run_tda(&["-w", "2021-W54", "hello world"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("week must be between 1 and 53"),
        "stderr: {stderr}"
    );
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let output = run_tda(&["hello world"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("transport_error"), "stderr: {stderr}");
}
