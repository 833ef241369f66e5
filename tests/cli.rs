//! The `check-elb-health` binary: one status line, monitoring exit codes.

use std::io::Write;
use std::process::Output;

use tokio::process::Command;

mod common;

async fn run_check(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_check-elb-health"))
        .args(args)
        .env_remove("AWS_ACCESS_KEY")
        .env_remove("AWS_SECRET_KEY")
        .env_remove("AWS_SESSION_TOKEN")
        .env_remove("RUST_LOG")
        .output()
        .await
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

async fn healthy_elb() -> String {
    let xml = common::instance_health_xml(&[("i-1", "InService"), ("i-2", "InService")]);
    let (addr, _) = common::start_programmable_backend(move |_| {
        let xml = xml.clone();
        async move { (200, xml) }
    })
    .await;
    format!("http://{}/", addr)
}

#[tokio::test]
async fn test_ok_prints_one_line_and_exits_zero() {
    let endpoint = healthy_elb().await;
    let output = run_check(&[
        "-n", "web-elb", "-r", "eu-west-1", "-a", "AKID", "-k", "secret", "--endpoint", &endpoint,
    ])
    .await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "OK: All instances on ELB eu-west-1::web-elb healthy!\n");
}

#[tokio::test]
async fn test_unhealthy_exits_critical() {
    let xml = common::instance_health_xml(&[("i-1", "InService"), ("i-2", "OutOfService")]);
    let (addr, _) = common::start_programmable_backend(move |_| {
        let xml = xml.clone();
        async move { (200, xml) }
    })
    .await;
    let endpoint = format!("http://{}/", addr);

    let output = run_check(&[
        "-n", "web-elb", "-r", "eu-west-1", "-a", "AKID", "-k", "secret", "--endpoint", &endpoint, "-v",
    ])
    .await;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stdout(&output),
        "CRITICAL: Unhealthy instances detected: [i-2::OutOfService]\n"
    );
}

#[tokio::test]
async fn test_credentials_from_environment() {
    let endpoint = healthy_elb().await;
    let output = Command::new(env!("CARGO_BIN_EXE_check-elb-health"))
        .args(["-n", "web-elb", "-r", "eu-west-1", "--endpoint", &endpoint])
        .env("AWS_ACCESS_KEY", "AKID")
        .env("AWS_SECRET_KEY", "secret")
        .env_remove("AWS_SESSION_TOKEN")
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
}

#[tokio::test]
async fn test_missing_credentials_is_critical() {
    let endpoint = healthy_elb().await;
    let output = run_check(&["-n", "web-elb", "-r", "eu-west-1", "--endpoint", &endpoint]).await;

    assert_eq!(output.status.code(), Some(2));
    let line = stdout(&output);
    assert!(line.starts_with("CRITICAL: An issue occurred"));
    assert!(line.contains("no AWS credentials configured"));
}

#[tokio::test]
async fn test_missing_elb_name_is_unknown() {
    let output = run_check(&["-r", "eu-west-1"]).await;
    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).starts_with("UNKNOWN: "));
}

#[tokio::test]
async fn test_help_exits_zero() {
    let output = run_check(&["--help"]).await;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("--elb-name"));
}

#[tokio::test]
async fn test_invalid_settings_file_is_unknown() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[metadata]\ntimeout_secs = 0").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let output = run_check(&["-n", "web-elb", "-c", &path]).await;
    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).contains("metadata.timeout_secs must be greater than zero"));
}

#[tokio::test]
async fn test_metadata_timeout_from_settings_file() {
    let silent = common::start_silent_backend().await;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[metadata]\nurl = \"http://{}/latest/meta-data/placement/availability-zone/\"\ntimeout_secs = 1",
        silent
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let output = run_check(&["-n", "web-elb", "-a", "AKID", "-k", "secret", "-c", &path]).await;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stdout(&output),
        "CRITICAL: Cannot obtain this instance's Availability Zone. Maybe not running on AWS?\n"
    );
}
