//! Tests for the settings and session files of the shop CLI

#![allow(clippy::unwrap_used)]

mod common;
use common::shop;

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_status_without_session() {
    let home = tempfile::tempdir().unwrap();

    let output = shop(home.path())
        .args(["status", "--output", "json"])
        .output()
        .expect("Failed to execute shop command");

    assert!(output.status.success(), "{output:?}");
    let status: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(status["status"], "unauthenticated");
    assert_eq!(status["serverUrl"], "http://localhost:8080");
}

#[test]
fn test_config_server_is_persisted() {
    let home = tempfile::tempdir().unwrap();

    let output = shop(home.path())
        .args(["config", "server", "https://shop.example.com/"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let output = shop(home.path()).args(["config", "server"]).output().unwrap();
    assert_eq!(stdout(&output).trim(), "https://shop.example.com");

    let output = shop(home.path())
        .args(["status", "--output", "json"])
        .output()
        .unwrap();
    let status: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(status["serverUrl"], "https://shop.example.com");
}

#[test]
fn test_server_flag_overrides_config() {
    let home = tempfile::tempdir().unwrap();

    shop(home.path())
        .args(["config", "server", "https://shop.example.com"])
        .output()
        .unwrap();

    let output = shop(home.path())
        .args(["--server", "http://127.0.0.1:9", "status"])
        .output()
        .unwrap();
    let status: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(status["serverUrl"], "http://127.0.0.1:9");
}

#[test]
#[cfg(not(windows))]
fn test_logged_in_status() {
    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join(".config").join("shopfront-cli");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("session.json"),
        serde_json::json!({
            "accessToken": "abc",
            "refreshToken": "r1",
            "user": r#"{"id":1,"username":"alice","roles":["ROLE_USER"]}"#,
            "cartId": "7",
        })
        .to_string(),
    )
    .unwrap();

    let output = shop(home.path()).args(["status"]).output().unwrap();

    assert!(output.status.success(), "{output:?}");
    let status: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(status["status"], "authenticated");
    assert_eq!(status["username"], "alice");
    assert_eq!(status["cartId"], "7");
}

#[test]
fn test_logout_without_session() {
    let home = tempfile::tempdir().unwrap();

    let output = shop(home.path()).args(["logout"]).output().unwrap();

    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("not logged in"));
}
