use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_input(dir: &TempDir, html: &str) -> std::path::PathBuf {
    let path = dir.path().join("message.html");
    fs::write(&path, html).unwrap();
    path
}

fn slackdown() -> Command {
    let mut cmd = Command::cargo_bin("slackdown").unwrap();
    cmd.env_remove("SLACK_WEBHOOK").env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_attachments_json() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"<html><body>
             <section color="warning"><h2>Heads up</h2><p>Disk at <b>91%</b></p></section>
           </body></html>"#,
    );

    let output = slackdown().arg(&input).assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "attachments": [{
                "color": "warning",
                "text": "*Heads up*\nDisk at *91%*",
                "mrkdwn_in": ["text", "pretext", "fields"]
            }]
        })
    );
}

#[test]
fn compact_output_is_one_line() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "<body><section><p>Hi</p></section></body>");

    slackdown()
        .arg(&input)
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"attachments":[{"color":"good","text":"Hi""#))
        .stdout(predicate::str::contains("\n").count(1));
}

#[test]
fn prints_dialog_for_modal() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"<body class="modal">
             <form action="foo">
               <header>Title of your sextape</header>
               <label>Email <input type="email" name="email" required></label>
               <input type="submit" value="bar">
             </form>
           </body>"#,
    );

    slackdown()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""callback_id": "foo""#))
        .stdout(predicate::str::contains(r#""subtype": "email""#));
}

#[test]
fn mrkdwn_mode_prints_text() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "<p>Fish &amp; <i>chips</i></p>");

    slackdown()
        .arg(&input)
        .arg("--mrkdwn")
        .assert()
        .success()
        .stdout("Fish &amp; _chips_\n");

    slackdown()
        .arg(&input)
        .args(["--mrkdwn", "--no-escape"])
        .assert()
        .success()
        .stdout("Fish & _chips_\n");
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();
    slackdown()
        .arg(dir.path().join("nope.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn broken_form_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"<body class="modal"><form><header>No submit</header></form></body>"#,
    );

    slackdown()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to convert"));
}

#[test]
fn webhook_failure_does_not_fail_the_run() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "<body><section><p>Hi</p></section></body>");

    slackdown()
        .arg(&input)
        .env("SLACK_WEBHOOK", "http://127.0.0.1:9/hook")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"attachments\""))
        .stderr(predicate::str::contains("webhook delivery failed"));
}
