// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end tests for the parse/encode surface of the CLI. The scan path
// needs OCR models on disk, so it is exercised in the library tests with
// mock capabilities instead.

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];

/// Command with config/data isolated to a scratch directory.
fn cmd(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("funkwerk").unwrap();
    cmd.env("XDG_DATA_HOME", tmp.path());
    cmd
}

#[test]
fn encode_prints_the_exact_payload() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["encode", "--ssid", "Cafe", "--password", "p@ss"])
        .assert()
        .success()
        .stdout(contains("WIFI:S:Cafe;T:WPA;P:p@ss;;"));
}

#[test]
fn encode_percent_encodes_the_join_uri() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["encode", "--ssid", "My Net", "--password", "a b"])
        .assert()
        .success()
        .stdout(contains("wifi:ssid=My%20Net;password=a%20b;;"));
}

#[test]
fn encode_writes_a_png_join_code() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("code.png");
    cmd(&tmp)
        .args(["encode", "--ssid", "Attic", "--password", "pw"])
        .arg("--qr-out")
        .arg(&out)
        .assert()
        .success();

    let bytes = std::fs::read(&out).expect("join code file should exist");
    assert!(bytes.starts_with(&PNG_MAGIC));
}

#[test]
fn parse_reads_stdin() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .arg("parse")
        .write_stdin("SSID: Home-5G\nPassword: abc123\n")
        .assert()
        .success()
        .stdout(contains("Network:  Home-5G"))
        .stdout(contains("WIFI:S:Home-5G;T:WPA;P:abc123;;"));
}

#[test]
fn parse_reads_a_file() {
    let tmp = TempDir::new().unwrap();
    let transcript = tmp.path().join("label.txt");
    std::fs::write(&transcript, "wifi: Guest\nkey: hunter2\n").unwrap();

    cmd(&tmp)
        .args(["parse", "--file"])
        .arg(&transcript)
        .assert()
        .success()
        .stdout(contains("Network:  Guest"))
        .stdout(contains("Password: hunter2"));
}

#[test]
fn parse_failure_reports_not_found() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .arg("parse")
        .write_stdin("no credentials on this sticker\n")
        .assert()
        .failure()
        .stderr(contains("couldn't find a network name and password"));
}

#[test]
fn config_round_trips_settings() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["config", "--enhance", "false"])
        .assert()
        .success()
        .stdout(contains("\"enhance_photos\": false"));

    // A second invocation sees the persisted value.
    cmd(&tmp)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("\"enhance_photos\": false"));
}
