//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn invoicedash() -> Command {
    let mut cmd = Command::cargo_bin("invoicedash").unwrap();
    // Keep a developer's real settings out of the tests.
    cmd.env_remove("POSTGRES_URL").env("HOME", std::env::temp_dir());
    cmd
}

#[test]
fn test_help_lists_commands() {
    invoicedash()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("invoices"))
        .stdout(predicate::str::contains("customers"));
}

#[test]
fn test_serve_help() {
    invoicedash()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

#[test]
fn test_invoices_help() {
    invoicedash()
        .arg("invoices")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("six rows per page"));
}

#[test]
fn test_invoice_rejects_bad_id() {
    invoicedash()
        .arg("invoice")
        .arg("not-a-uuid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_bad_ssl_mode_is_rejected() {
    invoicedash()
        .args(["--db-ssl-mode", "sometimes", "cards"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ssl mode"));
}

#[test]
fn test_missing_database_url() {
    invoicedash()
        .current_dir(std::env::temp_dir())
        .arg("cards")
        .assert()
        .failure()
        .stderr(predicate::str::contains("POSTGRES_URL not set"));
}
