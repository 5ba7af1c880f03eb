//! Integration tests for the credvault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Values are passed inline or piped through stdin so no interactive
//! prompt is ever shown.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the credvault binary, scoped to
/// `project` and with a clean key environment.
fn credvault(project: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("credvault").expect("binary should exist");
    cmd.arg("--project-dir")
        .arg(project.path())
        .env_remove("VAULT_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    credvault(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Manage encrypted credentials"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn no_args_shows_help() {
    #[allow(deprecated)]
    Command::cargo_bin("credvault")
        .expect("binary should exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn init_prints_a_vault_key_line() {
    let tmp = TempDir::new().unwrap();
    credvault(&tmp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"VAULT_KEY=[0-9a-f]{64}").unwrap());

    // init only prints; it never writes the vault or the .env file.
    tmp.child("config").assert(predicate::path::missing());
    tmp.child(".env").assert(predicate::path::missing());
}

#[test]
fn set_get_list_delete_roundtrip() {
    let tmp = TempDir::new().unwrap();

    credvault(&tmp)
        .env("VAULT_KEY", "K1")
        .args(["set", "api", "s3cr3t"])
        .assert()
        .success();

    tmp.child("config/vault.encrypted.json")
        .assert(predicate::str::starts_with("U2FsdGVkX1"));

    credvault(&tmp)
        .env("VAULT_KEY", "K1")
        .args(["get", "api"])
        .assert()
        .success()
        .stdout("s3cr3t\n");

    credvault(&tmp)
        .env("VAULT_KEY", "K1")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("- api"));

    credvault(&tmp)
        .env("VAULT_KEY", "K1")
        .args(["delete", "api"])
        .assert()
        .success();

    credvault(&tmp)
        .env("VAULT_KEY", "K1")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vault is empty"));
}

#[test]
fn set_reads_piped_value() {
    let tmp = TempDir::new().unwrap();

    credvault(&tmp)
        .env("VAULT_KEY", "K1")
        .args(["set", "admin_password"])
        .write_stdin("hunter2\n")
        .assert()
        .success();

    credvault(&tmp)
        .env("VAULT_KEY", "K1")
        .args(["get", "admin_password"])
        .assert()
        .success()
        .stdout("hunter2\n");
}

#[test]
fn key_is_read_from_dotenv_file() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".env").write_str("VAULT_KEY=from-dotenv\n").unwrap();

    credvault(&tmp)
        .args(["set", "api", "s3cr3t"])
        .assert()
        .success();

    // The same key from the environment opens the vault.
    credvault(&tmp)
        .env("VAULT_KEY", "from-dotenv")
        .args(["get", "api"])
        .assert()
        .success()
        .stdout("s3cr3t\n");
}

#[test]
fn get_missing_key_exits_2() {
    let tmp = TempDir::new().unwrap();

    credvault(&tmp)
        .env("VAULT_KEY", "K1")
        .args(["get", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn set_without_vault_key_exits_3() {
    let tmp = TempDir::new().unwrap();

    credvault(&tmp)
        .args(["set", "api", "s3cr3t"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("VAULT_KEY"))
        .stderr(predicate::str::contains("credvault init"));
}

#[test]
fn wrong_key_exits_4() {
    let tmp = TempDir::new().unwrap();

    credvault(&tmp)
        .env("VAULT_KEY", "right")
        .args(["set", "api", "s3cr3t"])
        .assert()
        .success();

    credvault(&tmp)
        .env("VAULT_KEY", "wrong")
        .args(["get", "api"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("wrong passphrase or corrupted file"));
}

#[test]
fn custom_settings_are_honoured() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".credvault.toml")
        .write_str("vault_dir = \"secrets\"\nkey_var = \"CREDVAULT_E2E_KEY\"\n")
        .unwrap();

    credvault(&tmp)
        .env("CREDVAULT_E2E_KEY", "K1")
        .args(["set", "api", "s3cr3t"])
        .assert()
        .success();

    tmp.child("secrets/vault.encrypted.json")
        .assert(predicate::path::exists());
}
