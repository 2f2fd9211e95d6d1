#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn slog() -> Command {
    cargo_bin_cmd!("shiftlog")
}

/// Create a unique per-test data dir inside the system temp dir and wipe any
/// leftover files from a previous run.
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftlog", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).unwrap();
    path.to_string_lossy().to_string()
}

/// Register a user non-interactively by piping the name reply through stdin.
pub fn register(data_dir: &str, user: &str, name: &str) {
    slog()
        .args(["--data-dir", data_dir, "--test", "register", "--user", user])
        .write_stdin(format!("{}\n", name))
        .assert()
        .success();
}

/// Raw contents of the shift ledger file.
pub fn read_ledger(data_dir: &str) -> String {
    let mut path = PathBuf::from(data_dir);
    path.push("shifts.csv");
    fs::read_to_string(path).unwrap()
}

/// Raw contents of the identity file.
pub fn read_users(data_dir: &str) -> String {
    let mut path = PathBuf::from(data_dir);
    path.push("users.csv");
    fs::read_to_string(path).unwrap()
}
