#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, pointed at a config file that does not exist so the user's
/// own configuration never leaks into a test.
pub fn ink() -> Command {
    let mut cmd = cargo_bin_cmd!("inkmaster");
    cmd.args(["--config", &missing_config()]);
    cmd
}

/// The binary with an explicit configuration file.
pub fn ink_with_config(path: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("inkmaster");
    cmd.args(["--config", path]);
    cmd
}

pub fn missing_config() -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push("inkmaster_tests_no_such_config.conf");
    path.to_string_lossy().to_string()
}

/// Write a config file inside the temp dir and return its path
pub fn temp_config(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_inkmaster.conf", name));
    fs::write(&path, content).expect("write temp config");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_inkmaster_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
