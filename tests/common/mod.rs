use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn tracktime_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tracktime").unwrap();
    cmd.env_remove("TRACKTIME_FORMAT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a log file into `dir` and return its path
#[allow(dead_code)]
pub fn write_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(&path, contents).unwrap();
    path
}
