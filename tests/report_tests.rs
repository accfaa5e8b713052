//! Integration tests for the report command

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{tracktime_cmd, write_log};

#[test]
fn test_same_day_entries_meet_goal() {
    let temp = TempDir::new().unwrap();
    let log = write_log(
        temp.path(),
        "work.log",
        &["24.12.2010\t1000\t1500\tFoobar", "24.12.2010\t1600\t1900\tMore"],
    );

    tracktime_cmd()
        .arg("report")
        .arg(&log)
        .assert()
        .success()
        .stdout("24.12.2010 8h0m0s | 0s\n");
}

#[test]
fn test_rows_in_first_seen_order() {
    let temp = TempDir::new().unwrap();
    let log = write_log(
        temp.path(),
        "work.log",
        &[
            "25.12.2010\t0800\t1000\tA",
            "24.12.2010\t0800\t0900\tB",
            "25.12.2010\t1000\t1100\tC",
        ],
    );

    tracktime_cmd()
        .arg("report")
        .arg(&log)
        .assert()
        .success()
        .stdout(
            "25.12.2010 3h0m0s | -5h0m0s\n\
             24.12.2010 1h0m0s | -12h0m0s\n",
        );
}

#[test]
fn test_weekly_report_aligns_columns() {
    let temp = TempDir::new().unwrap();
    let log = write_log(
        temp.path(),
        "work.log",
        &[
            "27.12.2010\t0800\t1600\tMonday",
            "28.12.2010\t0800\t1600\tTuesday",
            "03.01.2011\t0900\t1000\tNew year",
        ],
    );

    tracktime_cmd()
        .args(["report", "-i", "w", "-H", "10"])
        .arg(&log)
        .assert()
        .success()
        .stdout(
            "W52 2010 16h0m0s | 6h0m0s\n\
             W1 2011  1h0m0s | -3h0m0s\n",
        );
}

#[test]
fn test_monthly_report_in_seconds_with_total() {
    let temp = TempDir::new().unwrap();
    let log = write_log(
        temp.path(),
        "work.log",
        &[
            "27.12.2010\t0800\t1600\tMonday",
            "28.12.2010\t0800\t1600\tTuesday",
            "03.01.2011\t0900\t1000\tNew year",
        ],
    );

    tracktime_cmd()
        .args(["report", "--interval", "month", "--seconds", "--total"])
        .arg(&log)
        .assert()
        .success()
        .stdout(
            "December 2010 16h0m0s | 28800\n\
             January 2011  1h0m0s | 3600\n\
             Total: 3600\n",
        );
}

#[test]
fn test_fractional_and_negative_goals() {
    let temp = TempDir::new().unwrap();
    let log = write_log(temp.path(), "work.log", &["24.12.2010\t0800\t1600\tWork"]);

    tracktime_cmd()
        .args(["report", "-H", "7.5"])
        .arg(&log)
        .assert()
        .success()
        .stdout("24.12.2010 8h0m0s | 30m0s\n");

    tracktime_cmd()
        .args(["report", "--hours=-1"])
        .arg(&log)
        .assert()
        .success()
        .stdout("24.12.2010 8h0m0s | 9h0m0s\n");
}

#[test]
fn test_reads_stdin() {
    tracktime_cmd()
        .arg("report")
        .write_stdin("24.12.2010\t1000\t1500\tFoobar\n")
        .assert()
        .success()
        .stdout("24.12.2010 5h0m0s | -3h0m0s\n");

    tracktime_cmd()
        .args(["report", "-"])
        .write_stdin("24.12.2010\t1000\t1500\tFoobar")
        .assert()
        .success()
        .stdout("24.12.2010 5h0m0s | -3h0m0s\n");
}

#[test]
fn test_bonus_policy() {
    let temp = TempDir::new().unwrap();
    let log = write_log(
        temp.path(),
        "work.log",
        &["24.12.2010\t0800\t1600\tRegular", "+25.12.2010\t1000\t1100\tOn call"],
    );

    tracktime_cmd()
        .arg("report")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("25.12.2010"));

    tracktime_cmd()
        .args(["report", "--bonus", "exclude"])
        .arg(&log)
        .assert()
        .success()
        .stdout("24.12.2010 8h0m0s | 0s\n");

    tracktime_cmd()
        .args(["report", "--bonus", "only", "-H", "0"])
        .arg(&log)
        .assert()
        .success()
        .stdout("25.12.2010 1h0m0s | 1h0m0s\n");
}

#[test]
fn test_date_format_from_env_and_flag() {
    let temp = TempDir::new().unwrap();
    let log = write_log(temp.path(), "work.log", &["2010-12-24\t1000\t1500\tFoobar"]);

    tracktime_cmd()
        .env("TRACKTIME_FORMAT", "%Y-%m-%d")
        .arg("report")
        .arg(&log)
        .assert()
        .success()
        .stdout("2010-12-24 5h0m0s | -3h0m0s\n");

    tracktime_cmd()
        .env("TRACKTIME_FORMAT", "%d.%m.%Y")
        .args(["report", "--date-format", "%Y-%m-%d"])
        .arg(&log)
        .assert()
        .success()
        .stdout("2010-12-24 5h0m0s | -3h0m0s\n");
}

#[test]
fn test_empty_env_format_uses_default() {
    tracktime_cmd()
        .env("TRACKTIME_FORMAT", "")
        .arg("report")
        .write_stdin("24.12.2010\t1000\t1500\tFoobar\n")
        .assert()
        .success()
        .stdout("24.12.2010 5h0m0s | -3h0m0s\n");
}

#[test]
fn test_parse_error_reports_line() {
    tracktime_cmd()
        .arg("report")
        .write_stdin("24.12.2010\t1000\t1500\tFine\n24.12.2010\t1500\t1000\tBad\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("stdin:2 invalid duration"));
}

#[test]
fn test_latin1_description_is_accepted() {
    tracktime_cmd()
        .arg("report")
        .write_stdin(b"24.12.2010\t1000\t1500\tCaf\xe9\n".to_vec())
        .assert()
        .success()
        .stdout("24.12.2010 5h0m0s | -3h0m0s\n");
}

#[test]
fn test_non_utf8_log_error_keeps_line_number() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("work.log");
    std::fs::write(
        &log,
        b"24.12.2010\t1000\t1500\tCaf\xe9\n25.12.2010\t1500\t1000\tBad\n",
    )
    .unwrap();

    tracktime_cmd()
        .arg("report")
        .arg(&log)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("work.log:2 invalid duration"));
}

#[test]
fn test_unformattable_layout_rejected_before_reading() {
    let temp = TempDir::new().unwrap();

    tracktime_cmd()
        .args(["report", "--date-format", "%d.%m.%Y %z"])
        .arg(temp.path().join("missing.log"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Cannot format dates"));
}

#[test]
fn test_parse_error_names_file() {
    let temp = TempDir::new().unwrap();
    let log = write_log(temp.path(), "work.log", &["24.12.2010\t1000\t2500\tLate"]);

    tracktime_cmd()
        .arg("report")
        .arg(&log)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("work.log:1 invalid end duration: invalid hour"));
}

#[test]
fn test_unsupported_interval() {
    tracktime_cmd()
        .args(["report", "-i", "year"])
        .write_stdin("24.12.2010\t1000\t1500\tFoobar\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unsupported interval"))
        .stderr(predicate::str::contains("Valid intervals"));
}

#[test]
fn test_empty_interval() {
    tracktime_cmd()
        .args(["report", "-i", ""])
        .write_stdin("24.12.2010\t1000\t1500\tFoobar\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid interval"));
}

#[test]
fn test_missing_file() {
    let temp = TempDir::new().unwrap();

    tracktime_cmd()
        .arg("report")
        .arg(temp.path().join("missing.log"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_empty_log_prints_nothing() {
    tracktime_cmd()
        .arg("report")
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}
