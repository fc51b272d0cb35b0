#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use rtasktracker::core::Controller;
use rtasktracker::core::clock::ManualClock;
use rtasktracker::db::DbPool;
use std::rc::Rc;
use tempfile::TempDir;

pub fn rtt() -> Command {
    cargo_bin_cmd!("rtasktracker")
}

/// Fresh temp dir plus the path of a (not yet created) database inside it.
/// Keep the TempDir alive for the duration of the test.
pub fn setup_test_db(name: &str) -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir
        .path()
        .join(format!("{}_rtasktracker.sqlite", name))
        .to_string_lossy()
        .to_string();
    (dir, path)
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
}

/// Controller over a file database driven by a manual clock starting at `t0()`.
pub fn controller(db_path: &str) -> (Controller<DbPool>, Rc<ManualClock>) {
    let clock = Rc::new(ManualClock::new(t0()));
    let mut ctl = Controller::with_clock(DbPool::new(db_path), clock.clone());
    ctl.load_all().expect("load all");
    (ctl, clock)
}

/// A second controller over the same file, as after an application restart.
pub fn reload(db_path: &str) -> Controller<DbPool> {
    let mut ctl = Controller::new(DbPool::new(db_path));
    ctl.load_all().expect("reload");
    ctl
}

/// Run `init` in test mode against `db_path`.
pub fn init_db(db_path: &str) {
    rtt()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add a task through the CLI.
pub fn add_task(db_path: &str, name: &str, alias: &str) {
    rtt()
        .args(["--db", db_path, "task", "add", name, alias])
        .assert()
        .success();
}
