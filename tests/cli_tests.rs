use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_task, init_db, reload, rtt, setup_test_db};

#[test]
fn test_init_creates_database() {
    let (_dir, db_path) = setup_test_db("cli_init");

    rtt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_task_add_and_list() {
    let (_dir, db_path) = setup_test_db("cli_task_list");
    init_db(&db_path);

    rtt()
        .args(["--db", &db_path, "task", "add", "Write docs", "W", "--folder", "work"])
        .assert()
        .success()
        .stdout(contains("alias 'W'"));

    rtt()
        .args(["--db", &db_path, "task", "list"])
        .assert()
        .success()
        .stdout(contains("Write docs"))
        .stdout(contains("work"))
        .stdout(contains("ALIAS"));
}

#[test]
fn test_task_list_when_empty() {
    let (_dir, db_path) = setup_test_db("cli_task_empty");
    init_db(&db_path);

    rtt()
        .args(["--db", &db_path, "task", "list"])
        .assert()
        .success()
        .stdout(contains("No tasks yet"));
}

#[test]
fn test_duplicate_alias_fails() {
    let (_dir, db_path) = setup_test_db("cli_dup");
    init_db(&db_path);
    add_task(&db_path, "Write", "W");

    rtt()
        .args(["--db", &db_path, "task", "add", "Walk", "W"])
        .assert()
        .failure()
        .stderr(contains("Duplicate key"));

    assert_eq!(reload(&db_path).tasks().len(), 1);
}

#[test]
fn test_toggle_status_and_stop() {
    let (_dir, db_path) = setup_test_db("cli_toggle");
    init_db(&db_path);
    add_task(&db_path, "Write", "W");
    add_task(&db_path, "Read", "R");

    rtt()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Idle"));

    rtt()
        .args(["--db", &db_path, "toggle", "W"])
        .assert()
        .success()
        .stdout(contains("Started 'Write'"));

    rtt()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Write [W]"));

    // switching closes the previous entry first
    rtt()
        .args(["--db", &db_path, "toggle", "R"])
        .assert()
        .success()
        .stdout(contains("Stopped 'Write'").and(contains("Started 'Read'")));

    let ctl = reload(&db_path);
    assert_eq!(ctl.time_entries().len(), 2);
    assert_eq!(ctl.running_entries().len(), 1);
    assert_eq!(ctl.running_entries()[0].task_alias, "R");

    rtt()
        .args(["--db", &db_path, "stop"])
        .assert()
        .success()
        .stdout(contains("Stopped 'Read'"));

    rtt()
        .args(["--db", &db_path, "stop"])
        .assert()
        .success()
        .stdout(contains("No timer is running"));

    assert!(reload(&db_path).running_entries().is_empty());
}

#[test]
fn test_toggle_same_task_stops_it() {
    let (_dir, db_path) = setup_test_db("cli_toggle_twice");
    init_db(&db_path);
    add_task(&db_path, "Write", "W");

    for _ in 0..2 {
        rtt()
            .args(["--db", &db_path, "toggle", "W"])
            .assert()
            .success();
    }

    let ctl = reload(&db_path);
    assert_eq!(ctl.time_entries().len(), 1);
    let e = &ctl.time_entries()[0];
    assert!(e.end_time.is_some_and(|end| end >= e.start_time));
}

#[test]
fn test_toggle_unknown_task_fails() {
    let (_dir, db_path) = setup_test_db("cli_toggle_unknown");
    init_db(&db_path);

    rtt()
        .args(["--db", &db_path, "toggle", "nope"])
        .assert()
        .failure()
        .stderr(contains("Not found"));
}

#[test]
fn test_entry_list_and_delete() {
    let (_dir, db_path) = setup_test_db("cli_entries");
    init_db(&db_path);
    add_task(&db_path, "Write", "W");

    rtt().args(["--db", &db_path, "toggle", "W"]).assert().success();

    let running_id = reload(&db_path).time_entries()[0].id.clone();

    rtt()
        .args(["--db", &db_path, "entry", "list"])
        .assert()
        .success()
        .stdout(contains(running_id.as_str()))
        .stdout(contains("Running"));

    // the running entry is protected
    rtt()
        .args(["--db", &db_path, "entry", "del", &running_id, "--yes"])
        .assert()
        .failure()
        .stderr(contains("Invalid state"));

    rtt().args(["--db", &db_path, "stop"]).assert().success();

    // declined confirmation keeps it
    rtt()
        .args(["--db", &db_path, "entry", "del", &running_id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));
    assert_eq!(reload(&db_path).time_entries().len(), 1);

    rtt()
        .args(["--db", &db_path, "entry", "del", &running_id, "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));
    assert!(reload(&db_path).time_entries().is_empty());
}

#[test]
fn test_entry_edit_rejects_end_before_start() {
    let (_dir, db_path) = setup_test_db("cli_entry_edit");
    init_db(&db_path);
    add_task(&db_path, "Write", "W");

    rtt().args(["--db", &db_path, "toggle", "W"]).assert().success();
    rtt().args(["--db", &db_path, "stop"]).assert().success();
    let id = reload(&db_path).time_entries()[0].id.clone();

    rtt()
        .args([
            "--db",
            &db_path,
            "entry",
            "edit",
            &id,
            "--start",
            "2025-03-10T10:00:00Z",
            "--end",
            "2025-03-10T09:00:00Z",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time range"));

    rtt()
        .args([
            "--db",
            &db_path,
            "entry",
            "edit",
            &id,
            "--start",
            "2025-03-10T09:00:00Z",
            "--end",
            "2025-03-10T10:30:00Z",
        ])
        .assert()
        .success();

    let e = reload(&db_path).time_entries()[0].clone();
    assert_eq!(
        (e.end_time.unwrap() - e.start_time).num_minutes(),
        90,
        "entry was not corrected"
    );

    rtt()
        .args(["--db", &db_path, "entry", "edit", &id, "--start", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_task_delete_keeps_entries() {
    let (_dir, db_path) = setup_test_db("cli_task_del");
    init_db(&db_path);
    add_task(&db_path, "Write", "W");

    rtt().args(["--db", &db_path, "toggle", "W"]).assert().success();
    rtt().args(["--db", &db_path, "stop"]).assert().success();

    rtt()
        .args(["--db", &db_path, "task", "del", "W", "--yes"])
        .assert()
        .success();

    let ctl = reload(&db_path);
    assert!(ctl.tasks().is_empty());
    assert_eq!(ctl.time_entries().len(), 1);

    // orphaned entries are listed under their alias
    rtt()
        .args(["--db", &db_path, "entry", "list", "--task", "W"])
        .assert()
        .success()
        .stdout(contains("W"));
}

#[test]
fn test_task_edit_renames_without_touching_entries() {
    let (_dir, db_path) = setup_test_db("cli_task_edit");
    init_db(&db_path);
    add_task(&db_path, "Write", "W");

    rtt().args(["--db", &db_path, "toggle", "W"]).assert().success();
    rtt().args(["--db", &db_path, "stop"]).assert().success();

    rtt()
        .args(["--db", &db_path, "task", "edit", "W", "--alias", "WR"])
        .assert()
        .success()
        .stdout(contains("still reference the old alias 'W'"));

    let ctl = reload(&db_path);
    assert_eq!(ctl.tasks()[0].alias, "WR");
    assert_eq!(ctl.tasks()[0].name, "Write");
    assert_eq!(ctl.time_entries()[0].task_alias, "W");
}

#[test]
fn test_export_json_and_csv() {
    let (dir, db_path) = setup_test_db("cli_export");
    init_db(&db_path);
    add_task(&db_path, "Write", "W");
    rtt().args(["--db", &db_path, "toggle", "W"]).assert().success();
    rtt().args(["--db", &db_path, "stop"]).assert().success();

    let json_path = dir.path().join("out.json").to_string_lossy().to_string();
    rtt()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &json_path])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["tasks"][0]["alias"], "W");
    assert_eq!(json["timeEntries"][0]["taskAlias"], "W");
    assert!(json["timeEntries"][0]["endTime"].is_string());

    let csv_path = dir.path().join("out.csv").to_string_lossy().to_string();
    std::fs::write(&csv_path, "stale").unwrap();
    rtt()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &csv_path, "--force",
        ])
        .assert()
        .success();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("id,task_alias,task_name,start_time,end_time,duration_seconds"));
    assert!(csv.contains(",W,Write,"));
    assert!(!csv.contains("stale"));
}

#[test]
fn test_export_refuses_to_overwrite_without_confirmation() {
    let (dir, db_path) = setup_test_db("cli_export_exists");
    init_db(&db_path);

    let out = dir.path().join("out.json").to_string_lossy().to_string();
    std::fs::write(&out, "keep me").unwrap();

    rtt()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_db_info_and_log() {
    let (_dir, db_path) = setup_test_db("cli_db_info");
    init_db(&db_path);
    add_task(&db_path, "Write", "W");

    rtt()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    rtt()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init").and(contains("Added task 'Write'")));
}
