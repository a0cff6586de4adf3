use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn test_create_day_and_list_it() {
    let env = TestEnv::new();

    env.timed()
        .args(["-d", "2020-08-13", "-s", "10:00", "-e", "18:10", "-b", "30", "-n", "Note"])
        .assert()
        .success()
        .stdout(contains("Worked from 10:00 to 18:10 taking 30 min break"))
        .stdout(contains("Total overtime -0.33 hours"));

    env.timed()
        .args(["list", "-s", "2020-08-01", "-e", "2020-08-31"])
        .assert()
        .success()
        .stdout(contains("2020-08-13"))
        .stdout(contains("10:00"))
        .stdout(contains("18:10"))
        .stdout(contains("Note"));
}

#[test]
fn test_update_keeps_unsupplied_fields() {
    let env = TestEnv::new();

    env.timed()
        .args(["-d", "2020-08-13", "-s", "10:00", "-e", "18:10", "-b", "30", "-n", "keep me"])
        .assert()
        .success();

    env.timed()
        .args(["-d", "2020-08-13", "-e", "19:00"])
        .assert()
        .success()
        .stdout(contains("Worked from 10:00 to 19:00 taking 30 min break (note: keep me)"));

    env.timed()
        .args(["list", "-s", "2020-08-13", "-e", "2020-08-13"])
        .assert()
        .success()
        .stdout(contains("19:00"))
        .stdout(contains("keep me"))
        .stdout(contains("18:10").not());
}

#[test]
fn test_empty_note_clears_it() {
    let env = TestEnv::new();

    env.timed()
        .args(["-d", "2020-08-13", "-s", "08:00", "-e", "16:00", "-n", "old note"])
        .assert()
        .success();

    env.timed()
        .args(["-d", "2020-08-13", "-n", ""])
        .assert()
        .success()
        .stdout(contains("(note: )"));
}

#[test]
fn test_invalid_input_leaves_store_unchanged() {
    let env = TestEnv::new();

    env.timed()
        .args(["-d", "2020-08-32", "-s", "10:00", "-e", "18:10"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: 2020-08-32"))
        .stdout(contains("Dates use YYYY-MM-DD"));

    env.timed()
        .args(["-d", "2020-08-13", "-s", "25:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 25:00"));

    env.timed()
        .args(["-d", "2020-08-13", "-b", "-5"])
        .assert()
        .failure()
        .stderr(contains("Invalid break duration: -5"));

    env.timed()
        .args(["list", "-s", "2020-08-01", "-e", "2020-08-31"])
        .assert()
        .success()
        .stdout(contains("No working days between 2020-08-01 and 2020-08-31"));
}

#[test]
fn test_break_minus_one_means_unset() {
    let env = TestEnv::new();

    env.timed()
        .args(["-d", "2020-08-13", "-s", "08:00", "-e", "16:30", "-b", "30"])
        .assert()
        .success();

    env.timed()
        .args(["-d", "2020-08-13", "-e", "17:00", "-b", "-1"])
        .assert()
        .success()
        .stdout(contains("Worked from 08:00 to 17:00 taking 30 min break"));
}

#[test]
fn test_missing_day_is_not_a_parse_error() {
    let env = TestEnv::new();

    env.timed()
        .args(["delete", "2020-08-13"])
        .assert()
        .failure()
        .stderr(contains("No working day found for 2020-08-13"))
        .stdout(contains("Dates use YYYY-MM-DD").not());
}

#[test]
fn test_delete_existing_and_missing_day() {
    let env = TestEnv::new();

    env.timed()
        .args(["-d", "2018-10-08", "-s", "07:50", "-e", "16:20", "-b", "30"])
        .assert()
        .success();

    env.timed()
        .args(["delete", "2018-10-08"])
        .assert()
        .success()
        .stdout(contains("Deleted working day 2018-10-08"));

    env.timed()
        .args(["delete", "2018-10-08"])
        .assert()
        .failure()
        .stderr(contains("No working day found for 2018-10-08"));

    env.timed()
        .args(["delete", "2018-10-32"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_report_worked_today() {
    let env = TestEnv::new();

    env.timed()
        .args(["-s", "07:50", "-e", "16:20", "-b", "30"])
        .assert()
        .success()
        .stdout(contains("💪 Worked today 8.00 hrs"))
        .stdout(contains("⏰ Total overtime 0.00 hours"));
}

#[test]
fn test_overtime_accumulates_over_days() {
    let env = TestEnv::new();

    env.timed()
        .args(["-d", "2020-10-08", "-s", "07:50", "-e", "16:50", "-b", "30"])
        .assert()
        .success()
        .stdout(contains("Total overtime 0.50 hours"))
        .stdout(contains("Worked today").not());

    env.timed()
        .args(["-d", "2020-10-09", "-s", "08:00", "-e", "17:45", "-b", "30"])
        .assert()
        .success()
        .stdout(contains("Total overtime 1.75 hours"));
}

#[test]
fn test_daily_target_from_config() {
    let env = TestEnv::new();
    std::fs::write(
        env.config_path(),
        format!("database: {}\ndaily_target: 7h30m\n", env.db_path()),
    )
    .unwrap();

    env.bare()
        .args(["-d", "2020-10-08", "-s", "08:00", "-e", "16:00"])
        .assert()
        .success()
        .stdout(contains("Total overtime 0.50 hours"));
}

#[test]
fn test_init_writes_config_and_database() {
    let env = TestEnv::new();

    env.timed()
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(env.config_path().exists());
    assert!(std::path::Path::new(&env.db_path()).exists());

    env.timed()
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already exists"));

    env.bare()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains(env.db_path()))
        .stdout(contains("daily_target"));
}

#[test]
fn test_version_command() {
    let env = TestEnv::new();

    env.timed()
        .arg("version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")))
        .stdout(contains(std::env::consts::OS));
}
