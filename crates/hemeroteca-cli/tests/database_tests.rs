//! Integration tests for database provisioning commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn hemeroteca_cmd() -> Command {
    Command::cargo_bin("hemeroteca").unwrap()
}

fn write_fixture_csvs(dir: &Path) {
    fs::write(dir.join("periodicals.csv"), "1,Natura,\n").unwrap();
    fs::write(dir.join("periodical_years.csv"), "1,1,1905,\n").unwrap();
    fs::write(dir.join("issues.csv"), "1,1,3,\n").unwrap();
    fs::write(dir.join("pages.csv"), "1,1,niste continut de pagina,14\n").unwrap();
}

fn setup_csv_dir() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let csv_dir = dir.path().join("exports");
    fs::create_dir(&csv_dir).unwrap();
    write_fixture_csvs(&csv_dir);
    let db_path = dir.path().join("app.db");
    (dir, csv_dir, db_path)
}

#[test]
fn test_db_create_reports_counts() {
    let (_dir, csv_dir, db_path) = setup_csv_dir();

    let mut cmd = hemeroteca_cmd();
    cmd.env("HEMEROTECA_DB", &db_path)
        .arg("db")
        .arg("create")
        .arg("--from")
        .arg(&csv_dir);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("database created"))
        .stdout(predicate::str::contains("pages: 1"));
    assert!(db_path.is_file());
}

#[test]
fn test_db_create_refuses_to_overwrite() {
    let (_dir, csv_dir, db_path) = setup_csv_dir();

    let mut first = hemeroteca_cmd();
    first
        .env("HEMEROTECA_DB", &db_path)
        .arg("db")
        .arg("create")
        .arg("--from")
        .arg(&csv_dir);
    first.assert().success();

    let mut second = hemeroteca_cmd();
    second
        .env("HEMEROTECA_DB", &db_path)
        .arg("db")
        .arg("create")
        .arg("--from")
        .arg(&csv_dir);
    second
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // --force replaces the existing file
    let mut forced = hemeroteca_cmd();
    forced
        .env("HEMEROTECA_DB", &db_path)
        .arg("db")
        .arg("create")
        .arg("--from")
        .arg(&csv_dir)
        .arg("--force");
    forced.assert().success();
}

#[test]
fn test_db_create_missing_csv_file() {
    let dir = TempDir::new().unwrap();
    let csv_dir = dir.path().join("exports");
    fs::create_dir(&csv_dir).unwrap();
    // deliberately incomplete exports
    fs::write(csv_dir.join("periodicals.csv"), "1,Natura,\n").unwrap();
    let db_path = dir.path().join("app.db");

    let mut cmd = hemeroteca_cmd();
    cmd.env("HEMEROTECA_DB", &db_path)
        .arg("db")
        .arg("create")
        .arg("--from")
        .arg(&csv_dir);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("CSV file not found"));
}

#[test]
fn test_db_status() {
    let (_dir, csv_dir, db_path) = setup_csv_dir();

    let mut create = hemeroteca_cmd();
    create
        .env("HEMEROTECA_DB", &db_path)
        .arg("db")
        .arg("create")
        .arg("--from")
        .arg(&csv_dir);
    create.assert().success();

    let mut status = hemeroteca_cmd();
    status.env("HEMEROTECA_DB", &db_path).arg("db").arg("status");
    status
        .assert()
        .success()
        .stdout(predicate::str::contains("Periodicals:  1"))
        .stdout(predicate::str::contains("FTS index:    present"));
}

#[test]
fn test_periodicals_listing_and_details() {
    let (_dir, csv_dir, db_path) = setup_csv_dir();

    let mut create = hemeroteca_cmd();
    create
        .env("HEMEROTECA_DB", &db_path)
        .arg("db")
        .arg("create")
        .arg("--from")
        .arg(&csv_dir);
    create.assert().success();

    let mut list = hemeroteca_cmd();
    list.env("HEMEROTECA_DB", &db_path).arg("periodicals");
    list.assert()
        .success()
        .stdout(predicate::str::contains("Natura"));

    let mut details = hemeroteca_cmd();
    details
        .env("HEMEROTECA_DB", &db_path)
        .arg("periodicals")
        .arg("1");
    details
        .assert()
        .success()
        .stdout(predicate::str::contains("1905: 1 issues, 1 pages"));

    let mut missing = hemeroteca_cmd();
    missing
        .env("HEMEROTECA_DB", &db_path)
        .arg("periodicals")
        .arg("42");
    missing
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Periodical not found"));
}
