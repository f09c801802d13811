//! Integration tests for the search command

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn hemeroteca_cmd() -> Command {
    Command::cargo_bin("hemeroteca").unwrap()
}

fn write_fixture_csvs(dir: &Path) {
    fs::write(
        dir.join("periodicals.csv"),
        "1,Natura,https://example.org/natura\n2,Albina,https://example.org/albina\n",
    )
    .unwrap();
    fs::write(dir.join("periodical_years.csv"), "1,1,1905,\n2,2,1906,\n").unwrap();
    fs::write(dir.join("issues.csv"), "1,1,3,\n2,2,7,\n").unwrap();
    fs::write(
        dir.join("pages.csv"),
        concat!(
            "1,1,Charles Darwin a fost un naturalist englez si darwin a scris,14\n",
            "2,2,alte subiecte fara legatura,22\n",
        ),
    )
    .unwrap();
}

fn setup_database() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let csv_dir = dir.path().join("exports");
    fs::create_dir(&csv_dir).unwrap();
    write_fixture_csvs(&csv_dir);

    let db_path = dir.path().join("app.db");

    let mut create = hemeroteca_cmd();
    create
        .env("HEMEROTECA_DB", &db_path)
        .arg("db")
        .arg("create")
        .arg("--from")
        .arg(&csv_dir);
    create.assert().success();

    (dir, db_path)
}

#[test]
fn test_search_shows_highlighted_preview() {
    let (_dir, db_path) = setup_database();

    let mut cmd = hemeroteca_cmd();
    cmd.env("HEMEROTECA_DB", &db_path).arg("search").arg("darwin");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<mark>Darwin</mark>"))
        .stdout(predicate::str::contains("<mark>darwin</mark>"))
        .stdout(predicate::str::contains("Natura"));
}

#[test]
fn test_search_multi_word_term() {
    let (_dir, db_path) = setup_database();

    let mut cmd = hemeroteca_cmd();
    cmd.env("HEMEROTECA_DB", &db_path)
        .arg("search")
        .arg("charles")
        .arg("darwin");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 pages match"));
}

#[test]
fn test_search_no_results() {
    let (_dir, db_path) = setup_database();

    let mut cmd = hemeroteca_cmd();
    cmd.env("HEMEROTECA_DB", &db_path)
        .arg("search")
        .arg("inexistent");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("no results found"));
}

#[test]
fn test_search_term_too_short() {
    let (_dir, db_path) = setup_database();

    let mut cmd = hemeroteca_cmd();
    cmd.env("HEMEROTECA_DB", &db_path).arg("search").arg("abc");

    cmd.assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid search term"));
}

#[test]
fn test_search_with_periodical_filter() {
    let (_dir, db_path) = setup_database();

    let mut cmd = hemeroteca_cmd();
    cmd.env("HEMEROTECA_DB", &db_path)
        .arg("search")
        .arg("darwin")
        .arg("--periodical")
        .arg("Albina");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("no results found"));
}

#[test]
fn test_search_json_output() {
    let (_dir, db_path) = setup_database();

    let mut cmd = hemeroteca_cmd();
    cmd.env("HEMEROTECA_DB", &db_path)
        .arg("search")
        .arg("darwin")
        .arg("--format")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(parsed["term"], "darwin");
    assert_eq!(parsed["total"], 1);
    assert_eq!(parsed["results"][0]["periodical"], "Natura");
    assert!(parsed["results"][0]["preview"]
        .as_str()
        .unwrap()
        .contains("<mark>Darwin</mark>"));
}

#[test]
fn test_search_page_out_of_range() {
    let (_dir, db_path) = setup_database();

    let mut cmd = hemeroteca_cmd();
    cmd.env("HEMEROTECA_DB", &db_path)
        .arg("search")
        .arg("darwin")
        .arg("--page")
        .arg("7");

    cmd.assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Page out of range"));
}
