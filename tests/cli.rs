use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const VALID_LINE: &str = "AB12,JFK,LAX,2025-12-01 09:00,2025-12-01 12:00,199.99";

fn flightsched(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("flightsched").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn response_files(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("response_") && name.ends_with(".json"))
        .collect()
}

#[test]
fn parse_file_and_run_queries() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("sample.csv"),
        format!("#comment\n{}\n", VALID_LINE),
    )
    .unwrap();
    fs::write(temp_dir.path().join("queries.json"), r#"[{"origin":"JFK"}]"#).unwrap();

    flightsched(temp_dir.path())
        .args(["-i", "sample.csv", "-q", "queries.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote response file:"));

    let db: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp_dir.path().join("db.json")).unwrap())
            .unwrap();
    assert_eq!(db.as_array().unwrap().len(), 1);
    assert_eq!(db[0]["flight_id"], "AB12");

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("errors.txt")).unwrap(),
        "Line 1: #comment → Comment\n"
    );

    let responses = response_files(temp_dir.path());
    assert_eq!(responses.len(), 1);
    let response: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(temp_dir.path().join(&responses[0])).unwrap(),
    )
    .unwrap();
    assert_eq!(response[0]["query"]["origin"], "JFK");
    assert_eq!(response[0]["matches"][0]["price"], "199.99");
}

#[test]
fn directory_numbering_is_continuous() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("a.csv"), format!("{}\nA!,jkf,LAX,2025-12-01 09:00,2025-12-01 12:00,199.99\n", VALID_LINE)).unwrap();
    fs::write(data.join("b.csv"), "\nEF56,BOS,MIA,2025-11-10 15:00,2025-11-10 16:00,-10\n").unwrap();

    flightsched(temp_dir.path())
        .args(["-d", "data", "-o", "out/flights.json"])
        .assert()
        .success();

    assert!(temp_dir.path().join("out/flights.json").is_file());
    assert!(!temp_dir.path().join("db.json").exists());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("errors.txt")).unwrap(),
        "Line 2: A!,jkf,LAX,2025-12-01 09:00,2025-12-01 12:00,199.99 → Invalid flight_id, Invalid origin\n\
         Line 4: EF56,BOS,MIA,2025-11-10 15:00,2025-11-10 16:00,-10 → Invalid price\n"
    );
}

#[test]
fn clean_input_writes_no_error_log() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("ok.csv"), VALID_LINE).unwrap();

    flightsched(temp_dir.path())
        .args(["-i", "ok.csv"])
        .assert()
        .success();

    assert!(temp_dir.path().join("db.json").is_file());
    assert!(!temp_dir.path().join("errors.txt").exists());
}

#[test]
fn loaded_database_is_queried_as_is() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("ok.csv"), VALID_LINE).unwrap();
    flightsched(temp_dir.path())
        .args(["-i", "ok.csv", "-o", "saved.json"])
        .assert()
        .success();
    let saved = fs::read_to_string(temp_dir.path().join("saved.json")).unwrap();

    fs::write(temp_dir.path().join("q.json"), r#"{"price": 150}"#).unwrap();
    flightsched(temp_dir.path())
        .args(["-j", "saved.json", "-q", "q.json"])
        .assert()
        .success();

    // -j never rewrites the database
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("saved.json")).unwrap(),
        saved
    );
    assert!(!temp_dir.path().join("db.json").exists());

    let responses = response_files(temp_dir.path());
    let response: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(temp_dir.path().join(&responses[0])).unwrap(),
    )
    .unwrap();
    assert_eq!(response[0]["query"]["price"], 150);
    assert_eq!(response[0]["matches"].as_array().unwrap().len(), 0);
}

#[test]
fn query_without_database_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("q.json"), "{}").unwrap();

    flightsched(temp_dir.path())
        .args(["-q", "q.json"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("-q needs a database"));

    assert!(!temp_dir.path().join("db.json").exists());
}

#[test]
fn missing_input_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    flightsched(temp_dir.path())
        .args(["-i", "missing.csv"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn missing_input_directory_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    flightsched(temp_dir.path())
        .args(["-d", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input directory not found"));
}

#[test]
fn malformed_query_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("ok.csv"), VALID_LINE).unwrap();
    fs::write(temp_dir.path().join("q.json"), "not json").unwrap();

    flightsched(temp_dir.path())
        .args(["-i", "ok.csv", "-q", "q.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed JSON"));

    assert!(response_files(temp_dir.path()).is_empty());
}

#[test]
fn no_arguments_is_an_invocation_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    flightsched(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to do"));
}

#[test]
fn config_file_changes_response_prefix() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("ok.csv"), VALID_LINE).unwrap();
    fs::write(temp_dir.path().join("q.json"), "[{}]").unwrap();
    fs::write(
        temp_dir.path().join("flightsched.json"),
        r#"{"response_prefix": "response_ops"}"#,
    )
    .unwrap();

    flightsched(temp_dir.path())
        .args(["-i", "ok.csv", "-q", "q.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("response_ops_"));
}
