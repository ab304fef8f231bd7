//! CLI integration tests against a temporary album store.

mod common;

use std::process::Command;

use serde_json::json;
use tempfile::TempDir;

use common::{
    json_lines, nature_album, run_cli_with_store, run_cli_with_store_success, write_album,
};

fn ids(stdout: &str) -> Vec<u64> {
    json_lines(stdout)
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}

fn setup() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("store");
    let file = write_album(temp_dir.path(), "nature.json", &nature_album());

    run_cli_with_store_success(&["import", file.to_str().unwrap()], &store);

    (temp_dir, store)
}

#[test]
fn test_import_album() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("store");
    let file = write_album(temp_dir.path(), "nature.json", &nature_album());

    let output = run_cli_with_store(&["import", file.to_str().unwrap()], &store);

    assert!(
        output.status.success(),
        "Import failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0.json"));
    assert!(stdout.contains("11 photos"));
    assert!(store.join("albums").join("0.json").exists());
}

#[test]
fn test_import_rejects_unsorted_album() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("store");
    let file = write_album(
        temp_dir.path(),
        "unsorted.json",
        &json!({
            "id": 1,
            "name": "Backwards",
            "photos": [
                {"id": 0, "name": "later", "date_time": "2021-06-02T00:00:00Z"},
                {"id": 1, "name": "earlier", "date_time": "2021-06-01T00:00:00Z"}
            ]
        }),
    );

    let output = run_cli_with_store(&["import", file.to_str().unwrap()], &store);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("data ordering violation"), "stderr: {}", stderr);
    assert!(!store.join("albums").join("1.json").exists());
}

#[test]
fn test_list_albums() {
    let (temp_dir, store) = setup();

    let trips = write_album(
        temp_dir.path(),
        "trips.json",
        &json!({"id": 3, "name": "Trips", "photos": []}),
    );
    run_cli_with_store_success(&["import", trips.to_str().unwrap()], &store);

    let stdout = run_cli_with_store_success(&["list", "--json"], &store);
    let albums = json_lines(&stdout);

    assert_eq!(albums.len(), 2);
    assert_eq!(albums[0]["name"], "Nature");
    assert_eq!(albums[0]["photo_count"], 11);
    assert_eq!(albums[1]["id"], 3);
}

#[test]
fn test_list_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli_with_store(&["list"], &temp_dir.path().join("empty"));

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No albums found."));
}

#[test]
fn test_show_album() {
    let (_temp_dir, store) = setup();

    let stdout = run_cli_with_store_success(&["show", "0", "--json"], &store);
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(summary["name"], "Nature");
    assert_eq!(summary["photo_count"], 11);
    assert_eq!(summary["first"], "2021-05-04T12:00:00Z");
    assert_eq!(summary["last"], "2022-12-01T14:00:00Z");
}

#[test]
fn test_photos_in_range() {
    let (_temp_dir, store) = setup();

    let stdout = run_cli_with_store_success(
        &[
            "photos",
            "0",
            "--start",
            "2021-06-13T12:00:00Z",
            "--end",
            "2021-09-01T00:00:00Z",
        ],
        &store,
    );

    assert_eq!(ids(&stdout), vec![3, 4, 5]);
}

#[test]
fn test_photos_boundaries() {
    let (_temp_dir, store) = setup();

    // Start equal to a photo's timestamp includes it; end equal excludes it.
    let stdout = run_cli_with_store_success(
        &[
            "photos",
            "0",
            "--start",
            "2021-06-12T14:00:00Z",
            "--end",
            "2021-06-14T14:00:00Z",
        ],
        &store,
    );

    assert_eq!(ids(&stdout), vec![2]);
}

#[test]
fn test_photos_inverted_range_is_empty() {
    let (_temp_dir, store) = setup();

    let output = run_cli_with_store(
        &["photos", "0", "--start", "2022-01-01", "--end", "2021-01-01"],
        &store,
    );

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No photos found."));
}

#[test]
fn test_photos_invalid_timestamp() {
    let (_temp_dir, store) = setup();

    let output = run_cli_with_store(
        &["photos", "0", "--start", "yesterday", "--end", "2021-01-01"],
        &store,
    );

    assert!(!output.status.success());
}

#[test]
fn test_holiday_photos() {
    let (_temp_dir, store) = setup();

    let stdout = run_cli_with_store_success(&["holiday", "0", "--year", "2021"], &store);

    assert_eq!(ids(&stdout), vec![2, 3, 6, 7]);
}

#[test]
fn test_holiday_photos_pretty() {
    let (_temp_dir, store) = setup();

    let stdout =
        run_cli_with_store_success(&["holiday", "0", "--year", "2022", "--pretty"], &store);
    let photos: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();

    let names: Vec<_> = photos.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["More moon", "Snow"]);
}

#[test]
fn test_holiday_photos_with_offset() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_album(
        temp_dir.path(),
        "zones.json",
        &json!({
            "id": 4,
            "name": "Zones",
            "photos": [
                {"id": 0, "name": "june-local", "date_time": "2021-05-31T22:30:00Z"},
                {"id": 1, "name": "july-local", "date_time": "2021-06-30T22:30:00Z"}
            ]
        }),
    );
    let store = temp_dir.path().join("store");

    let utc = run_cli_with_store_success(
        &["holiday", "--file", file.to_str().unwrap(), "--year", "2021"],
        &store,
    );
    assert_eq!(ids(&utc), vec![1]);

    let local = run_cli_with_store_success(
        &[
            "holiday",
            "--file",
            file.to_str().unwrap(),
            "--year",
            "2021",
            "--utc-offset",
            "+02:00",
        ],
        &store,
    );
    assert_eq!(ids(&local), vec![0]);
}

#[test]
fn test_holiday_does_not_modify_stored_album() {
    let (_temp_dir, store) = setup();
    let path = store.join("albums").join("0.json");

    let before = std::fs::read(&path).unwrap();
    run_cli_with_store_success(&["holiday", "0", "--year", "2021"], &store);
    let after = std::fs::read(&path).unwrap();

    assert_eq!(before, after);
}

#[test]
fn test_missing_album() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli_with_store(&["holiday", "42", "--year", "2021"], temp_dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("album 42 not found"));
}

#[test]
fn test_album_id_or_file_required() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli_with_store(&["holiday", "--year", "2021"], temp_dir.path());

    assert!(!output.status.success());
}

#[test]
fn test_remove_album() {
    let (_temp_dir, store) = setup();

    let stdout = run_cli_with_store_success(&["remove", "0"], &store);
    assert!(stdout.contains("Removed album 0"));

    let output = run_cli_with_store(&["show", "0"], &store);
    assert!(!output.status.success());
}

#[test]
fn test_store_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("env-store");
    let file = write_album(temp_dir.path(), "nature.json", &nature_album());

    let output = Command::new(env!("CARGO_BIN_EXE_album"))
        .args(["import", file.to_str().unwrap()])
        .env("ALBUM_STORE", &store)
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "Import failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(store.join("albums").join("0.json").exists());
}
