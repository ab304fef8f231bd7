use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{Value, json};

/// Run the CLI binary against an isolated store directory.
pub fn run_cli_with_store(args: &[&str], store: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_album"));
    cmd.arg("--store").arg(store);
    cmd.args(args);
    cmd.env_remove("ALBUM_STORE");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI against a store and expect success.
pub fn run_cli_with_store_success(args: &[&str], store: &Path) -> String {
    let output = run_cli_with_store(args, store);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Parse stdout holding one JSON value per line.
pub fn json_lines(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("Invalid JSON line"))
        .collect()
}

/// The "Nature" album used across tests.
pub fn nature_album() -> Value {
    json!({
        "id": 0,
        "name": "Nature",
        "photos": [
            {"id": 0, "name": "Acacia", "date_time": "2021-05-04T12:00:00Z"},
            {"id": 1, "name": "Begonia", "date_time": "2021-05-30T12:00:00Z"},
            {"id": 2, "name": "Camellia", "date_time": "2021-06-12T14:00:00Z"},
            {"id": 3, "name": "Daisy", "date_time": "2021-06-14T14:00:00Z"},
            {"id": 4, "name": "Eustoma", "date_time": "2021-08-11T14:00:00Z"},
            {"id": 5, "name": "Forget Me Not", "date_time": "2021-08-11T14:00:00Z"},
            {"id": 6, "name": "Snow", "date_time": "2021-12-11T14:00:00Z"},
            {"id": 7, "name": "More snow", "date_time": "2021-12-15T14:00:00Z"},
            {"id": 8, "name": "Moon", "date_time": "2022-01-01T14:00:00Z"},
            {"id": 9, "name": "More moon", "date_time": "2022-06-01T14:00:00Z"},
            {"id": 10, "name": "Snow", "date_time": "2022-12-01T14:00:00Z"}
        ]
    })
}

/// Write an album JSON file into `dir` and return its path.
pub fn write_album(dir: &Path, file_name: &str, album: &Value) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, serde_json::to_string_pretty(album).unwrap()).unwrap();
    path
}
