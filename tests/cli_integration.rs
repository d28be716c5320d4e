mod common;

use std::process::Command;

use common::{EntrySpec, HeaderSpec, build_file, header_tag_offsets};
use tempfile::tempdir;

fn bin() -> String {
    env!("CARGO_BIN_EXE_deoparse").to_string()
}

fn sample() -> Vec<u8> {
    let spec = HeaderSpec {
        file_name: b"castle.deo".to_vec(),
        transfer_agent: b"exporter".to_vec(),
        ..Default::default()
    };
    build_file(
        &spec,
        &[
            EntrySpec::named("Gate", "Door", 0x200),
            EntrySpec::named("Moat", "Water", 0x300),
        ],
    )
}

#[test]
fn cli_dumps_header_and_directory() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("castle.deo");
    std::fs::write(&input, sample()).unwrap();

    let out = Command::new(bin())
        .arg("-i")
        .arg(&input)
        .args(["--header", "--directory"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("Header:\n"));
    assert!(stdout.contains("    file_name           castle.deo\n"));
    assert!(stdout.contains("Directory:\n"));
    assert!(stdout.contains("Gate"));
    assert!(stdout.contains("Water"));
}

#[test]
fn cli_without_dump_flags_prints_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("castle.deo");
    std::fs::write(&input, sample()).unwrap();

    let out = Command::new(bin()).arg(&input).output().unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn cli_json_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("castle.deo");
    std::fs::write(&input, sample()).unwrap();

    let out = Command::new(bin())
        .arg("--json")
        .arg("--directory")
        .arg(&input)
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(v.get("header").is_none());
    assert_eq!(v["directory"][1]["name"], "Moat");
    assert_eq!(v["directory"][1]["data_position"], 0x300);
}

#[test]
fn cli_malformed_file_logs_one_line_and_dumps_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.deo");
    let log = dir.path().join("run.log");
    let mut data = sample();
    let spec = HeaderSpec {
        file_name: b"castle.deo".to_vec(),
        transfer_agent: b"exporter".to_vec(),
        ..Default::default()
    };
    data[header_tag_offsets(&spec)[0]] = 8;
    std::fs::write(&input, data).unwrap();

    let out = Command::new(bin())
        .arg("-i")
        .arg(&input)
        .arg("--log")
        .arg(&log)
        .args(["--header", "--directory"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());

    let logged = std::fs::read_to_string(&log).unwrap();
    let lines: Vec<_> = logged.lines().collect();
    assert_eq!(lines.len(), 1, "{logged}");
    assert!(lines[0].contains("File is invalid type or malformed"));
}

#[test]
fn cli_missing_file_fails() {
    let dir = tempdir().unwrap();
    let st = Command::new(bin())
        .arg("-i")
        .arg(dir.path().join("absent.deo"))
        .status()
        .unwrap();
    assert!(!st.success());
}
