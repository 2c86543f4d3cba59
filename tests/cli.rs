//! End-to-end checks of the binaries' process contract.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before UNIX epoch")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("bit_grid_cli_{nanos}_{name}"));
    fs::write(&path, contents).expect("failed to write temp input");
    path
}

#[test]
fn grid_ops_prints_clear_count() {
    let input = temp_file("example.bin", &[0xFF, 0x11, 0x12]);
    let output = Command::new(env!("CARGO_BIN_EXE_grid_ops"))
        .arg(&input)
        .output()
        .expect("failed to run grid_ops");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "200\n");
    let _ = fs::remove_file(input);
}

#[test]
fn grid_ops_empty_file_is_all_clear() {
    let input = temp_file("empty.bin", &[]);
    let output = Command::new(env!("CARGO_BIN_EXE_grid_ops"))
        .arg(&input)
        .output()
        .expect("failed to run grid_ops");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "256\n");
    let _ = fs::remove_file(input);
}

#[test]
fn grid_ops_rejects_wrong_argument_count() {
    let output = Command::new(env!("CARGO_BIN_EXE_grid_ops"))
        .output()
        .expect("failed to run grid_ops");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));

    let output = Command::new(env!("CARGO_BIN_EXE_grid_ops"))
        .args(["a.bin", "b.bin"])
        .output()
        .expect("failed to run grid_ops");
    assert!(!output.status.success());
}

#[test]
fn grid_ops_reports_missing_file() {
    let missing = std::env::temp_dir().join("bit_grid_cli_definitely_missing.bin");
    let output = Command::new(env!("CARGO_BIN_EXE_grid_ops"))
        .arg(&missing)
        .output()
        .expect("failed to run grid_ops");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}

#[test]
fn selftest_passes() {
    let output = Command::new(env!("CARGO_BIN_EXE_selftest"))
        .output()
        .expect("failed to run selftest");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{stdout}");
    assert_eq!(stdout.lines().count(), 8);
    assert!(stdout.lines().all(|line| line.ends_with(": OK")));
}

#[test]
fn gridtool_run_checks_dimensions() {
    let input = temp_file("small.bin", &[0x11, 0x55]);
    let output = Command::new(env!("CARGO_BIN_EXE_gridtool"))
        .args(["run", "--rows", "4", "--cols", "4", "--input"])
        .arg(&input)
        .output()
        .expect("failed to run gridtool");
    assert!(!output.status.success());

    let output = Command::new(env!("CARGO_BIN_EXE_gridtool"))
        .args(["run", "--input"])
        .arg(&input)
        .output()
        .expect("failed to run gridtool");
    assert!(output.status.success());
    let _ = fs::remove_file(input);
}

#[test]
fn gridtool_render_rejects_oversized_png_scale() {
    let input = temp_file("render.bin", &[0xFF]);
    let png = std::env::temp_dir().join("bit_grid_cli_oversized.png");
    let output = Command::new(env!("CARGO_BIN_EXE_gridtool"))
        .args(["render", "--scale", "536870912", "--input"])
        .arg(&input)
        .arg("--png")
        .arg(&png)
        .output()
        .expect("failed to run gridtool");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to write"));
    assert!(!png.exists());
    let _ = fs::remove_file(input);
}
