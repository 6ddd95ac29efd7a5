use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_in(dir: &Path) -> Output {
    let bin_path = env!("CARGO_BIN_EXE_rental_report");
    Command::new(bin_path)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute binary")
}

fn read_log(dir: &Path) -> String {
    fs::read_to_string(dir.join("logs/data_processing.log")).expect("log file should exist")
}

#[test]
fn test_missing_input_completes_quietly() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");

    let output = run_in(dir.path());
    assert!(
        output.status.success(),
        "Binary failed with stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().is_empty(), "unexpected stdout: {stdout}");
    assert!(!dir.path().join("top_10_equipment.png").exists());

    let log = read_log(dir.path());
    assert!(log.contains(" - INFO - Starting data processing pipeline."));
    assert!(log.contains(" - ERROR - File not found: rental_data.csv"));
    assert!(log.contains(" - INFO - Data processing pipeline finished."));
    assert!(!log.contains("Creating visualization."));
}

#[test]
fn test_missing_columns_skip_listing_and_chart() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("rental_data.csv"),
        "equipment,rental_amount\ntractor,100\nbaler,\n",
    )
    .expect("Failed to write input file");

    let output = run_in(dir.path());
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Top 10 Rented Farm Equipment:"));
    assert!(!dir.path().join("top_10_equipment.png").exists());

    let log = read_log(dir.path());
    assert!(log.contains(" - INFO - Filled missing rental_amount with the mean."));
    assert!(log.contains(" - ERROR - Required columns for analysis are missing."));
    assert!(log.contains(" - WARNING - No data to visualize."));
}

#[test]
fn test_log_is_appended_across_runs() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");

    assert!(run_in(dir.path()).status.success());
    assert!(run_in(dir.path()).status.success());

    let log = read_log(dir.path());
    assert_eq!(log.matches("Starting data processing pipeline.").count(), 2);

    // 2024-01-31 12:00:00,123 - INFO - ...
    let first = log.lines().next().expect("log should not be empty");
    let (stamp, rest) = first.split_once(" - ").expect("separator");
    assert_eq!(stamp.len(), 23);
    assert_eq!(&stamp[19..20], ",");
    assert!(rest.starts_with("INFO - "));
}
