//! Integration tests for the evalradar CLI

use std::process::Command;
use tempfile::TempDir;

/// Get the path to the evalradar binary
fn evalradar_bin() -> std::path::PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("evalradar");
    path
}

/// Run evalradar with the given arguments
fn run_evalradar(args: &[&str]) -> std::process::Output {
    Command::new(evalradar_bin())
        .args(args)
        .output()
        .expect("failed to execute evalradar")
}

// =============================================================================
// Basic functionality tests
// =============================================================================

#[test]
fn test_help_flag() {
    let output = run_evalradar(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Radar chart"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--quiet"));
    assert!(stdout.contains("--no-color"));
}

#[test]
fn test_version_flag() {
    let output = run_evalradar(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("evalradar"));
}

// =============================================================================
// Rendering tests
// =============================================================================

#[test]
fn test_render_creates_png() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("radar.png");

    let output = run_evalradar(&["-o", image_path.to_str().unwrap()]);
    assert!(output.status.success());

    assert!(image_path.exists(), "Image file should be created");
    let bytes = std::fs::read(&image_path).unwrap();
    assert!(!bytes.is_empty(), "Image file should not be empty");
    assert_eq!(&bytes[..4], b"\x89PNG", "Output should be a PNG file");
}

#[test]
fn test_render_reports_saved_path() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("out.png");

    let output = run_evalradar(&["-o", image_path.to_str().unwrap()]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Chart saved to:"));
}

// =============================================================================
// Listing tests
// =============================================================================

#[test]
fn test_listing_shows_all_configurations() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("radar.png");

    let output = run_evalradar(&["--no-color", "-o", image_path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configurations:"));
    assert!(stdout.contains("[A] 1 scale (8-th)"));
    assert!(stdout.contains("[B] 3 scales (6-th, 8-th, 10-th)"));
    assert!(stdout.contains("[C] 7 scales (5-th ~ 11-th)"));
    assert!(stdout.contains("[D] 10 scales (3-rd ~ 13-th)"));
}

#[test]
fn test_quiet_suppresses_listing() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("radar.png");

    let output = run_evalradar(&["--quiet", "-o", image_path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains("Configurations:"),
        "Quiet mode should suppress the listing"
    );
    assert!(image_path.exists(), "Quiet mode should still render");
}

// =============================================================================
// Error handling tests
// =============================================================================

#[test]
fn test_invalid_directory_error() {
    let output = run_evalradar(&["-o", "/nonexistent_dir_xyz/chart.png"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Directory does not exist"));
}

#[test]
fn test_unknown_flag_fails() {
    let output = run_evalradar(&["--bogus"]);
    assert!(!output.status.success());
}
