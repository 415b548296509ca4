/// Smoke tests to verify the binary runs without panicking
use std::process::Command;

#[test]
fn binary_shows_help() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("lifescreen"),
        "Help output should mention lifescreen"
    );
}

#[test]
fn binary_shows_version() {
    let output = Command::new("cargo")
        .args(["run", "--", "--version"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Binary failed to run --version: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn print_mode_terminates() {
    let output = Command::new("cargo")
        .args([
            "run", "--", "--print", "--seed", "42", "--generations", "3", "--width", "32",
            "--height", "16",
        ])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Print mode failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(!output.stdout.is_empty(), "Print mode produced no output");
}

#[test]
fn print_mode_is_deterministic_for_a_fixed_seed() {
    let run = || {
        Command::new("cargo")
            .args([
                "run", "--", "--print", "--seed", "7", "--generations", "5", "--width", "24",
                "--height", "12",
            ])
            .output()
            .expect("Failed to execute cargo run")
    };

    let first = run();
    let second = run();

    assert!(first.status.success() && second.status.success());
    assert_eq!(
        first.stdout, second.stdout,
        "Same seed should print the same frame"
    );
}

#[test]
fn export_writes_a_png() {
    let path = std::env::temp_dir().join("lifescreen_smoke.png");
    let _ = std::fs::remove_file(&path);

    let output = Command::new("cargo")
        .args([
            "run", "--", "--print", "--seed", "1", "--generations", "2", "--width", "16",
            "--height", "16", "--export",
        ])
        .arg(&path)
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Export run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(path.exists(), "Export should create the PNG file");

    let _ = std::fs::remove_file(&path);
}
