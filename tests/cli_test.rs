use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_auto_driving_sim"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute simulation")
}

/// Test that a batch run reports the collision of two cars
#[test]
fn test_batch_run_reports_collision() {
    let output = run_cli(&[
        "--width",
        "10",
        "--height",
        "10",
        "--car",
        "A 1 2 N FFRFFFFRRL",
        "--car",
        "B 7 8 W FFLFFFFFFF",
    ]);

    assert!(
        output.status.success(),
        "Batch run failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("- A, collides with B at (5,4) at step 7"));
    assert!(stdout.contains("- B, collides with A at (5,4) at step 7"));

    // Collisions are logged as warnings
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("collision at (5,4)"), "stderr: {}", stderr);
}

/// Test that --trace and --map add step and map output
#[test]
fn test_batch_run_trace_and_map() {
    let output = run_cli(&[
        "--width", "10", "--height", "10", "--car", "A 1 2 N FFRFFFFRRL", "--trace", "--map",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--- Step 10 ---"));
    assert!(stdout.contains("A turns S -> W"));
    assert!(stdout.contains("=== Field Map (10 x 10) ==="));
    assert!(stdout.contains("- A, (5,4) S"));
}

/// Test that invalid cars are rejected with a failing exit status
#[test]
fn test_batch_run_rejects_invalid_car() {
    let output = run_cli(&["--width", "5", "--height", "5", "--car", "A 9 9 N F"]);
    assert!(!output.status.success());

    let output = run_cli(&["--width", "5", "--height", "5", "--car", "A 1 1 N FQ"]);
    assert!(!output.status.success());

    let output = run_cli(&["--width", "500", "--height", "5"]);
    assert!(!output.status.success());
}

/// Test that an empty field is reported, not treated as a failure
#[test]
fn test_batch_run_without_cars() {
    let output = run_cli(&["--width", "5", "--height", "5"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No existing cars in the field."));
}

/// Test that seeded random runs are reproducible
#[test]
fn test_seeded_random_runs_match() {
    let args = ["--width", "12", "--height", "12", "--random", "6", "--seed", "7"];
    let first = run_cli(&args);
    let second = run_cli(&args);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8_lossy(&first.stdout).contains("- CAR6"));
}
