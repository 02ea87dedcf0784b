use plan_progress_test_utils::PlanningFixture;
use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::{Command, Output};

fn run_in(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_plan-progress"))
        .current_dir(root)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run plan-progress")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn default_run_prints_bar_and_confirmation() {
    let fixture = PlanningFixture::new();
    fixture.write("p1.txt", "wrote SUMMARY.md");
    fixture.write("p2.txt", "pending");
    fixture.write(
        ".planning/ROADMAP.md",
        r#"[{"phase":"p1.txt"},{"phase":"p2.txt"}]"#,
    );

    let output = run_in(fixture.root(), &[]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Progress: [██████████░░░░░░░░░░] 50% (1/2 phases)\n\
         Checked 2 phases from .planning/ROADMAP.md: 1 complete, 1 pending.\n"
    );
}

#[test]
fn root_flag_replaces_working_directory() {
    let fixture = PlanningFixture::with_phases(&[true, true, true, false]);
    let elsewhere = tempfile::tempdir().unwrap();
    let root = fixture.root().to_string_lossy().into_owned();

    let output = run_in(elsewhere.path(), &["--root", &root, "--width", "4"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert!(stdout(&output).starts_with("Progress: [███░] 75% (3/4 phases)\n"));
}

#[test]
fn repeated_runs_print_identical_output() {
    let fixture = PlanningFixture::with_phases(&[true, false, false]);
    let first = run_in(fixture.root(), &["report", "--format", "table"]);
    let second = run_in(fixture.root(), &["report", "--format", "table"]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn json_format_is_machine_readable() {
    let fixture = PlanningFixture::with_phases(&[true, false, false]);
    let output = run_in(fixture.root(), &["report", "--format", "json"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(payload["percent"], 33);
    assert_eq!(payload["completed"], 1);
    assert_eq!(payload["total"], 3);
    assert_eq!(payload["phases"][0]["status"], "Complete");
    assert_eq!(payload["phases"][1]["phase"], ".planning/phases/02.md");
}

#[test]
fn table_format_lists_every_phase() {
    let fixture = PlanningFixture::with_phases(&[true, false]);
    let output = run_in(fixture.root(), &["report", "--format", "table"]);
    let out = stdout(&output);
    assert!(out.contains("| 1 | .planning/phases/01.md | - | Complete |"), "{out}");
    assert!(out.contains("| 2 | .planning/phases/02.md | - | Pending |"), "{out}");
}

#[test]
fn empty_manifest_reports_zero() {
    let fixture = PlanningFixture::new();
    fixture.write_manifest(&[]);

    let output = run_in(fixture.root(), &[]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("Progress: [░░░░░░░░░░░░░░░░░░░░] 0% (0/0 phases)\n"));
    assert!(out.contains("No phases listed in .planning/ROADMAP.md"));
}

#[test]
fn missing_phase_fails_naming_path() {
    let fixture = PlanningFixture::new();
    fixture.write_manifest(&["phases/absent.md"]);

    let output = run_in(fixture.root(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let err = stderr(&output);
    assert!(err.contains("phase file not found"), "{err}");
    assert!(err.contains("phases/absent.md"), "{err}");
}

#[test]
fn unreadable_phase_reports_cause_once() {
    let fixture = PlanningFixture::new();
    std::fs::create_dir_all(fixture.path("phases/dir.md")).unwrap();
    fixture.write_manifest(&["phases/dir.md"]);

    let output = run_in(fixture.root(), &[]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(
        err.contains("io error reading phase file ./phases/dir.md (manifest entry 1)"),
        "{err}"
    );
    assert_eq!(err.matches("os error").count(), 1, "{err}");
}

#[test]
fn latin1_phase_file_counts_as_complete() {
    let fixture = PlanningFixture::new();
    fixture.write_bytes("p1.txt", b"caf\xe9 done, see SUMMARY.md");
    fixture.write_bytes("p2.txt", b"caf\xe9 pending");
    fixture.write_manifest(&["p1.txt", "p2.txt"]);

    let output = run_in(fixture.root(), &[]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert!(stdout(&output).starts_with("Progress: [██████████░░░░░░░░░░] 50% (1/2 phases)\n"));
}

#[test]
fn bar_below_hundred_is_never_full() {
    let mut flags = vec![true; 99];
    flags.push(false);
    let fixture = PlanningFixture::with_phases(&flags);

    let output = run_in(fixture.root(), &[]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert!(stdout(&output).starts_with("Progress: [███████████████████░] 99% (99/100 phases)\n"));
}

#[test]
fn missing_manifest_fails() {
    let fixture = PlanningFixture::new();
    let output = run_in(fixture.root(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("phase manifest not found"));
}

#[test]
fn malformed_manifest_fails() {
    let fixture = PlanningFixture::new();
    fixture.write(".planning/ROADMAP.md", r#"{"phase": "p1.txt"}"#);

    let output = run_in(fixture.root(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("expected a JSON array of phases"));
}

#[test]
fn zero_width_is_rejected() {
    let fixture = PlanningFixture::with_phases(&[true]);
    let output = run_in(fixture.root(), &["--width", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("bar width must be between 1 and 200"));
}

#[test]
fn update_state_rewrites_progress_field() {
    let fixture = PlanningFixture::with_phases(&[true, false]);
    fixture.write_state();

    let output = run_in(fixture.root(), &["update-state"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Progress: [██████████░░░░░░░░░░] 50% (1/2 phases)\n\
         Updated .planning/STATE.md with progress: [█████░░░░░] 50%\n"
    );
    assert!(fixture
        .read(".planning/STATE.md")
        .contains("**Progress:** [█████░░░░░] 50%"));
}

#[test]
fn update_state_is_idempotent() {
    let fixture = PlanningFixture::with_phases(&[true, false]);
    fixture.write_state();

    run_in(fixture.root(), &["update-state"]);
    let before = fixture.read(".planning/STATE.md");
    let output = run_in(fixture.root(), &["update-state"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("already records progress"));
    assert_eq!(fixture.read(".planning/STATE.md"), before);
}

#[test]
fn update_state_without_field_fails() {
    let fixture = PlanningFixture::with_phases(&[true]);
    fixture.write(".planning/STATE.md", "# State\n");

    let output = run_in(fixture.root(), &["update-state"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("progress field not found"));
    assert_eq!(fixture.read(".planning/STATE.md"), "# State\n");
}

#[test]
fn report_does_not_touch_state_file() {
    let fixture = PlanningFixture::with_phases(&[true]);
    fixture.write_state();
    let before = fixture.read(".planning/STATE.md");

    let output = run_in(fixture.root(), &["report"]);
    assert!(output.status.success());
    assert_eq!(fixture.read(".planning/STATE.md"), before);
}
