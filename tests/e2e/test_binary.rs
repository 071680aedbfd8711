//! Integration tests for the ascii-graphs binary.
//!
//! These tests run the compiled binary with stdin input and check its
//! stdout, stderr and exit status.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const SAMPLE: &str = "Category,Value\nExternal,14\nInternal,23\n";

/// Path to the binary built by `cargo test`.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ascii-graphs"))
}

/// Run the binary with the given stdin input and CLI args.
fn run(input: &str, args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

/// Run and require success. Returns stdout.
fn run_ok(input: &str, args: &[&str]) -> String {
    let output = run(input, args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ascii-graphs-{}-{}", std::process::id(), name))
}

#[test]
fn test_default_bar_chart() {
    let out = run_ok(SAMPLE, &[]);
    assert!(out.starts_with("Bar Graph\n"));
    assert!(out.contains("External: 14"));
    assert!(out.contains("Internal: 23"));
    assert!(out.contains('█'));
}

#[test]
fn test_every_kind() {
    for (kind, title) in [
        ("bar", "Bar Graph"),
        ("vertical-bar", "Vertical Bar Chart"),
        ("area", "Area Chart"),
        ("pie", "Pie Chart"),
    ] {
        let out = run_ok(SAMPLE, &["--kind", kind]);
        assert!(out.contains(title), "kind {kind}: {out}");
    }
}

#[test]
fn test_html_output() {
    let out = run_ok(SAMPLE, &["-k", "pie", "--html"]);
    assert!(out.contains(r#"<div class="graph-wrapper""#));
    assert!(out.contains("legend-percentage"));
}

#[test]
fn test_ascii_axes() {
    let out = run_ok(SAMPLE, &["-k", "vertical-bar", "--ascii"]);
    assert!(out.contains("+---"));
    assert!(!out.contains('└'));
}

#[test]
fn test_no_title() {
    let out = run_ok(SAMPLE, &["--no-title"]);
    assert!(out.starts_with("Legend\n"));
}

#[test]
fn test_glyph_flags() {
    let out = run_ok(SAMPLE, &["--bar-char", "="]);
    assert!(out.contains("=========="));
    let out = run_ok(SAMPLE, &["-k", "area", "--line-char", "o", "--fill-char", ":"]);
    assert!(out.contains(':'));
}

#[test]
fn test_pie_precondition_is_printed() {
    let out = run_ok(SAMPLE, &["-k", "pie", "--pie-chars", "x"]);
    assert!(out.contains("Please select at least 2 characters for 2 data points. You have 1 selected."));
}

#[test]
fn test_delimiter() {
    let out = run_ok("A;5\nB;10\n", &["-d", ";"]);
    assert!(out.contains("B: 10"));
}

#[test]
fn test_invalid_number_fails() {
    let output = run("A,1\nB,oops\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid number in row 2: oops"), "{stderr}");
}

#[test]
fn test_unknown_kind_fails() {
    let output = run(SAMPLE, &["-k", "donut"]);
    assert!(!output.status.success());
}

#[test]
fn test_empty_input_prints_nothing() {
    let out = run_ok("\n\n", &[]);
    assert_eq!(out, "");
}

#[test]
fn test_input_file_and_output_file() {
    let input = temp_path("in.csv");
    let output = temp_path("out.txt");
    fs::write(&input, SAMPLE).unwrap();
    let stdout = run_ok(
        "",
        &[input.to_str().unwrap(), "-o", output.to_str().unwrap()],
    );
    assert_eq!(stdout, "");
    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("Internal: 23"));
    fs::remove_file(&input).ok();
    fs::remove_file(&output).ok();
}

#[test]
fn test_style_file() {
    let style = temp_path("style.toml");
    fs::write(&style, "bar_char = \"*\"\npie_chars = [\"a\", \"b\"]\n").unwrap();
    let out = run_ok(SAMPLE, &["--style", style.to_str().unwrap()]);
    assert!(out.contains("**********"));
    let out = run_ok(SAMPLE, &["-k", "pie", "--style", style.to_str().unwrap()]);
    assert!(out.contains("a External"));
    fs::remove_file(&style).ok();
}

#[test]
fn test_bad_style_file_fails() {
    let style = temp_path("bad.toml");
    fs::write(&style, "bar_char = [").unwrap();
    let output = run(SAMPLE, &["--style", style.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    fs::remove_file(&style).ok();
}

#[test]
fn test_version_flag() {
    let out = run_ok("", &["--version"]);
    assert!(out.starts_with("ascii-graphs "));
}
