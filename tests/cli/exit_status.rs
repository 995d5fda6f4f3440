//! Exit status of a full command run

use clap::Parser;
use pkgmeta::app::cli::args::Args;
use pkgmeta::app::commands::{emit, run, CommandOutput};
use pkgmeta::app::startup::run_with;
use tempfile::TempDir;

use crate::common::{fixture_dir, write_file};

fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_missing_declaration_exits_with_one() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, &["meta.py"], "VERSION = '1.0'\n");
    let args = parse(&[
        "pkgmeta",
        "--no-color",
        "-C",
        dir.path().to_str().unwrap(),
        "version",
        "meta.py",
    ]);
    assert_eq!(run_with(&args), 1);
}

#[test]
fn test_missing_file_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let args = parse(&[
        "pkgmeta",
        "--no-color",
        "-C",
        dir.path().to_str().unwrap(),
        "version",
        "absent.py",
    ]);
    assert_eq!(run_with(&args), 1);
}

#[test]
fn test_successful_commands_exit_with_zero() {
    let descriptor = fixture_dir().join("pkgmeta.toml");
    let descriptor = descriptor.to_str().unwrap();

    assert_eq!(run_with(&parse(&["pkgmeta", "--no-color", "-d", descriptor, "version"])), 0);
    assert_eq!(run_with(&parse(&["pkgmeta", "--no-color", "-d", descriptor])), 0);
    assert_eq!(
        run_with(&parse(&["pkgmeta", "--no-color", "-d", descriptor, "show", "-F", "json"])),
        0
    );
    assert_eq!(run_with(&parse(&["pkgmeta", "--no-color", "-d", descriptor, "check"])), 0);
}

#[test]
fn test_check_errors_exit_with_one() {
    let dir = TempDir::new().unwrap();
    let descriptor = write_file(
        &dir,
        &["pkgmeta.toml"],
        "[package]\nname = \"demo\"\nversion = \"1\"\nclassifiers = [\"Topic\"]\n",
    );
    let args = parse(&["pkgmeta", "--no-color", "-d", descriptor.to_str().unwrap(), "check"]);
    assert_eq!(run_with(&args), 1);
}

#[test]
fn test_emit_text_and_table() {
    assert!(emit(CommandOutput::Text("0.17.1-dev".to_string()), false).is_ok());

    let descriptor = fixture_dir().join("pkgmeta.toml");
    let args = parse(&["pkgmeta", "-d", descriptor.to_str().unwrap(), "show"]);
    let output = run(&args).unwrap();
    assert!(matches!(output, CommandOutput::Table(_)));
    assert!(emit(output.clone(), false).is_ok());
    assert!(emit(output, true).is_ok());
}
