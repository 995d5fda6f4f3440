//! `pkgmeta check` tests

use clap::Parser;
use pkgmeta::app::cli::args::Args;
use pkgmeta::app::commands::{emit, run, CommandOutput};
use pkgmeta::app::error::AppError;
use pkgmeta::metadata::Severity;
use tempfile::TempDir;

use crate::common::{fixture_dir, write_file};

#[test]
fn test_check_fixture_is_clean() {
    let descriptor = fixture_dir().join("pkgmeta.toml");
    let args =
        Args::try_parse_from(["pkgmeta", "-d", descriptor.to_str().unwrap(), "check"]).unwrap();

    let output = run(&args).unwrap();
    match &output {
        CommandOutput::Issues { issues, .. } => assert!(issues.is_empty(), "{:?}", issues),
        other => panic!("expected issues, got {:?}", other),
    }
    assert!(emit(output, false).is_ok());
}

#[test]
fn test_check_reports_errors_and_fails() {
    let dir = TempDir::new().unwrap();
    let descriptor = write_file(
        &dir,
        &["pkgmeta.toml"],
        r#"
[package]
name = "demo"
version-file = ["demo.py"]
install-requires = ["flask=>0.10"]
classifiers = ["Topic"]
"#,
    );
    write_file(&dir, &["demo.py"], "VERSION = '1'\n");

    let args =
        Args::try_parse_from(["pkgmeta", "-d", descriptor.to_str().unwrap(), "check"]).unwrap();
    let output = run(&args).unwrap();
    let CommandOutput::Issues { issues, .. } = &output else {
        panic!("expected issues");
    };
    let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
    assert_eq!(fields, vec!["version", "install-requires", "classifiers"]);
    assert!(issues.iter().all(|i| i.severity == Severity::Error));

    match emit(output, false).unwrap_err() {
        AppError::CheckFailed { errors, path } => {
            assert_eq!(errors, 3);
            assert_eq!(path, descriptor);
        }
        other => panic!("expected CheckFailed, got {:?}", other),
    }
}

#[test]
fn test_check_warnings_do_not_fail() {
    let dir = TempDir::new().unwrap();
    let descriptor = write_file(
        &dir,
        &["pkgmeta.toml"],
        "[package]\nname = \"demo\"\nversion = \"1.0\"\nauthor-email = \"nobody\"\n",
    );

    let args =
        Args::try_parse_from(["pkgmeta", "-d", descriptor.to_str().unwrap(), "check"]).unwrap();
    let output = run(&args).unwrap();
    assert!(emit(output, false).is_ok());
}
