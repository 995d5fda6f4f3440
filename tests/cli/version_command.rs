//! `pkgmeta version` tests

use clap::Parser;
use pkgmeta::app::cli::args::Args;
use pkgmeta::app::commands::{run, version_command, CommandOutput};
use pkgmeta::app::error::AppError;
use pkgmeta::metadata::DescriptorError;
use pkgmeta::resolver::ResolveError;
use tempfile::TempDir;

use crate::common::{fixture_dir, write_file};

fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_version_from_explicit_parts() {
    let base = fixture_dir();
    let args = parse(&[
        "pkgmeta",
        "--base-dir",
        base.to_str().unwrap(),
        "version",
        "flask_restless",
        "__init__.py",
    ]);
    assert_eq!(
        run(&args).unwrap(),
        CommandOutput::Text("0.17.1-dev".to_string())
    );
}

#[test]
fn test_version_from_descriptor() {
    let descriptor = fixture_dir().join("pkgmeta.toml");
    let args = parse(&["pkgmeta", "-d", descriptor.to_str().unwrap(), "version"]);
    // Base directory defaults to the descriptor's directory
    assert_eq!(version_command(&args, &[], None).unwrap(), "0.17.1-dev");
}

#[test]
fn test_version_with_identifier() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, &["meta.py"], "__version__ = '1.0'\nRELEASE = '1.0.post1'\n");
    let args = parse(&["pkgmeta", "-C", dir.path().to_str().unwrap()]);

    let parts = vec!["meta.py".to_string()];
    assert_eq!(version_command(&args, &parts, None).unwrap(), "1.0");
    assert_eq!(
        version_command(&args, &parts, Some("RELEASE")).unwrap(),
        "1.0.post1"
    );
}

#[test]
fn test_version_not_found_error() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, &["meta.py"], "VERSION = (1, 0)\n");
    let args = parse(&[
        "pkgmeta",
        "-C",
        dir.path().to_str().unwrap(),
        "version",
        "meta.py",
    ]);

    match run(&args).unwrap_err() {
        AppError::Resolve(ResolveError::VersionNotFound { path }) => {
            assert_eq!(path, dir.path().join("meta.py"));
        }
        other => panic!("expected VersionNotFound, got {:?}", other),
    }
}

#[test]
fn test_version_missing_file_error() {
    let dir = TempDir::new().unwrap();
    let args = parse(&[
        "pkgmeta",
        "-C",
        dir.path().to_str().unwrap(),
        "version",
        "pkg",
        "__init__.py",
    ]);
    assert!(matches!(
        run(&args).unwrap_err(),
        AppError::Resolve(ResolveError::FileAccess { .. })
    ));
}

#[test]
fn test_version_missing_descriptor() {
    let dir = TempDir::new().unwrap();
    let descriptor = dir.path().join("pkgmeta.toml");
    let args = parse(&["pkgmeta", "-d", descriptor.to_str().unwrap(), "version"]);
    assert!(matches!(
        run(&args).unwrap_err(),
        AppError::Descriptor(_)
    ));
}

#[test]
fn test_identifier_rejected_for_static_version() {
    let dir = TempDir::new().unwrap();
    let descriptor = write_file(
        &dir,
        &["pkgmeta.toml"],
        "[package]\nname = \"tiny\"\nversion = \"9.9\"\n",
    );
    let args = parse(&[
        "pkgmeta",
        "-d",
        descriptor.to_str().unwrap(),
        "version",
        "-i",
        "NOPE",
    ]);

    match run(&args).unwrap_err() {
        AppError::Descriptor(DescriptorError::VersionSource { package, message }) => {
            assert_eq!(package, "tiny");
            assert!(message.contains("--identifier"), "got: {}", message);
        }
        other => panic!("expected VersionSource error, got {:?}", other),
    }

    // Without the identifier the static version is printed
    let plain = parse(&["pkgmeta", "-d", descriptor.to_str().unwrap(), "version"]);
    assert_eq!(run(&plain).unwrap(), CommandOutput::Text("9.9".to_string()));
}
