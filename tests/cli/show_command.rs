//! `pkgmeta show` tests

use clap::Parser;
use pkgmeta::app::cli::args::Args;
use pkgmeta::app::cli::display::render_text;
use pkgmeta::app::commands::{run, CommandOutput};
use pkgmeta::app::error::AppError;
use tempfile::TempDir;

use crate::common::{fixture_dir, write_file};

#[test]
fn test_show_defaults_to_table() {
    let descriptor = fixture_dir().join("pkgmeta.toml");
    let args = Args::try_parse_from(["pkgmeta", "-d", descriptor.to_str().unwrap()]).unwrap();

    match run(&args).unwrap() {
        CommandOutput::Table(metadata) => {
            assert_eq!(metadata.name, "Flask-Restless");
            assert_eq!(metadata.version, "0.17.1-dev");
            assert!(metadata
                .long_description
                .as_deref()
                .unwrap()
                .starts_with("Flask-Restless\n"));

            let text = render_text(&metadata);
            assert!(text.contains("0.17.1-dev"));
            assert!(text.contains("python-dateutil>2.2"));
            assert!(text.contains("Topic :: Database :: Front-Ends"));
        }
        other => panic!("expected a table, got {:?}", other),
    }
}

#[test]
fn test_show_json() {
    let descriptor = fixture_dir().join("pkgmeta.toml");
    let args = Args::try_parse_from([
        "pkgmeta",
        "-d",
        descriptor.to_str().unwrap(),
        "show",
        "--format",
        "json",
    ])
    .unwrap();

    let CommandOutput::Text(json) = run(&args).unwrap() else {
        panic!("expected JSON text");
    };
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["name"], "Flask-Restless");
    assert_eq!(value["version"], "0.17.1-dev");
    assert_eq!(value["install_requires"][0], "flask>=0.10");
    assert_eq!(value["tests_require"][0], "nose");
    assert_eq!(value["zip_safe"], false);
    assert_eq!(value["classifiers"].as_array().unwrap().len(), 12);
}

#[test]
fn test_show_with_base_dir_override() {
    let dir = TempDir::new().unwrap();
    let descriptor = write_file(
        &dir,
        &["packaging", "pkgmeta.toml"],
        "[package]\nname = \"demo\"\nversion-file = [\"demo\", \"__init__.py\"]\n",
    );
    write_file(&dir, &["demo", "__init__.py"], "__version__ = \"2.0.0\"\n");

    // Relative to the descriptor the version file does not exist
    let args = Args::try_parse_from(["pkgmeta", "-d", descriptor.to_str().unwrap()]).unwrap();
    assert!(matches!(run(&args).unwrap_err(), AppError::Descriptor(_)));

    let args = Args::try_parse_from([
        "pkgmeta",
        "-d",
        descriptor.to_str().unwrap(),
        "-C",
        dir.path().to_str().unwrap(),
    ])
    .unwrap();
    let CommandOutput::Table(metadata) = run(&args).unwrap() else {
        panic!("expected a table");
    };
    assert_eq!(metadata.version, "2.0.0");
}
