//! Tests for the version resolver

use super::*;
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &TempDir, parts: &[&str], contents: &[u8]) {
    let path = parts.iter().fold(dir.path().to_path_buf(), |p, part| p.join(part));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn test_single_quoted_version() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, &["pkg", "__init__.py"], b"__version__ = '1.2.3'\n");

    let resolver = VersionResolver::new(dir.path());
    assert_eq!(resolver.find_version(&["pkg", "__init__.py"]).unwrap(), "1.2.3");
}

#[test]
fn test_double_quoted_version() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, &["version.py"], b"__version__ = \"0.9\"\n");

    let resolver = VersionResolver::new(dir.path());
    assert_eq!(resolver.find_version(&["version.py"]).unwrap(), "0.9");
}

#[test]
fn test_missing_declaration_is_not_found() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, &["pkg", "__init__.py"], b"import os\nVERSION = (1, 2)\n");

    let resolver = VersionResolver::new(dir.path());
    let err = resolver.find_version(&["pkg", "__init__.py"]).unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {:?}", err);
    assert!(err.to_string().starts_with("Unable to find version string"));
}

#[test]
fn test_declaration_after_other_content() {
    let dir = TempDir::new().unwrap();
    let source = "\"\"\"Package docstring.\"\"\"\n\
                  from .manager import APIManager\n\
                  \n\
                  #: The current version of this extension.\n\
                  __version__ = '0.17.0'\n\
                  \n\
                  __all__ = ['APIManager']\n";
    write_file(&dir, &["flask_restless", "__init__.py"], source.as_bytes());

    let resolver = VersionResolver::new(dir.path());
    assert_eq!(
        resolver.find_version(&["flask_restless", "__init__.py"]).unwrap(),
        "0.17.0"
    );
}

#[test]
fn test_resolving_twice_is_stable() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, &["v.py"], b"__version__ = '3.1.4'\n");

    let resolver = VersionResolver::new(dir.path());
    let first = resolver.find_version(&["v.py"]).unwrap();
    let second = resolver.find_version(&["v.py"]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_nonexistent_file_is_file_access_error() {
    let dir = TempDir::new().unwrap();
    let resolver = VersionResolver::new(dir.path());

    let err = resolver.find_version(&["missing", "__init__.py"]).unwrap_err();
    match err {
        ResolveError::FileAccess { path, source } => {
            assert_eq!(path, dir.path().join("missing").join("__init__.py"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected FileAccess, got {:?}", other),
    }
}

#[test]
fn test_directory_is_file_access_error() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("pkg")).unwrap();

    let resolver = VersionResolver::new(dir.path());
    let err = resolver.find_version(&["pkg"]).unwrap_err();
    assert!(matches!(err, ResolveError::FileAccess { .. }));
}

#[test]
fn test_read_returns_whole_file() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, &["README.rst"], b"Title\n=====\n\nBody text.\n");

    let resolver = VersionResolver::new(dir.path());
    assert_eq!(
        resolver.read(&["README.rst"]).unwrap(),
        "Title\n=====\n\nBody text.\n"
    );
}

#[test]
fn test_invalid_utf8_is_read_lossily() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, &["latin1.py"], b"# caf\xe9\n__version__ = '2.0'\n");

    let resolver = VersionResolver::new(dir.path());
    assert_eq!(resolver.find_version(&["latin1.py"]).unwrap(), "2.0");
}

#[test]
fn test_path_for_joins_in_order() {
    let resolver = VersionResolver::new("/base");
    assert_eq!(
        resolver.path_for(&["a", "b", "c.py"]),
        std::path::PathBuf::from("/base/a/b/c.py")
    );
    let empty: [&str; 0] = [];
    assert_eq!(resolver.path_for(&empty), std::path::PathBuf::from("/base"));
}

#[test]
fn test_custom_identifier() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, &["meta.py"], b"__version__ = '1.0'\nRELEASE = '1.0.post2'\n");

    let resolver = VersionResolver::new(dir.path())
        .with_identifier("RELEASE")
        .unwrap();
    assert_eq!(resolver.identifier(), "RELEASE");
    assert_eq!(resolver.find_version(&["meta.py"]).unwrap(), "1.0.post2");
}

#[test]
fn test_error_actionability() {
    use crate::core::error_handling::ContextualError;

    let not_found = ResolveError::VersionNotFound {
        path: "pkg/__init__.py".into(),
    };
    assert!(not_found.is_user_actionable());
    assert!(not_found.user_message().unwrap().contains("pkg/__init__.py"));

    let io = ResolveError::FileAccess {
        path: "pkg/__init__.py".into(),
        source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    };
    assert!(!io.is_user_actionable());
    assert_eq!(io.user_message(), None);
}
