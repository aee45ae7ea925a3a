mod common;

use common::{write_descriptor, VALID_DESCRIPTOR};
use debber::error::Error;
use debber::processor::create_debian_dir;
use debber::renderer::MiniJinjaRenderer;
use debber::validation::ValidationError;
use tempfile::TempDir;

fn read(temp_dir: &TempDir, name: &str) -> String {
    std::fs::read_to_string(temp_dir.path().join("debian").join(name)).unwrap()
}

#[test_log::test]
fn test_create_writes_all_files() {
    let temp_dir = TempDir::new().unwrap();
    let descriptor_path = write_descriptor(temp_dir.path(), VALID_DESCRIPTOR);
    let engine = MiniJinjaRenderer::new();

    let debian_dir = create_debian_dir(&engine, &descriptor_path, temp_dir.path()).unwrap();
    assert_eq!(debian_dir, temp_dir.path().join("debian"));

    let control = read(&temp_dir, "control");
    assert!(control.contains("Source: foo\n"));
    assert!(control.contains("Maintainer: A <a@b.c>\n"));
    assert!(control.contains("Standards-Version: 4.6.0\n"));
    assert!(control.contains("Architecture: any\n"));
    assert!(control.contains("Description: desc\n"));

    let rules = read(&temp_dir, "rules");
    assert!(rules.starts_with("#!/usr/bin/make -f\n"));
    assert!(rules.contains("\tdh $@\n"));

    let changelog = read(&temp_dir, "changelog");
    assert!(changelog.starts_with("foo (1.0-1) stable; urgency=low\n"));
    assert!(changelog.contains("  * Initial release\n"));
    assert!(changelog.contains(" -- A <a@b.c>  Mon, 01 Jan 2024 00:00:00 +0000\n"));

    let copyright = read(&temp_dir, "copyright");
    assert!(copyright.contains("Files: *\nCopyright: 2024 A\nLicense: MIT\n"));

    for content in [control, rules, changelog, copyright] {
        assert!(!content.contains("{{") && !content.contains("{%"));
    }
}

#[test_log::test]
fn test_no_packages_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let without_packages = VALID_DESCRIPTOR
        .split("[[packages]]")
        .next()
        .unwrap()
        .to_string();
    let descriptor_path = write_descriptor(temp_dir.path(), &without_packages);
    let engine = MiniJinjaRenderer::new();

    let err = create_debian_dir(&engine, &descriptor_path, temp_dir.path()).unwrap_err();

    assert!(matches!(
        err,
        Error::ValidationError(ValidationError::Empty { table: "[[packages]]", .. })
    ));
    assert!(err.to_string().contains("at least one binary package"));
    assert!(!temp_dir.path().join("debian").exists());
}

#[test_log::test]
fn test_missing_descriptor() {
    let temp_dir = TempDir::new().unwrap();
    let engine = MiniJinjaRenderer::new();

    let result = create_debian_dir(&engine, temp_dir.path().join("debian.toml"), temp_dir.path());

    assert!(matches!(result, Err(Error::ReadError { .. })));
    assert!(!temp_dir.path().join("debian").exists());
}

#[test_log::test]
fn test_existing_debian_dir() {
    let temp_dir = TempDir::new().unwrap();
    let descriptor_path = write_descriptor(temp_dir.path(), VALID_DESCRIPTOR);
    let engine = MiniJinjaRenderer::new();
    std::fs::create_dir(temp_dir.path().join("debian")).unwrap();

    let result = create_debian_dir(&engine, &descriptor_path, temp_dir.path());

    assert!(matches!(result, Err(Error::AlreadyExists { .. })));
    assert_eq!(
        std::fs::read_dir(temp_dir.path().join("debian")).unwrap().count(),
        0
    );
}
