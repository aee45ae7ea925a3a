use debber::config::PackagingDescriptor;
use debber::error::Error;
use debber::parser::{parse_file, parse_str};
use debber::template::{render_descriptor_template, write_descriptor_template};
use debber::validation::ValidationError;
use tempfile::TempDir;

#[test]
fn test_template_shape() {
    let template = PackagingDescriptor::template();

    assert_eq!(template.source.changelog.len(), 1);
    assert_eq!(template.packages.len(), 1);
    assert_eq!(template.source.copyright.files.len(), 2);
    assert_eq!(template.source.copyright.files[1].files, "debian/*");
    assert_eq!(template.source.copyright.files[1].license, "GPL-2+");
    assert!(template.source.rules.is_none() && template.source.raw_rules.is_none());
}

#[test]
fn test_rendered_template() {
    let content = render_descriptor_template().unwrap();

    assert!(content.starts_with("# Generated by debber\n"));
    assert!(content.contains("standards-version"));
    assert!(content.contains("[[source.changelog]]"));
    assert!(content.contains("[[packages]]"));
    assert!(!content.contains("raw_rules"));
}

#[test]
fn test_unfilled_template_fails_validation() {
    let content = render_descriptor_template().unwrap();

    match parse_str(&content, "debian.toml") {
        Err(Error::ValidationError(ValidationError::MissingField { field })) => {
            assert_eq!(field, "source.name")
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_filled_template_is_valid() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("debian.toml");
    write_descriptor_template(&path).unwrap();

    let filled = std::fs::read_to_string(&path)
        .unwrap()
        .replace("= \"\"", "= \"filled\"")
        .replace("= []", "= [\"filled\"]");
    std::fs::write(&path, filled).unwrap();

    let descriptor = parse_file(&path).unwrap();
    assert_eq!(descriptor.source.name, "filled");
    assert_eq!(descriptor.source.changelog[0].distribution, vec!["filled"]);
    assert_eq!(descriptor.packages[0].description, "filled");
}

#[test]
fn test_existing_file_is_not_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("debian.toml");
    std::fs::write(&path, "keep me").unwrap();

    match write_descriptor_template(&path) {
        Err(Error::AlreadyExists { path: p }) => assert!(p.ends_with("debian.toml")),
        other => panic!("Expected AlreadyExists, got {other:?}"),
    }
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");
}
