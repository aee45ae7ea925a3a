//! Semantic checks over a decoded [`PackagingDescriptor`].
//!
//! Rules are evaluated in a fixed order and the first violation wins:
//! source fields, the rules exclusion, changelog entries, copyright stanzas,
//! and finally binary packages. Nothing is defaulted or corrected here.

use thiserror::Error;

use crate::config::{
    BinaryPackage, ChangelogEntry, CopyrightFileStanza, PackagingDescriptor, SourceInfo,
};

/// A single violated descriptor rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required string or list is missing, empty or blank
    #[error("`{field}` cannot be missing or an empty string")]
    MissingField { field: String },

    /// A field written as a single line of output contains a line break
    #[error("`{field}` must be a single line")]
    MultiLine { field: String },

    /// Both `source.rules` and `source.raw_rules` are set
    #[error("you cannot have both `source.rules` and `source.raw_rules` defined")]
    ConflictingRules,

    /// A table array that needs at least one element has none
    #[error("at least one {what} is required, none were provided in `{table}`")]
    Empty {
        what: &'static str,
        table: &'static str,
    },
}

type Check = Result<(), ValidationError>;

fn require(value: &str, field: impl FnOnce() -> String) -> Check {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field: field() });
    }
    Ok(())
}

/// Like [`require`], and the value must not contain a line break.
fn require_line(value: &str, field: impl Fn() -> String) -> Check {
    require(value, &field)?;
    if value.contains(['\n', '\r']) {
        return Err(ValidationError::MultiLine { field: field() });
    }
    Ok(())
}

fn require_list(values: &[String], field: &str, single_line: bool) -> Check {
    if values.is_empty() {
        return Err(ValidationError::MissingField { field: field.to_string() });
    }
    for (idx, value) in values.iter().enumerate() {
        let item = || format!("{field}[{idx}]");
        if single_line {
            require_line(value, item)?;
        } else {
            require(value, item)?;
        }
    }
    Ok(())
}

fn validate_source(source: &SourceInfo) -> Check {
    require_line(&source.name, || "source.name".into())?;
    require_line(&source.maintainer, || "source.maintainer".into())?;
    require_line(&source.section, || "source.section".into())?;
    require_line(&source.priority, || "source.priority".into())?;
    require_line(&source.standards_version, || "source.standards-version".into())
}

fn validate_changelog_entry(idx: usize, entry: &ChangelogEntry) -> Check {
    let field = |name: &str| format!("source.changelog[{idx}].{name}");
    require_line(&entry.version, || field("version"))?;
    require_list(&entry.distribution, &field("distribution"), true)?;
    require_line(&entry.urgency, || field("urgency"))?;
    require_list(&entry.changes, &field("changes"), false)?;
    require_line(&entry.changed_by, || field("changed_by"))?;
    require_line(&entry.date, || field("date"))
}

fn validate_copyright_stanza(idx: usize, stanza: &CopyrightFileStanza) -> Check {
    let field = |name: &str| format!("source.copyright.files[{idx}].{name}");
    require_line(&stanza.files, || field("files"))?;
    require_list(&stanza.copyright, &field("copyright"), false)?;
    require_line(&stanza.license, || field("license"))
}

fn validate_package(idx: usize, package: &BinaryPackage) -> Check {
    let field = |name: &str| format!("packages[{idx}].{name}");
    require_line(&package.name, || field("name"))?;
    require_line(&package.arch, || field("arch"))?;
    require_line(&package.section, || field("section"))?;
    require_line(&package.priority, || field("priority"))?;
    require(&package.description, || field("description"))
}

/// Validates a descriptor, returning the first violated rule.
pub fn validate(descriptor: &PackagingDescriptor) -> Result<(), ValidationError> {
    let source = &descriptor.source;
    validate_source(source)?;
    source.rules_source()?;

    if source.changelog.is_empty() {
        return Err(ValidationError::Empty {
            what: "changelog entry",
            table: "[[source.changelog]]",
        });
    }
    for (idx, entry) in source.changelog.iter().enumerate() {
        validate_changelog_entry(idx, entry)?;
    }

    if source.copyright.files.is_empty() {
        return Err(ValidationError::Empty {
            what: "copyright files stanza",
            table: "[[source.copyright.files]]",
        });
    }
    for (idx, stanza) in source.copyright.files.iter().enumerate() {
        validate_copyright_stanza(idx, stanza)?;
    }

    if descriptor.packages.is_empty() {
        return Err(ValidationError::Empty {
            what: "binary package",
            table: "[[packages]]",
        });
    }
    for (idx, package) in descriptor.packages.iter().enumerate() {
        validate_package(idx, package)?;
    }

    Ok(())
}
