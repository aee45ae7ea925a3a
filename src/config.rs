//! Packaging descriptor model.
//! This module holds the typed representation of `debian.toml`: the source
//! package, its changelog and copyright data, and the binary packages built
//! from it.

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Root of a packaging descriptor.
///
/// Every field defaults to empty when the key is missing so that the
/// validator, not the decoder, reports which field needs filling in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackagingDescriptor {
    pub source: SourceInfo,
    pub packages: Vec<BinaryPackage>,
}

/// Source package metadata (`[source]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceInfo {
    pub name: String,
    pub maintainer: String,
    pub section: String,
    pub priority: String,
    #[serde(rename = "standards-version")]
    pub standards_version: String,
    /// Named reference to a custom rules script
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    /// Inline `debian/rules` body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_rules: Option<String>,
    pub changelog: Vec<ChangelogEntry>,
    pub copyright: CopyrightInfo,
}

/// One `[[source.changelog]]` entry. Entries are rendered in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChangelogEntry {
    pub version: String,
    pub distribution: Vec<String>,
    pub urgency: String,
    pub changes: Vec<String>,
    pub changed_by: String,
    pub date: String,
}

/// Machine-readable copyright header (`[source.copyright]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopyrightInfo {
    pub format: String,
    pub source: String,
    pub upstream_name: String,
    pub upstream_contact: String,
    pub files: Vec<CopyrightFileStanza>,
}

/// A `Files` paragraph of `debian/copyright`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopyrightFileStanza {
    pub files: String,
    pub copyright: Vec<String>,
    pub license: String,
}

/// A binary package built from the source (`[[packages]]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BinaryPackage {
    pub name: String,
    pub arch: String,
    pub section: String,
    pub priority: String,
    pub description: String,
}

/// Where the body of `debian/rules` comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesSource<'a> {
    /// Plain debhelper sequencer
    Default,
    /// `source.rules` names a rules script
    Named(&'a str),
    /// `source.raw_rules` carries the script body
    Raw(&'a str),
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl SourceInfo {
    /// Selects the rules variant. `rules` and `raw_rules` are mutually
    /// exclusive; blank values count as unset.
    pub fn rules_source(&self) -> Result<RulesSource<'_>, ValidationError> {
        match (non_blank(&self.rules), non_blank(&self.raw_rules)) {
            (Some(_), Some(_)) => Err(ValidationError::ConflictingRules),
            (Some(name), None) => Ok(RulesSource::Named(name)),
            (None, Some(raw)) => Ok(RulesSource::Raw(raw)),
            (None, None) => Ok(RulesSource::Default),
        }
    }
}
