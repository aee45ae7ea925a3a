//! Projections of a validated descriptor onto the `debian/` files.
//!
//! Each function builds the template context for one file from the part of
//! the descriptor it needs and renders it. None of them touch the filesystem.

use log::warn;
use serde_json::json;
use std::fmt;

use crate::config::{CopyrightInfo, PackagingDescriptor, RulesSource, SourceInfo};
use crate::error::Result;
use crate::renderer::TemplateRenderer;

/// The files written into `debian/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebianFile {
    Control,
    Rules,
    Changelog,
    Copyright,
}

impl DebianFile {
    /// Order in which `create` writes the files.
    pub const ALL: [DebianFile; 4] = [
        DebianFile::Control,
        DebianFile::Rules,
        DebianFile::Changelog,
        DebianFile::Copyright,
    ];

    /// File name inside `debian/`, also the name of its embedded template.
    pub fn file_name(self) -> &'static str {
        match self {
            DebianFile::Control => "control",
            DebianFile::Rules => "rules",
            DebianFile::Changelog => "changelog",
            DebianFile::Copyright => "copyright",
        }
    }

    /// Renders this file's content from the descriptor.
    pub fn render(
        self,
        engine: &dyn TemplateRenderer,
        descriptor: &PackagingDescriptor,
    ) -> Result<String> {
        match self {
            DebianFile::Control => render_control(engine, descriptor),
            DebianFile::Rules => render_rules(engine, &descriptor.source),
            DebianFile::Changelog => render_changelog(engine, &descriptor.source),
            DebianFile::Copyright => render_copyright(engine, &descriptor.source.copyright),
        }
    }
}

impl fmt::Display for DebianFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "debian/{}", self.file_name())
    }
}

/// Renders `debian/control`: the source stanza followed by one stanza per
/// binary package, in list order.
pub fn render_control(
    engine: &dyn TemplateRenderer,
    descriptor: &PackagingDescriptor,
) -> Result<String> {
    let source = &descriptor.source;
    let context = json!({
        "source": {
            "name": source.name,
            "section": source.section,
            "priority": source.priority,
            "maintainer": source.maintainer,
            "standards_version": source.standards_version,
        },
        "packages": descriptor.packages,
    });
    engine.render(DebianFile::Control.file_name(), &context)
}

/// Renders `debian/rules`.
///
/// A named rules reference has no content of its own to emit yet, so it
/// falls back to the debhelper default.
pub fn render_rules(engine: &dyn TemplateRenderer, source: &SourceInfo) -> Result<String> {
    let raw_rules = match source.rules_source()? {
        RulesSource::Default => None,
        RulesSource::Named(name) => {
            warn!("Rules reference '{name}' is not supported, writing the default rules");
            None
        }
        RulesSource::Raw(raw) => Some(raw.trim_end_matches(['\n', '\r'])),
    };
    engine.render(DebianFile::Rules.file_name(), &json!({ "raw_rules": raw_rules }))
}

/// Renders `debian/changelog`. Entries are emitted as given; callers keep
/// them newest first.
pub fn render_changelog(engine: &dyn TemplateRenderer, source: &SourceInfo) -> Result<String> {
    let context = json!({
        "package": source.name,
        "entries": source.changelog,
    });
    engine.render(DebianFile::Changelog.file_name(), &context)
}

/// Renders the machine-readable `debian/copyright`.
pub fn render_copyright(
    engine: &dyn TemplateRenderer,
    copyright: &CopyrightInfo,
) -> Result<String> {
    engine.render(DebianFile::Copyright.file_name(), &json!(copyright))
}
