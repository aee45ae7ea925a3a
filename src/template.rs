//! Descriptor template written by `debber new`.

use log::debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::config::{
    BinaryPackage, ChangelogEntry, CopyrightFileStanza, CopyrightInfo, PackagingDescriptor,
};
use crate::constants::{COPYRIGHT_FORMAT, GENERATED_HEADER};
use crate::error::{exists_or_io, Error, Result};

impl PackagingDescriptor {
    /// A descriptor with every field a user has to fill in.
    ///
    /// Source and package fields are left empty, the copyright section is
    /// pre-filled with placeholders for upstream and for `debian/*`.
    pub fn template() -> Self {
        let mut descriptor = PackagingDescriptor::default();
        descriptor.source.changelog.push(ChangelogEntry::default());
        descriptor.source.copyright = CopyrightInfo {
            format: COPYRIGHT_FORMAT.to_string(),
            source: "<url://example.com>".to_string(),
            upstream_name: "<project-name>".to_string(),
            upstream_contact: "<preferred name and address to reach the upstream project>"
                .to_string(),
            files: vec![
                CopyrightFileStanza {
                    files: "*".to_string(),
                    copyright: vec!["<years> <author's name here>".to_string()],
                    license: "<license name here>".to_string(),
                },
                CopyrightFileStanza {
                    files: "debian/*".to_string(),
                    copyright: vec!["<years> <author's name here>".to_string()],
                    license: "GPL-2+".to_string(),
                },
            ],
        };
        descriptor.packages.push(BinaryPackage::default());
        descriptor
    }
}

/// Serializes the descriptor template as TOML, headed by a generated-by comment.
pub fn render_descriptor_template() -> Result<String> {
    let body = toml::to_string(&PackagingDescriptor::template())
        .map_err(|e| Error::TemplateError(e.to_string()))?;
    Ok(format!("{GENERATED_HEADER}\n{body}"))
}

/// Writes a new descriptor template to `path`.
///
/// # Errors
/// * `Error::AlreadyExists` if `path` exists; the existing file is not touched
/// * `Error::IoError` if the file cannot be created or written
pub fn write_descriptor_template<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let content = render_descriptor_template()?;

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| exists_or_io(e, path))?;
    file.write_all(content.as_bytes())?;

    debug!("Wrote descriptor template to {}", path.display());
    Ok(())
}
