//! Descriptor loading.
//! Reads `debian.toml`, decodes it into a [`PackagingDescriptor`] and runs the
//! validator. Callers only ever see a fully validated descriptor.

use log::debug;
use std::path::Path;

use crate::config::PackagingDescriptor;
use crate::error::{Error, Result};
use crate::validation::validate;

/// Decodes and validates descriptor text.
///
/// # Arguments
/// * `content` - Raw TOML content
/// * `origin` - Name used in decode diagnostics, usually the file path
///
/// # Errors
/// * `Error::DecodeError` if the TOML is malformed or does not match the schema
/// * `Error::ValidationError` if a field rule is violated
pub fn parse_str(content: &str, origin: &str) -> Result<PackagingDescriptor> {
    let descriptor: PackagingDescriptor =
        toml::from_str(content).map_err(|e| Error::DecodeError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;

    validate(&descriptor)?;
    debug!(
        "Descriptor '{}' is valid: {} changelog entries, {} packages",
        origin,
        descriptor.source.changelog.len(),
        descriptor.packages.len()
    );
    Ok(descriptor)
}

/// Reads a descriptor file from disk, then decodes and validates it.
///
/// # Errors
/// * `Error::ReadError` if the file cannot be read
/// * everything [`parse_str`] returns
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<PackagingDescriptor> {
    let path = path.as_ref();
    debug!("Loading descriptor from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| Error::ReadError {
        path: path.display().to_string(),
        source,
    })?;

    parse_str(&content, &path.display().to_string())
}
