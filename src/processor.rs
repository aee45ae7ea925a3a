//! Orchestration of the `create` command.
//! Loads the descriptor, creates `debian/` and writes the generated files.

use log::info;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::parser::parse_file;
use crate::render::DebianFile;
use crate::renderer::TemplateRenderer;
use crate::scaffold::DebianDir;

/// Generates a `debian/` directory under `output_dir` from a descriptor file.
///
/// # Arguments
/// * `engine` - Template engine used for every file
/// * `descriptor_path` - Path of `debian.toml`
/// * `output_dir` - Existing directory the `debian/` tree is created in
///
/// # Returns
/// * `Result<PathBuf>` - Path of the created `debian/` directory
///
/// # Flow
/// 1. Parses and validates the descriptor
/// 2. Creates the `debian/` directory
/// 3. Writes control, rules, changelog and copyright, in that order
///
/// The first failure aborts the run. Files written before it stay on disk.
pub fn create_debian_dir<P: AsRef<Path>, Q: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    descriptor_path: P,
    output_dir: Q,
) -> Result<PathBuf> {
    let descriptor = parse_file(descriptor_path)?;
    let debian_dir = DebianDir::create(output_dir, &descriptor)?;

    for file in DebianFile::ALL {
        debian_dir.write(engine, file)?;
        info!("Generated {file}");
    }

    Ok(debian_dir.path().to_path_buf())
}
