//! Creation of the `debian/` directory and the files inside it.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::PackagingDescriptor;
use crate::constants::DEBIAN_DIR;
use crate::error::{exists_or_io, Result};
use crate::render::DebianFile;
use crate::renderer::TemplateRenderer;

/// A freshly created `debian/` directory bound to the descriptor it is
/// generated from.
#[derive(Debug)]
pub struct DebianDir<'a> {
    path: PathBuf,
    descriptor: &'a PackagingDescriptor,
}

impl<'a> DebianDir<'a> {
    /// Creates `<base_dir>/debian` with mode 0755.
    ///
    /// # Errors
    /// * `Error::AlreadyExists` if the directory is already there; it is left untouched
    /// * `Error::IoError` for any other failure, including a missing `base_dir`
    pub fn create<P: AsRef<Path>>(
        base_dir: P,
        descriptor: &'a PackagingDescriptor,
    ) -> Result<Self> {
        let path = base_dir.as_ref().join(DEBIAN_DIR);

        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder.create(&path).map_err(|e| exists_or_io(e, &path))?;

        debug!("Created {}", path.display());
        Ok(Self { path, descriptor })
    }

    /// Path of the created directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders one file and writes it into the directory, returning its path.
    /// `debian/rules` is made executable.
    pub fn write(&self, engine: &dyn TemplateRenderer, file: DebianFile) -> Result<PathBuf> {
        let content = file.render(engine, self.descriptor)?;
        let target = self.path.join(file.file_name());
        fs::write(&target, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if file == DebianFile::Rules {
                fs::set_permissions(&target, fs::Permissions::from_mode(0o755))?;
            }
        }

        debug!("Wrote {}", target.display());
        Ok(target)
    }
}
