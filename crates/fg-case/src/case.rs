//! Case directory layout and lifecycle.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fg_dict::FoamHeader;

use crate::error::{CaseError, CaseResult};

/// A filesystem location holding all configuration for one solver run.
///
/// The layout is fixed: `0/` for initial/boundary-condition fields,
/// `constant/` for physical properties (with `constant/triSurface/` for
/// surface geometry inputs), and `system/` for run and mesh control files.
/// Nothing reads a case back into memory; writers only mutate it.
#[derive(Debug, Clone)]
pub struct Case {
    root: PathBuf,
}

impl Case {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn zero_dir(&self) -> PathBuf {
        self.root.join("0")
    }

    pub fn constant_dir(&self) -> PathBuf {
        self.root.join("constant")
    }

    pub fn system_dir(&self) -> PathBuf {
        self.root.join("system")
    }

    pub fn tri_surface_dir(&self) -> PathBuf {
        self.constant_dir().join("triSurface")
    }

    /// Create the case layout. `constant/` and `system/` are created
    /// idempotently; a pre-existing time-zero directory is an error.
    pub fn init(&self) -> CaseResult<()> {
        fs::create_dir_all(self.constant_dir())?;
        fs::create_dir_all(self.system_dir())?;
        match fs::create_dir(self.zero_dir()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(CaseError::AlreadyInitialized {
                path: self.zero_dir(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Idempotently create the full layout, including `constant/triSurface/`.
    pub fn ensure_layout(&self) -> CaseResult<()> {
        fs::create_dir_all(self.constant_dir())?;
        fs::create_dir_all(self.system_dir())?;
        fs::create_dir_all(self.zero_dir())?;
        fs::create_dir_all(self.tri_surface_dir())?;
        Ok(())
    }

    /// Delete the whole case tree. Succeeds when the tree is already absent.
    pub fn remove(&self) -> CaseResult<()> {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Copy a surface-geometry file into `constant/triSurface/`, creating
    /// that directory if needed. Returns the destination path.
    pub fn import_surface(&self, surface: &Path) -> CaseResult<PathBuf> {
        let file_name = surface
            .file_name()
            .filter(|_| surface.is_file())
            .ok_or_else(|| CaseError::SurfaceNotFound {
                path: surface.to_path_buf(),
            })?;
        fs::create_dir_all(self.tri_surface_dir())?;
        let dest = self.tri_surface_dir().join(file_name);
        fs::copy(surface, &dest)?;
        Ok(dest)
    }

    /// Write one dictionary file: header block followed by the assembled
    /// body, in a single open/write/close. Bodies are built fully in memory
    /// first, so a failed precondition never leaves a partial file behind.
    pub fn write_dict(
        &self,
        relative: impl AsRef<Path>,
        header: &FoamHeader,
        body: &str,
    ) -> CaseResult<()> {
        let mut content = header.render();
        content.push_str(body);
        fs::write(self.root.join(relative.as_ref()), content)?;
        Ok(())
    }
}
