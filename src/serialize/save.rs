use std::{
    fs::{File, OpenOptions},
    io::BufWriter,
    path::Path,
};

use crate::{
    foundation::error::{PhanimError, PhanimResult},
    scene::model::Scene,
    serialize::writer::write_scene,
};

/// Output path used when a caller has no better name for the file.
pub const DEFAULT_OUTPUT_PATH: &str = "intro.phanim";

/// Conventional extension of scene files.
pub const FILE_EXTENSION: &str = "phanim";

/// Options for [`save_with`]. The defaults give plain [`save`] behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaveOptions {
    /// Truncate an existing file. When `false`, an existing file is an
    /// [`std::io::ErrorKind::AlreadyExists`] error and is left untouched.
    pub overwrite: bool,
    /// Create missing parent directories before opening the file.
    pub create_parent_dirs: bool,
    /// `fsync` the file after the last write.
    pub sync: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            overwrite: true,
            create_parent_dirs: false,
            sync: false,
        }
    }
}

/// Write `scene` to `path`, truncating any existing file.
///
/// I/O failures are returned as [`PhanimError::Io`] carrying the original error. A failed
/// write may leave a truncated file behind.
pub fn save(scene: &Scene, path: impl AsRef<Path>) -> PhanimResult<()> {
    save_with(scene, path, &SaveOptions::default())
}

/// Write `scene` to `path` using `opts`.
pub fn save_with(scene: &Scene, path: impl AsRef<Path>, opts: &SaveOptions) -> PhanimResult<()> {
    let path = path.as_ref();
    save_impl(scene, path, opts).inspect_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "failed to save scene");
    })
}

#[tracing::instrument(skip_all, fields(path = %path.display(), objects = scene.len()))]
fn save_impl(scene: &Scene, path: &Path, opts: &SaveOptions) -> PhanimResult<()> {
    if opts.create_parent_dirs {
        ensure_parent_dir(path)?;
    }

    let file = open_output(path, opts.overwrite)?;
    let mut out = BufWriter::new(file);
    write_scene(scene, &mut out)?;
    let file = out.into_inner().map_err(|e| e.into_error())?;
    if opts.sync {
        file.sync_all()?;
    }

    tracing::debug!(
        bytes = file.metadata().map(|m| m.len()).unwrap_or_default(),
        "saved scene"
    );
    Ok(())
}

fn open_output(path: &Path, overwrite: bool) -> std::io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.write(true);
    if overwrite {
        opts.create(true).truncate(true);
    } else {
        opts.create_new(true);
    }
    opts.open(path)
}

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> PhanimResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))
            .map_err(PhanimError::Other)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/save.rs"]
mod tests;
