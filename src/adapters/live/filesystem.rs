//! Live filesystem adapter using `std::fs`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::ports::filesystem::FileSystem;

/// Filesystem adapter backed by real disk I/O.
pub struct DiskFileSystem;

/// Sibling path the contents are staged in before the rename.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map_or_else(OsString::new, OsString::from);
    name.push(".tmp");
    path.with_file_name(name)
}

impl FileSystem for DiskFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let staging = staging_path(path);
        if let Err(e) = std::fs::write(&staging, contents) {
            let _ = std::fs::remove_file(&staging);
            return Err(e.into());
        }
        if let Err(e) = std::fs::rename(&staging, path) {
            let _ = std::fs::remove_file(&staging);
            return Err(e.into());
        }
        Ok(())
    }
}
