use crate::error::{Result, StoreError};
use std::fs::{self, Metadata};
use std::path::Path;
use tracing::debug;

pub fn ensure_file(path: &Path) -> Result<Metadata> {
    let metadata = fs::metadata(path).map_err(|err| StoreError::from_io(path, err))?;
    if !metadata.is_file() {
        return Err(StoreError::NotAFile(path.to_path_buf()));
    }
    Ok(metadata)
}

/// Checks that the directory a file will be written into exists. An empty
/// parent means the current directory.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let metadata = fs::metadata(parent).map_err(|err| StoreError::from_io(parent, err))?;
    if !metadata.is_dir() {
        return Err(StoreError::NotADirectory(parent.to_path_buf()));
    }
    Ok(())
}

/// Removes a previous output file. A missing file is not an error.
pub fn remove_file_if_exists(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_dir() => Err(StoreError::NotAFile(path.to_path_buf())),
        Ok(_) => {
            fs::remove_file(path).map_err(|err| StoreError::from_io(path, err))?;
            debug!(path = %path.display(), "previous output removed");
            Ok(())
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(StoreError::from_io(path, err)),
    }
}
