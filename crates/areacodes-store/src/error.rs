use areacodes_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("file or directory not found: {0}")]
    NotFound(PathBuf),
    #[error("not a file: {0}")]
    NotAFile(PathBuf),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("no access to: {0}")]
    NoAccess(PathBuf),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Core,
    NotFound,
    NotAFile,
    NotADirectory,
    NoAccess,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Core(_) => StoreErrorKind::Core,
            StoreError::NotFound(_) => StoreErrorKind::NotFound,
            StoreError::NotAFile(_) => StoreErrorKind::NotAFile,
            StoreError::NotADirectory(_) => StoreErrorKind::NotADirectory,
            StoreError::NoAccess(_) => StoreErrorKind::NoAccess,
        }
    }

    /// Maps an io error raised while touching `path` to the matching variant.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => StoreError::NoAccess(path.to_path_buf()),
            _ => StoreError::Io(err),
        }
    }
}
