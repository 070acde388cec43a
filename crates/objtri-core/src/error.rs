use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjTriError {
    #[error("Source file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Not valid UTF-8 text: {}", path.display())]
    InvalidText { path: PathBuf },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ObjTriError {
    /// Classify a failure while reading the source file.
    pub fn reading(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::SourceNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            io::ErrorKind::InvalidData => Self::InvalidText { path },
            _ => Self::Io { path, source },
        }
    }

    /// Classify a failure while creating or writing the target file.
    ///
    /// A missing parent directory is reported as plain I/O, never as
    /// `SourceNotFound`.
    pub fn writing(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Path the failing operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            Self::SourceNotFound { path }
            | Self::PermissionDenied { path, .. }
            | Self::InvalidText { path }
            | Self::Io { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, ObjTriError>;
