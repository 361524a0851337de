use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while scanning a folder.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The path could not be read: it is missing, unreadable, or a
    /// subdirectory failed to list during traversal.
    #[error("{}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The requested root exists but is not a directory.
    #[error("{}: not a directory", .0.display())]
    NotADirectory(PathBuf),
}

impl ScanError {
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// The path that caused the failure.
    pub fn path(&self) -> &Path {
        match self {
            Self::Filesystem { path, .. } => path,
            Self::NotADirectory(path) => path,
        }
    }
}
