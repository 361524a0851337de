//! Recursive file collection.
//!
//! Lists every non-directory entry beneath a root directory in depth-first,
//! pre-order traversal. Entries are yielded in the order the operating system
//! returns them from a directory read ("listing order"); no sorting is applied,
//! so the order can differ between filesystems and platforms.

use ignore::{Walk, WalkBuilder};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ScanError;
use crate::telemetry::{LogMessage, log_with_context};


/// Builds a walker that visits everything beneath `root`.
///
/// All of the `ignore` crate's filters are switched off: hidden files,
/// `.gitignore`, `.ignore` and global excludes are all reported. Symbolic
/// links are not followed, so a link is reported as a leaf entry.
fn build_walk(root: &Path) -> Walk {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.follow_links(false);
    builder.build()
}

/// Collects the paths of every file under `root`.
///
/// Each returned path is `root` joined with the entry names leading to the
/// file. Directories are descended into, everything else (regular files,
/// symlinks, pipes, sockets) is returned as a file.
///
/// # Arguments
///
/// * `root` - The directory to walk
///
/// # Returns
///
/// Every file path below `root` in depth-first, pre-order listing order.
/// The root itself is never included.
///
/// # Errors
///
/// Returns [`ScanError::Filesystem`] if `root` is missing or unreadable, or if
/// any subdirectory cannot be listed, and [`ScanError::NotADirectory`] if
/// `root` is not a directory. A failure is never turned into an empty result.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let metadata = fs::metadata(root).map_err(|err| ScanError::filesystem(root, err))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for result in build_walk(root) {
        let entry = result.map_err(|err| walk_error(root, err))?;

        // The root itself is reported at depth 0
        if entry.depth() == 0 {
            continue;
        }

        let is_dir = entry.file_type().is_some_and(|file_type| file_type.is_dir());
        if !is_dir {
            files.push(entry.into_path());
        }
    }

    log_with_context(
        log::Level::Debug,
        LogMessage {
            message: "Collected files".to_string(),
            module: "collect",
            context: Some(vec![
                ("root", root.display().to_string()),
                ("files", files.len().to_string()),
            ]),
        },
    );

    Ok(files)
}

/// Converts a walker error into a [`ScanError`] carrying the failing path.
///
/// The underlying `io::Error` is kept as the source when the walker has one;
/// any other walker error is wrapped whole.
fn walk_error(root: &Path, err: ignore::Error) -> ScanError {
    let path = error_path(&err).unwrap_or_else(|| root.to_path_buf());
    let source = if err.io_error().is_some() {
        err.into_io_error().unwrap_or_else(|| io::Error::other("walk failed"))
    } else {
        io::Error::other(err)
    };
    ScanError::filesystem(path, source)
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        _ => None,
    }
}
