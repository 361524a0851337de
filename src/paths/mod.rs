//! Path display helpers.

use std::path::{Path, PathBuf};

/// Returns `path` relative to `root` when it lies beneath it.
///
/// Paths outside `root` are returned unchanged. Only whole components are
/// matched, so `/data/logs2/a` is not considered to be under `/data/logs`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use extension_count::paths::relative_to;
///
/// let file = Path::new("./src/report/mod.rs");
/// assert_eq!(relative_to(file, "./src"), PathBuf::from("report/mod.rs"));
/// assert_eq!(relative_to(file, "/tmp"), PathBuf::from("./src/report/mod.rs"));
/// ```
pub fn relative_to<P: AsRef<Path>, R: AsRef<Path>>(path: P, root: R) -> PathBuf {
    let path = path.as_ref();
    path.strip_prefix(root.as_ref())
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Formats a file path for a report, optionally relative to `root`.
pub fn display_path(path: &Path, root: Option<&Path>) -> String {
    match root {
        Some(root) => relative_to(path, root).display().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests;
