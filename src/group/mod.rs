//! Extension derivation and grouping.
//!
//! Files are partitioned by their extension key. Groups keep the order in
//! which each key was first seen, and each group keeps its files in first
//! insertion order with duplicate paths collapsed. Paths are compared as
//! paths, never as display strings, so names that are not valid UTF-8 stay
//! distinct.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};


/// Derives the extension key for a file path.
///
/// The key is the suffix of the file name starting at its last `.`, dot
/// included. Only the file name is inspected, never the parent directories.
/// A name without a dot, or whose last dot is also its last character, has
/// the empty key. A dotfile with no further dot is keyed by its whole name.
///
/// # Examples
///
/// ```
/// use extension_count::group::extension_key;
///
/// assert_eq!(extension_key("src/report.tar.gz"), ".gz");
/// assert_eq!(extension_key("README"), "");
/// assert_eq!(extension_key(".gitignore"), ".gitignore");
/// assert_eq!(extension_key("v1.2/Makefile"), "");
/// ```
pub fn extension_key<P: AsRef<Path>>(path: P) -> String {
    let Some(name) = path.as_ref().file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();

    match name.rfind('.') {
        Some(index) if index + 1 < name.len() => name[index..].to_string(),
        _ => String::new(),
    }
}

/// Files sharing one extension key, unique and in insertion order.
#[derive(Debug, Default, Clone)]
struct FileSet {
    files: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl FileSet {
    fn insert(&mut self, file: PathBuf) -> bool {
        if self.seen.contains(&file) {
            return false;
        }
        self.seen.insert(file.clone());
        self.files.push(file);
        true
    }
}

/// Files grouped by extension key.
///
/// Iteration yields groups in the order their key was first inserted.
#[derive(Debug, Default, Clone)]
pub struct ExtensionGroups {
    order: Vec<String>,
    groups: HashMap<String, FileSet>,
}

impl ExtensionGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file under its extension key.
    ///
    /// Returns `false` if the exact path was already present.
    pub fn insert<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let path = path.as_ref();
        let key = extension_key(path);
        let file = path.to_path_buf();

        if let Some(set) = self.groups.get_mut(&key) {
            return set.insert(file);
        }

        let mut set = FileSet::default();
        set.insert(file);
        self.order.push(key.clone());
        self.groups.insert(key, set);
        true
    }

    /// Number of distinct extension keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Files recorded under `extension`, if any.
    pub fn get(&self, extension: &str) -> Option<&[PathBuf]> {
        self.groups.get(extension).map(|set| set.files.as_slice())
    }

    /// Extension keys in first-seen order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Groups as `(extension, files)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.order.iter().filter_map(|key| {
            self.groups
                .get(key)
                .map(|set| (key.as_str(), set.files.as_slice()))
        })
    }

    /// Total number of unique files across all groups.
    pub fn file_count(&self) -> usize {
        self.groups.values().map(|set| set.files.len()).sum()
    }

    /// Consumes the groups, yielding owned `(extension, files)` pairs in
    /// first-seen order.
    pub fn into_groups(mut self) -> Vec<(String, Vec<PathBuf>)> {
        self.order
            .into_iter()
            .filter_map(|key| self.groups.remove(&key).map(|set| (key, set.files)))
            .collect()
    }
}

/// Groups a sequence of file paths by extension key.
pub fn group_by_extension<I, P>(files: I) -> ExtensionGroups
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut groups = ExtensionGroups::new();
    for file in files {
        groups.insert(file);
    }
    groups
}
