#![allow(dead_code)]

use anyhow::Result;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throw-away directory tree removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Creates an empty tree
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Creates a tree holding the given files, relative to the root
    pub fn with_files(files: &[&str]) -> Result<Self> {
        let tree = Self::new()?;
        for file in files {
            tree.add_file(file)?;
        }
        Ok(tree)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Writes a file, creating parent directories as needed
    pub fn add_file(&self, relative: &str) -> Result<PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = File::create(&path)?;
        writeln!(file, "contents of {}", relative)?;
        Ok(path)
    }

    pub fn add_dir(&self, relative: &str) -> Result<PathBuf> {
        let path = self.path(relative);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Every file beneath the root, listed independently of the crate
    pub fn list_files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        let mut pending = vec![self.root().to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let entry = entry?;
                if entry.file_type()?.is_dir() {
                    pending.push(entry.path());
                } else {
                    files.push(entry.path().display().to_string());
                }
            }
        }
        files.sort();
        Ok(files)
    }
}
