//! Per-folder report construction.
//!
//! A report is built by collecting every file under a folder and grouping the
//! result by extension key. Reports are plain data; formatting is left to the
//! caller.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::collect::collect_files;
use crate::error::ScanError;
use crate::group::group_by_extension;
use crate::labels::Labels;
use crate::paths::display_path;
use crate::telemetry::{LogMessage, log_with_context};


/// Configuration options for report construction.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Labels attached to rows whose extension has an entry.
    pub labels: Labels,

    /// Whether file paths are reported relative to the scanned folder.
    ///
    /// When `false` (default), each path is the folder as supplied joined
    /// with the entry names below it, e.g. `./src/lib.rs` for `./src`.
    /// When `true`, the folder prefix is removed, giving `lib.rs`.
    pub relative_paths: bool,
}

/// One extension group within a folder.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileReportRow {
    /// Extension key, including the leading dot, or empty for none
    pub extension: String,

    /// Human readable label for the extension, if configured
    pub label: Option<String>,

    /// Number of files in the group, always `files.len()`
    pub count: usize,

    /// Files in discovery order
    pub files: Vec<String>,
}

impl FileReportRow {
    pub fn new(extension: String, files: Vec<String>) -> Self {
        Self {
            extension,
            label: None,
            count: files.len(),
            files,
        }
    }

    /// The label when present, otherwise the extension key.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.extension)
    }
}

/// Extension summary for one scanned folder.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FolderReport {
    /// The folder exactly as requested by the caller
    pub title: String,

    /// Number of files across all rows
    pub total_files: usize,

    /// One row per extension, in first-discovery order
    pub rows: Vec<FileReportRow>,
}

/// Builds the report for a single folder.
///
/// # Arguments
///
/// * `folder` - The folder to scan, used verbatim as the report title
/// * `options` - Labels and path display settings
///
/// # Returns
///
/// A [`FolderReport`] with one row per extension key in first-discovery
/// order. `total_files` counts distinct paths, so two names that differ only
/// in bytes that are not valid UTF-8 are counted separately.
///
/// # Errors
///
/// Returns a [`ScanError`] if the folder, or any directory below it, cannot
/// be read.
pub fn build_report<P: AsRef<Path>>(
    folder: P,
    options: &ReportOptions,
) -> Result<FolderReport, ScanError> {
    let folder = folder.as_ref();
    let files = collect_files(folder)?;

    let root = options.relative_paths.then_some(folder);
    let groups = group_by_extension(files);
    let total_files = groups.file_count();

    // Paths only become text once grouping is done
    let rows: Vec<FileReportRow> = groups
        .into_groups()
        .into_iter()
        .map(|(extension, files)| {
            let files = files.iter().map(|file| display_path(file, root)).collect();
            let mut row = FileReportRow::new(extension, files);
            row.label = options.labels.label_for(&row.extension).map(str::to_string);
            row
        })
        .collect();

    log_with_context(
        log::Level::Info,
        LogMessage {
            message: "Built folder report".to_string(),
            module: "report",
            context: Some(vec![
                ("folder", folder.display().to_string()),
                ("files", total_files.to_string()),
                ("extensions", rows.len().to_string()),
            ]),
        },
    );

    Ok(FolderReport {
        title: folder.display().to_string(),
        total_files,
        rows,
    })
}

/// Builds one report per folder, in the order given.
///
/// Folders are not deduplicated; a folder listed twice yields two reports.
///
/// # Errors
///
/// Stops at, and returns, the first folder that cannot be scanned. Callers
/// that want to continue past failures should call [`build_report`] per
/// folder instead.
pub fn build_reports<I, P>(
    folders: I,
    options: &ReportOptions,
) -> Result<Vec<FolderReport>, ScanError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    folders
        .into_iter()
        .map(|folder| build_report(folder, options))
        .collect()
}
