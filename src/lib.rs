//! # Extension Count
//!
//! Extension Count is a library for summarising the file types inside one or
//! more directories.
//!
//! ## Features
//!
//! * File collection - Recursively list every file under a root directory
//! * Extension grouping - Partition files by extension in first-seen order
//! * Reports - One report per requested folder, ready for presentation

/// Recursive file collection
pub mod collect;
/// Error types shared by the scanning operations
pub mod error;
/// Extension derivation and grouping
pub mod group;
/// Optional human readable labels for extensions
pub mod labels;
/// Path display helpers
pub mod paths;
/// Per-folder report construction
pub mod report;
/// Text rendering of file lists and report tables
pub mod render;
/// Logging setup
pub mod telemetry;

pub use error::ScanError;
pub use report::{FileReportRow, FolderReport, ReportOptions, build_report, build_reports};
pub use render::render_file_list;
