//! Text rendering of file lists and report tables.
//!
//! Nothing here touches the filesystem; every function formats data that was
//! already collected into a [`FolderReport`].

use std::cmp::Ordering;

use crate::report::{FileReportRow, FolderReport};


/// File list limit used when a caller does not pick one, as command-line text.
pub const DEFAULT_LIST_LIMIT_ARG: &str = "10";

/// File list limit used when a caller does not pick one.
pub const DEFAULT_LIST_LIMIT: usize = match usize::from_str_radix(DEFAULT_LIST_LIMIT_ARG, 10) {
    Ok(limit) => limit,
    Err(_) => panic!("DEFAULT_LIST_LIMIT_ARG must be a number"),
};

const HEADER: [&str; 3] = ["Extension", "File Count", "Files"];

/// Joins file paths with newlines, truncating after `limit` entries.
///
/// With `limit` set and more files than the limit, the first `limit` paths
/// are followed by a `"<N> more files"` line. `None` lists every file.
///
/// # Arguments
///
/// * `files` - Paths in the order they should be listed
/// * `limit` - Maximum number of paths to show, `None` for all of them
///
/// # Returns
///
/// The listed paths joined with `\n`, without a trailing newline. An empty
/// slice gives an empty string.
///
/// # Examples
///
/// ```
/// use extension_count::render_file_list;
///
/// let files = ["a", "b", "c", "d"].map(String::from);
/// assert_eq!(render_file_list(&files, Some(2)), "a\nb\n2 more files");
/// assert_eq!(render_file_list(&files[..2], Some(2)), "a\nb");
/// assert_eq!(render_file_list(&files[..3], None), "a\nb\nc");
/// ```
pub fn render_file_list<S: AsRef<str>>(files: &[S], limit: Option<usize>) -> String {
    let shown = match limit {
        Some(limit) if files.len() > limit => limit,
        _ => files.len(),
    };

    let mut lines: Vec<String> = files[..shown]
        .iter()
        .map(|file| file.as_ref().to_string())
        .collect();
    if shown < files.len() {
        lines.push(format!("{} more files", files.len() - shown));
    }

    lines.join("\n")
}

/// Presentation order for report rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep the order in which extensions were first discovered
    #[default]
    Discovery,
    /// Most files first, ties broken by extension
    Count,
    /// Extension ascending, ties broken by most files
    Extension,
    /// Longest file list first, ties broken by extension. Orders the same
    /// as `Count` for reports built by this crate, where the two always agree
    Files,
}

/// Reorders rows for display.
pub fn sort_rows(rows: &mut [FileReportRow], key: SortKey, reverse: bool) {
    rows.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Discovery => Ordering::Equal,
            SortKey::Count => b
                .count
                .cmp(&a.count)
                .then_with(|| a.extension.cmp(&b.extension)),
            SortKey::Extension => a
                .extension
                .cmp(&b.extension)
                .then_with(|| b.count.cmp(&a.count)),
            SortKey::Files => b
                .files
                .len()
                .cmp(&a.files.len())
                .then_with(|| a.extension.cmp(&b.extension)),
        };
        if reverse { ordering.reverse() } else { ordering }
    });

    // A stable sort with every pair equal leaves the slice untouched
    if reverse && key == SortKey::Discovery {
        rows.reverse();
    }
}

/// ANSI styling, switched off for plain output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint("33", text)
    }

    pub fn blue(&self, text: &str) -> String {
        self.paint("34", text)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint("1", text)
    }

    pub fn bold_blue(&self, text: &str) -> String {
        self.paint("1;34", text)
    }
}

/// Options controlling how a report is turned into a table.
#[derive(Debug, Clone, Copy)]
pub struct TableOptions {
    pub style: Style,
    /// Maximum files listed per row, `None` for all of them
    pub limit: Option<usize>,
    pub sort: SortKey,
    pub reverse: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            style: Style::new(true),
            limit: None,
            sort: SortKey::Discovery,
            reverse: false,
        }
    }
}

/// Renders one report as a titled, bordered table.
///
/// Each row shows the extension (or its label), the file count, and the
/// file list produced by [`render_file_list`], one path per line.
pub fn render_report(report: &FolderReport, options: &TableOptions) -> String {
    let style = options.style;
    let mut out = format!("Results for: {}\n", style.yellow(&report.title));
    out.push_str(&format!(
        "Total files: {}\n\n",
        style.bold(&report.total_files.to_string())
    ));

    if report.rows.is_empty() {
        out.push_str("No files found.\n");
        return out;
    }

    let mut rows = report.rows.clone();
    sort_rows(&mut rows, options.sort, options.reverse);

    let cells: Vec<[Vec<String>; 3]> = rows
        .iter()
        .map(|row| {
            [
                vec![row.display_name().to_string()],
                vec![row.count.to_string()],
                render_file_list(&row.files, options.limit)
                    .lines()
                    .map(str::to_string)
                    .collect(),
            ]
        })
        .collect();

    let mut widths = HEADER.map(str::len);
    for row in &cells {
        for (width, column) in widths.iter_mut().zip(row) {
            let longest = column.iter().map(|line| line.chars().count()).max();
            *width = (*width).max(longest.unwrap_or(0));
        }
    }

    let border = border_line(&widths);
    out.push_str(&border);
    out.push_str(&table_line(&widths, HEADER, |_, text| style.bold(text)));
    out.push_str(&border);

    for row in &cells {
        let height = row.iter().map(Vec::len).max().unwrap_or(1).max(1);
        for index in 0..height {
            let line = |column: usize| row[column].get(index).map_or("", String::as_str);
            out.push_str(&table_line(
                &widths,
                [line(0), line(1), line(2)],
                |column, text| match column {
                    0 => style.blue(text),
                    1 => style.bold_blue(text),
                    _ => text.to_string(),
                },
            ));
        }
        out.push_str(&border);
    }

    out
}

fn border_line(widths: &[usize; 3]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

/// Formats one physical table line. Padding is applied before styling so
/// escape codes never count towards column width.
fn table_line<F>(widths: &[usize; 3], texts: [&str; 3], paint: F) -> String
where
    F: Fn(usize, &str) -> String,
{
    let mut line = String::from("|");
    for (column, (text, width)) in texts.iter().zip(widths).enumerate() {
        let padding = width.saturating_sub(text.chars().count());
        let padded = if column == 1 {
            format!("{}{}", " ".repeat(padding), text)
        } else {
            format!("{}{}", text, " ".repeat(padding))
        };
        let cell = if text.is_empty() {
            padded
        } else {
            paint(column, &padded)
        };
        line.push(' ');
        line.push_str(&cell);
        line.push_str(" |");
    }
    line.push('\n');
    line
}
