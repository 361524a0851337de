use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use extension_count::labels::Labels;
use extension_count::render::{DEFAULT_LIST_LIMIT_ARG, SortKey, Style, TableOptions, render_report};
use extension_count::report::{FolderReport, ReportOptions, build_report};
use extension_count::telemetry::{self, LogMessage, log_with_context};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "extension-count",
    author,
    version,
    about = "Count and list files by extension in one or more directories",
    after_help = "Examples:\n  extension-count ./src\n  extension-count ./src ./tests --ci"
)]
struct Cli {
    /// Folders to scan
    #[arg(required = true)]
    folders: Vec<PathBuf>,

    /// Plain output without colors
    #[arg(long)]
    ci: bool,

    /// Emit the reports as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Limit the number of files listed per extension (0 for unlimited).
    /// A bare --limit uses the default; give a value as --limit=N
    #[arg(
        long,
        value_name = "N",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_LIST_LIMIT_ARG
    )]
    limit: Option<usize>,

    /// Order of the rows in each table
    #[arg(long, value_enum, default_value = "discovery")]
    sort: SortArg,

    /// Reverse the row order
    #[arg(long)]
    reverse: bool,

    /// Show file paths relative to the scanned folder
    #[arg(long)]
    relative: bool,

    /// JSON file mapping extensions to labels (defaults to ./labels.json if present)
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Stop at the first folder that cannot be scanned
    #[arg(long)]
    fail_fast: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SortArg {
    Discovery,
    Count,
    Ext,
    Files,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Discovery => SortKey::Discovery,
            SortArg::Count => SortKey::Count,
            SortArg::Ext => SortKey::Extension,
            SortArg::Files => SortKey::Files,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    telemetry::init(telemetry::level_for_verbosity(cli.verbose))?;

    let labels = match &cli.labels {
        Some(path) => Labels::load(path)?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            Labels::discover(&cwd)?
        }
    };

    let options = ReportOptions {
        labels,
        relative_paths: cli.relative,
    };

    // A failing folder is reported and skipped unless --fail-fast is given
    let mut reports: Vec<FolderReport> = Vec::with_capacity(cli.folders.len());
    let mut failed = false;
    for folder in &cli.folders {
        match build_report(folder, &options) {
            Ok(report) => reports.push(report),
            Err(err) => {
                // The error itself goes to stderr below
                log_with_context(
                    log::Level::Debug,
                    LogMessage {
                        message: "Failed to scan folder".to_string(),
                        module: "cli",
                        context: Some(vec![("folder", folder.display().to_string())]),
                    },
                );
                eprintln!("error: {}", err);
                failed = true;
                if cli.fail_fast {
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        let table_options = TableOptions {
            style: Style::new(!cli.ci),
            limit: cli.limit.filter(|limit| *limit > 0),
            sort: cli.sort.into(),
            reverse: cli.reverse,
        };

        for report in &reports {
            println!("{}", render_report(report, &table_options));
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use extension_count::render::DEFAULT_LIST_LIMIT;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::try_parse_from(["extension-count", "./src"]).unwrap();

        assert_eq!(cli.folders, vec![PathBuf::from("./src")]);
        assert!(!cli.ci);
        assert!(!cli.json);
        assert_eq!(cli.limit, None);
        assert!(matches!(cli.sort, SortArg::Discovery));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_requires_a_folder() {
        assert!(Cli::try_parse_from(["extension-count"]).is_err());
    }

    #[test]
    fn test_cli_limit_without_value_uses_default() {
        let cli = Cli::try_parse_from(["extension-count", "--limit", "a"]).unwrap();
        assert_eq!(cli.limit, Some(DEFAULT_LIST_LIMIT));
        assert_eq!(cli.folders, vec![PathBuf::from("a")]);

        let cli = Cli::try_parse_from(["extension-count", "a", "--limit=3"]).unwrap();
        assert_eq!(cli.limit, Some(3));
    }

    #[test]
    fn test_cli_bare_limit_does_not_take_the_folder() {
        let cli = Cli::try_parse_from(["extension-count", "--limit", "./src"]).unwrap();

        assert_eq!(cli.limit, Some(DEFAULT_LIST_LIMIT));
        assert_eq!(cli.folders, vec![PathBuf::from("./src")]);
    }

    #[test]
    fn test_cli_sort_files() {
        let cli = Cli::try_parse_from(["extension-count", "a", "--sort", "files"]).unwrap();
        assert_eq!(SortKey::from(cli.sort), SortKey::Files);
    }

    #[test]
    fn test_cli_keeps_folder_order() {
        let args = ["extension-count", "b", "a", "b", "--sort", "ext", "-vv"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(
            cli.folders,
            vec![PathBuf::from("b"), PathBuf::from("a"), PathBuf::from("b")]
        );
        assert_eq!(SortKey::from(cli.sort), SortKey::Extension);
        assert_eq!(cli.verbose, 2);
    }
}
