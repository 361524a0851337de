//! Logging configuration using env_logger.
//!
//! All log output goes to stderr so that reports written to stdout stay
//! clean. `RUST_LOG` takes precedence over the level passed to [`init`].

use anyhow::Result;
use log::{Level, LevelFilter, debug, error, info, trace, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Log message with context
pub struct LogMessage {
    /// The message to log
    pub message: String,

    /// The module where the log originated, used as the log target
    pub module: &'static str,

    /// Optional key-value pairs of additional context
    pub context: Option<Vec<(&'static str, String)>>,
}

/// Maps a `-v` occurrence count to a log level.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize env_logger with stderr output.
///
/// Only the first call has an effect; later calls return `Ok(())`.
pub fn init(level: LevelFilter) -> Result<()> {
    let mut result = Ok(());

    INIT.call_once(|| {
        if let Err(e) = setup_logger(level) {
            // Cannot use logging yet since it failed to initialize
            eprintln!("Failed to initialize logging: {}", e);
            result = Err(e);
        } else {
            debug!("Logging initialized at level {}", level);
        }
    });

    result
}

/// Log a message with the given level and context
///
/// # Example
///
/// ```
/// use extension_count::telemetry::{log_with_context, LogMessage};
/// use log::Level;
///
/// log_with_context(
///     Level::Info,
///     LogMessage {
///         message: "Folder scanned".to_string(),
///         module: "report",
///         context: Some(vec![
///             ("folder", "./src".to_string()),
///             ("files", "12".to_string()),
///         ]),
///     }
/// );
/// ```
pub fn log_with_context(level: Level, msg: LogMessage) {
    let line = format_context(&msg);
    match level {
        Level::Error => error!(target: msg.module, "{}", line),
        Level::Warn => warn!(target: msg.module, "{}", line),
        Level::Info => info!(target: msg.module, "{}", line),
        Level::Debug => debug!(target: msg.module, "{}", line),
        Level::Trace => trace!(target: msg.module, "{}", line),
    }
}

/// Format a log message with its context for display
pub fn format_context(msg: &LogMessage) -> String {
    match &msg.context {
        Some(context) if !context.is_empty() => {
            let context_str = context
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(", ");

            format!("{} [{}]", msg.message, context_str)
        }
        _ => msg.message.clone(),
    }
}

fn setup_logger(level: LevelFilter) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or(level.to_string());
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(true)
        .format_module_path(false)
        .try_init()?;

    Ok(())
}
