use crate::error::{ClimateError, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `info`, or `debug` when verbose.
/// With a log file, events are also appended there without ANSI colours. The returned guard
/// flushes the file writer when dropped and must be held until the run ends.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("power_climate={}", default_level)));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender(path)?);
            let layer = fmt::layer().with_ansi(false).with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ClimateError::Config(format!("Could not install logger: {}", e)))?;

    Ok(guard)
}

/// Single, never-rotated log file at `path`
fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ClimateError::Config(format!("Invalid log file: {}", path.display())))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|e| {
            ClimateError::Config(format!("Could not open log file {}: {}", path.display(), e))
        })
}
