//! Structured logging setup using the `tracing` ecosystem.
//!
//! Client events go to stderr and to a daily rotated file under the log
//! directory. A bare level such as `debug` applies to the vspc crates only;
//! HTTP internals (reqwest, hyper) stay at `warn`. `RUST_LOG` wins when set.

use std::path::Path;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{VspcError, VspcResult};

/// Log file name prefix inside the log directory.
const LOG_FILE_NAME: &str = "vspc.log";

/// Crates whose events follow the configured level.
const CLIENT_TARGETS: &[&str] = &["vspc_core", "vspc_api", "vspc_cli"];

/// Guard that keeps the non-blocking log writer alive.
/// Drop this to flush and close the log file.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Install the global subscriber.
///
/// `level` is either a bare level (`info`, `debug`, ...) or a full filter
/// directive (`vspc_api=trace,reqwest=debug`), which is used verbatim. With
/// `json_output` the file gets one JSON object per event.
pub fn init_logging(level: &str, log_dir: &Path, json_output: bool) -> VspcResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directive(level))
            .map_err(|e| VspcError::Config(format!("invalid log level {level:?}: {e}")))?,
    };

    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(log_dir, LOG_FILE_NAME));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();
    let json_file = json_output.then(|| {
        fmt::layer()
            .json()
            .with_writer(writer.clone())
            .with_current_span(true)
    });
    let text_file = (!json_output).then(|| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(json_file)
        .with(text_file)
        .try_init()
        .map_err(|e| VspcError::Config(format!("logging already initialized: {e}")))?;

    tracing::debug!("logging to {} at {level}", log_dir.display());
    Ok(LogGuard { _guard: guard })
}

/// Expand a bare level to the client crates; pass directives through.
fn filter_directive(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }
    let mut directive = String::from("warn");
    for target in CLIENT_TARGETS {
        directive.push_str(&format!(",{target}={level}"));
    }
    directive
}
