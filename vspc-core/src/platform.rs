//! Per-user directories for configuration and log files.

use std::path::PathBuf;
use crate::constants::APP_NAME;
use crate::error::{VspcError, VspcResult};

/// Data directory; logs live under it.
///
/// - Windows: `%APPDATA%/vspc`
/// - macOS: `~/Library/Application Support/vspc`
/// - Linux: `~/.local/share/vspc`
pub fn data_dir() -> VspcResult<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| VspcError::Config("could not determine data directory".into()))?;
    Ok(base.join(APP_NAME))
}

/// Configuration directory holding `config.toml`.
///
/// - Windows: `%APPDATA%/vspc`
/// - macOS: `~/Library/Application Support/vspc`
/// - Linux: `~/.config/vspc`
pub fn config_dir() -> VspcResult<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| VspcError::Config("could not determine config directory".into()))?;
    Ok(base.join(APP_NAME))
}
