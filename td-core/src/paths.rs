//! Config directory and file path resolution.

use std::path::PathBuf;

use crate::error::{Result, TdError};

/// File name of the persisted todo list.
pub const CONFIG_FILE_NAME: &str = "td.json";

/// Subdirectory under the home directory holding the config file.
#[cfg(not(windows))]
const CONFIG_SUBDIR: &str = ".config/td";
#[cfg(windows)]
const CONFIG_SUBDIR: &str = "td";

/// Resolve the default per-user config directory.
///
/// `~/.config/td` on Unix-like systems, `~\td` on Windows.
///
/// # Errors
///
/// Returns [`TdError::UnableToLocateHomeDir`] if the home directory cannot
/// be determined.
pub fn default_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(TdError::UnableToLocateHomeDir)?;
    Ok(home.join(CONFIG_SUBDIR))
}
