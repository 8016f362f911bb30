//! Path resolution for counsel configuration files.
//!
//! ```text
//! ~/.config/counsel/          # dirs::config_dir() on Linux
//! └── config.toml             # endpoints and timeouts
//! ```

use counsel_core::CounselError;
use std::path::PathBuf;

const APP_DIR: &str = "counsel";
const CONFIG_FILE: &str = "config.toml";

pub struct CounselPaths;

impl CounselPaths {
    /// Returns the counsel configuration directory.
    pub fn config_dir() -> Result<PathBuf, CounselError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| CounselError::config("Cannot determine the user configuration directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, CounselError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
