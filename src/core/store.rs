//! # Option Persistence
//!
//! The option set survives restarts as a JSON-encoded array of strings,
//! by default at `~/.choices/options.json`.
//!
//! Loading is deliberately forgiving: a missing file or malformed contents
//! mean "no saved options", logged at debug level and never surfaced to the
//! user. Saving uses atomic rename (write `.tmp`, then `rename()`) for crash
//! safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

/// Returns the default storage path, `~/.choices/options.json`.
pub fn default_data_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".choices").join("options.json"))
}

/// Load the saved option set. Any failure (absent file, unreadable file,
/// contents that are not a JSON string array) degrades to the empty set.
pub fn load_options(path: &Path) -> Vec<String> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            debug!("No saved options at {}: {}", path.display(), e);
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<String>>(&json) {
        Ok(options) => {
            info!("Loaded {} options from {}", options.len(), path.display());
            options
        }
        Err(e) => {
            debug!("Ignoring malformed options file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Atomically write the option set as a JSON string array (via `.tmp` + rename).
pub fn save_options(path: &Path, options: &[String]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string(options)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    debug!("Saved {} options to {}", options.len(), path.display());
    Ok(())
}
