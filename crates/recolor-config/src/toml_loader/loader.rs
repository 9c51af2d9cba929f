//! Config file discovery, loading and first-run creation.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::schema::RecolorConfig;
use crate::validation;
use recolor_common::ConfigError;
use tracing::{debug, info, warn};

use super::template::default_config_toml;

const APP_DIR: &str = "recolor";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/recolor/config.toml`.
///
/// On macOS: `~/Library/Application Support/recolor/config.toml`
/// On Linux: `~/.config/recolor/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
///
/// A file that already exists is left alone.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("cannot {what} {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err("create directory for", e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("keeping existing config at {}", path.display());
            return Ok(());
        }
        Err(e) => return Err(io_err("create", e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_err("write", e))?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Validation problems are logged
/// and the parsed config is returned as-is; consumers clamp when they read.
pub fn load_from_path(path: &Path) -> Result<RecolorConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: RecolorConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; out-of-range values are clamped when used");
    }

    debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from [`default_config_path`], writing the template there on
/// first run. A template that cannot be written only costs a warning.
pub fn load_default() -> Result<RecolorConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            if let Err(e) = create_default_config(&path) {
                warn!("{e}; continuing with defaults");
            }
            Ok(RecolorConfig::default())
        }
        other => other,
    }
}
