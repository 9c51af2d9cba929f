//! Recolor configuration.
//!
//! TOML-based settings for the converter, the error report, and logging.
//! Every section uses serde defaults so partial files work.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use recolor_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! let options = config.convert.to_options();
//! println!("{}", options.target_format);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ConvertConfig, LogLevel, LoggingConfig, RecolorConfig, ReportConfig};

use std::path::Path;

use recolor_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// A missing default file is created from the template. A missing explicit
/// file is an error.
pub fn load_config(path: Option<&Path>) -> Result<RecolorConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}
