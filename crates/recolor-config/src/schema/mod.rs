//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod convert;
mod logging;
mod report;

pub use convert::*;
pub use logging::*;
pub use report::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecolorConfig {
    pub convert: ConvertConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}
