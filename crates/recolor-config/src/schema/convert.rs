//! Conversion defaults.

use recolor_common::{ConversionOptions, TargetFormat};
use serde::{Deserialize, Serialize};

/// `[convert]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub target_format: TargetFormat,
    /// Decimal places for non-integer channels (clamped to 0-6 when used).
    pub precision: u32,
    /// Keep an opaque alpha channel when the source spelled it out.
    pub use_opacity: bool,
    /// Ask for the target format before converting.
    pub prompt_for_format: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            target_format: TargetFormat::Oklch,
            precision: 2,
            use_opacity: true,
            prompt_for_format: false,
        }
    }
}

impl ConvertConfig {
    pub fn to_options(&self) -> ConversionOptions {
        ConversionOptions::new(self.target_format, self.precision, self.use_opacity)
    }
}
