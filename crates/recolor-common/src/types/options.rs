use serde::{Deserialize, Serialize};

use super::TargetFormat;

/// Highest number of fractional digits a rendered coordinate may carry.
pub const MAX_PRECISION: u8 = 6;

/// Immutable per-call conversion settings.
///
/// `had_explicit_alpha` describes a single source token. Callers leave it
/// `false`; the converter sets it per match before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    pub target_format: TargetFormat,
    pub precision: u8,
    pub use_opacity: bool,
    #[serde(default, skip_serializing)]
    pub had_explicit_alpha: bool,
}

impl ConversionOptions {
    /// Build options with `precision` clamped to `0..=MAX_PRECISION`.
    pub fn new(target_format: TargetFormat, precision: u32, use_opacity: bool) -> Self {
        Self {
            target_format,
            precision: precision.min(u32::from(MAX_PRECISION)) as u8,
            use_opacity,
            had_explicit_alpha: false,
        }
    }

    pub fn with_explicit_alpha(self, had_explicit_alpha: bool) -> Self {
        Self {
            had_explicit_alpha,
            ..self
        }
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self::new(TargetFormat::Oklch, 2, true)
    }
}
