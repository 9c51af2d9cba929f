use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CSS color notation a conversion rewrites into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    #[default]
    Oklch,
    Oklab,
    Lch,
    Lab,
    Rgb,
    Hsl,
    Hex,
}

impl TargetFormat {
    pub const ALL: [TargetFormat; 7] = [
        TargetFormat::Oklch,
        TargetFormat::Oklab,
        TargetFormat::Lch,
        TargetFormat::Lab,
        TargetFormat::Rgb,
        TargetFormat::Hsl,
        TargetFormat::Hex,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Oklch => "oklch",
            Self::Oklab => "oklab",
            Self::Lch => "lch",
            Self::Lab => "lab",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hex => "hex",
        }
    }

    /// Short syntax hint shown in format pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Oklch => "oklch()",
            Self::Oklab => "oklab()",
            Self::Lch => "lch()",
            Self::Lab => "lab()",
            Self::Rgb => "rgb()",
            Self::Hsl => "hsl()",
            Self::Hex => "#rrggbb[aa]",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Oklch => "Perceptual OKLCH",
            Self::Oklab => "Perceptual OKLab",
            Self::Lch => "CIELCH",
            Self::Lab => "CIELAB",
            Self::Rgb => "RGB functional syntax",
            Self::Hsl => "HSL functional syntax",
            Self::Hex => "Hex (optionally with alpha)",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown target format '{0}' (expected one of oklch, oklab, lch, lab, rgb, hsl, hex)")]
pub struct UnknownFormat(pub String);

impl FromStr for TargetFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == wanted)
            .ok_or_else(|| UnknownFormat(s.trim().to_string()))
    }
}
