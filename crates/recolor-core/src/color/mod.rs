//! Adapter over the color-science libraries.
//!
//! Tokens are parsed at `f64` straight into the space their notation names
//! (see [`parse`]), and `palette` performs every space conversion. A token
//! already in the requested space is handed back untouched; Lab and LCH use
//! the CSS D50 white point, reached from the D65 hub by Bradford adaptation.

mod parse;


use palette::chromatic_adaptation::AdaptFromUnclamped;
use palette::convert::FromColorUnclamped;
use palette::encoding;
use palette::white_point::{D50, D65};
use palette::{Hsl, Lab, Lch, Oklab, Oklch, Srgb, Xyz};
use recolor_common::TargetFormat;

pub use parse::parse_color;

/// A color in the space its source token was written in.
///
/// sRGB channels are not clamped: wide-gamut sources may sit outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceColor {
    Srgb(Srgb<f64>),
    Hsl(Hsl<encoding::Srgb, f64>),
    Lab(Lab<D50, f64>),
    Lch(Lch<D50, f64>),
    Oklab(Oklab<f64>),
    Oklch(Oklch<f64>),
}

impl SourceColor {
    fn to_xyz(self) -> Xyz<D65, f64> {
        match self {
            Self::Srgb(c) => Xyz::from_color_unclamped(c),
            Self::Hsl(c) => Xyz::from_color_unclamped(Srgb::<f64>::from_color_unclamped(c)),
            Self::Lab(c) => Xyz::adapt_from_unclamped(Xyz::<D50, f64>::from_color_unclamped(c)),
            Self::Lch(c) => {
                let lab = Lab::<D50, f64>::from_color_unclamped(c);
                Xyz::adapt_from_unclamped(Xyz::<D50, f64>::from_color_unclamped(lab))
            }
            Self::Oklab(c) => Xyz::from_color_unclamped(c),
            Self::Oklch(c) => Xyz::from_color_unclamped(Oklab::<f64>::from_color_unclamped(c)),
        }
    }

    fn to_srgb(self) -> Srgb<f64> {
        match self {
            Self::Srgb(c) => c,
            Self::Hsl(c) => Srgb::from_color_unclamped(c),
            other => Srgb::from_color_unclamped(other.to_xyz()),
        }
    }

    fn to_hsl(self) -> Hsl<encoding::Srgb, f64> {
        match self {
            Self::Hsl(c) => c,
            other => Hsl::from_color_unclamped(other.to_srgb()),
        }
    }

    fn to_oklab(self) -> Oklab<f64> {
        match self {
            Self::Oklab(c) => c,
            Self::Oklch(c) => Oklab::from_color_unclamped(c),
            other => Oklab::from_color_unclamped(other.to_xyz()),
        }
    }

    fn to_oklch(self) -> Oklch<f64> {
        match self {
            Self::Oklch(c) => c,
            other => Oklch::from_color_unclamped(other.to_oklab()),
        }
    }

    fn to_lab(self) -> Lab<D50, f64> {
        match self {
            Self::Lab(c) => c,
            Self::Lch(c) => Lab::from_color_unclamped(c),
            other => {
                let xyz = Xyz::<D50, f64>::adapt_from_unclamped(other.to_xyz());
                Lab::from_color_unclamped(xyz)
            }
        }
    }

    fn to_lch(self) -> Lch<D50, f64> {
        match self {
            Self::Lch(c) => c,
            other => Lch::from_color_unclamped(other.to_lab()),
        }
    }
}

/// A successfully parsed color with its alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedColor {
    color: SourceColor,
    alpha: f64,
}

impl ParsedColor {
    pub fn new(color: SourceColor, alpha: f64) -> Self {
        Self { color, alpha }
    }

    pub fn from_rgba(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self::new(SourceColor::Srgb(Srgb::new(r, g, b)), alpha)
    }

    pub fn color(&self) -> SourceColor {
        self.color
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl From<csscolorparser::Color> for ParsedColor {
    fn from(color: csscolorparser::Color) -> Self {
        Self::from_rgba(
            f64::from(color.r),
            f64::from(color.g),
            f64::from(color.b),
            f64::from(color.a),
        )
    }
}

/// Color spaces a [`ParsedColor`] can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Oklch,
    Oklab,
    Lch,
    Lab,
    Srgb,
    Hsl,
}

impl From<TargetFormat> for ColorSpace {
    fn from(format: TargetFormat) -> Self {
        match format {
            TargetFormat::Oklch => Self::Oklch,
            TargetFormat::Oklab => Self::Oklab,
            TargetFormat::Lch => Self::Lch,
            TargetFormat::Lab => Self::Lab,
            TargetFormat::Rgb | TargetFormat::Hex => Self::Srgb,
            TargetFormat::Hsl => Self::Hsl,
        }
    }
}

/// Coordinates in one space, in the library's native units.
///
/// OK spaces keep lightness in `[0, 1]`; CIE spaces use `[0, 100]` with a D50
/// white point; sRGB and HSL channels are fractions. Hues are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinates {
    Oklch { l: f64, c: f64, h: f64, alpha: f64 },
    Oklab { l: f64, a: f64, b: f64, alpha: f64 },
    Lch { l: f64, c: f64, h: f64, alpha: f64 },
    Lab { l: f64, a: f64, b: f64, alpha: f64 },
    Srgb { r: f64, g: f64, b: f64, alpha: f64 },
    Hsl { h: f64, s: f64, l: f64, alpha: f64 },
}

impl Coordinates {
    /// Every channel except hue must be a finite number.
    fn is_well_formed(&self) -> bool {
        let channels = match *self {
            Self::Oklch { l, c, alpha, .. } | Self::Lch { l, c, alpha, .. } => vec![l, c, alpha],
            Self::Oklab { l, a, b, alpha } | Self::Lab { l, a, b, alpha } => vec![l, a, b, alpha],
            Self::Srgb { r, g, b, alpha } => vec![r, g, b, alpha],
            Self::Hsl { s, l, alpha, .. } => vec![s, l, alpha],
        };
        channels.iter().all(|v| v.is_finite())
    }
}

/// Express `color` in `space`. `None` if the conversion produced a
/// malformed value.
pub fn convert_to_space(color: &ParsedColor, space: ColorSpace) -> Option<Coordinates> {
    let source = color.color;
    let alpha = color.alpha;

    let coords = match space {
        ColorSpace::Oklch => {
            let v = source.to_oklch();
            Coordinates::Oklch {
                l: v.l,
                c: v.chroma,
                h: v.hue.into_positive_degrees(),
                alpha,
            }
        }
        ColorSpace::Oklab => {
            let v = source.to_oklab();
            Coordinates::Oklab {
                l: v.l,
                a: v.a,
                b: v.b,
                alpha,
            }
        }
        ColorSpace::Lch => {
            let v = source.to_lch();
            Coordinates::Lch {
                l: v.l,
                c: v.chroma,
                h: v.hue.into_positive_degrees(),
                alpha,
            }
        }
        ColorSpace::Lab => {
            let v = source.to_lab();
            Coordinates::Lab {
                l: v.l,
                a: v.a,
                b: v.b,
                alpha,
            }
        }
        ColorSpace::Srgb => {
            let v = source.to_srgb();
            Coordinates::Srgb {
                r: v.red,
                g: v.green,
                b: v.blue,
                alpha,
            }
        }
        ColorSpace::Hsl => {
            let v = source.to_hsl();
            Coordinates::Hsl {
                h: v.hue.into_positive_degrees(),
                s: v.saturation,
                l: v.lightness,
                alpha,
            }
        }
    };

    coords.is_well_formed().then_some(coords)
}
