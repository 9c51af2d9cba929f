//! Renders a parsed color as a CSS color string in the target notation.
//!
//! Numeric conventions per format:
//! - `oklch`: lightness as a percentage, chroma and hue raw
//! - `oklab`, `lab`, `lch`: raw library units
//! - `rgb`: integer channels 0-255, clamped
//! - `hsl`: hue in degrees, saturation and lightness as clamped percentages
//! - `hex`: lowercase `#rrggbb`, plus an alpha byte when the alpha policy asks
//!
//! Alpha is always written when below 1. An opaque alpha is written only when
//! the caller wants opacity and the source token spelled its alpha out.

mod opacity;


use recolor_common::{ConversionOptions, TargetFormat};

use crate::color::{convert_to_space, Coordinates, ParsedColor};
use crate::number::{channel_to_byte, clamp01, format_number, to_hex2};

use opacity::{alpha_suffix, include_alpha};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("color cannot be expressed as {0}")]
pub struct RenderError(pub TargetFormat);

/// Render `color` according to `options`.
pub fn render_color(color: &ParsedColor, options: &ConversionOptions) -> Result<String, RenderError> {
    let format = options.target_format;
    let coords = convert_to_space(color, format.into()).ok_or(RenderError(format))?;
    let p = options.precision;

    let rendered = match (format, coords) {
        (TargetFormat::Oklch, Coordinates::Oklch { l, c, h, alpha }) => {
            format!(
                "oklch({}% {} {}{})",
                format_number(l * 100.0, p),
                format_number(c, p),
                hue_text(h, p),
                alpha_suffix(alpha, options)
            )
        }
        (TargetFormat::Oklab, Coordinates::Oklab { l, a, b, alpha }) => format!(
            "oklab({} {} {}{})",
            format_number(l, p),
            format_number(a, p),
            format_number(b, p),
            alpha_suffix(alpha, options)
        ),
        (TargetFormat::Lch, Coordinates::Lch { l, c, h, alpha }) => format!(
            "lch({} {} {}{})",
            format_number(l, p),
            format_number(c, p),
            hue_text(h, p),
            alpha_suffix(alpha, options)
        ),
        (TargetFormat::Lab, Coordinates::Lab { l, a, b, alpha }) => format!(
            "lab({} {} {}{})",
            format_number(l, p),
            format_number(a, p),
            format_number(b, p),
            alpha_suffix(alpha, options)
        ),
        (TargetFormat::Rgb, Coordinates::Srgb { r, g, b, alpha }) => format!(
            "rgb({} {} {}{})",
            channel_to_byte(r),
            channel_to_byte(g),
            channel_to_byte(b),
            alpha_suffix(alpha, options)
        ),
        (TargetFormat::Hsl, Coordinates::Hsl { h, s, l, alpha }) => format!(
            "hsl({} {}% {}%{})",
            hue_text(h, p),
            format_number(clamp01(s) * 100.0, p),
            format_number(clamp01(l) * 100.0, p),
            alpha_suffix(alpha, options)
        ),
        (TargetFormat::Hex, Coordinates::Srgb { r, g, b, alpha }) => {
            let mut hex = format!(
                "#{}{}{}",
                to_hex2(clamp01(r) * 255.0),
                to_hex2(clamp01(g) * 255.0),
                to_hex2(clamp01(b) * 255.0)
            );
            if include_alpha(alpha, options) {
                hex.push_str(&to_hex2(clamp01(alpha) * 255.0));
            }
            hex
        }
        _ => return Err(RenderError(format)),
    };

    Ok(rendered)
}

/// Hue text in `[0, 360)`. A non-finite hue is written as `0`.
fn hue_text(hue: f64, precision: u8) -> String {
    if !hue.is_finite() {
        return "0".to_string();
    }
    match format_number(hue, precision).as_str() {
        "360" => "0".to_string(),
        text => text.to_string(),
    }
}
