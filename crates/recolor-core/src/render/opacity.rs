//! Alpha inclusion policy shared by all output formats.

use recolor_common::ConversionOptions;

use crate::number::format_number;

/// Whether the rendered color must carry its alpha component.
pub(super) fn include_alpha(alpha: f64, options: &ConversionOptions) -> bool {
    alpha < 1.0 || (options.use_opacity && options.had_explicit_alpha)
}

/// ` / <alpha>` for function notations, or nothing.
///
/// An alpha whose text rounds to `1` follows the opaque rule.
pub(super) fn alpha_suffix(alpha: f64, options: &ConversionOptions) -> String {
    let text = format_number(alpha, options.precision);
    let shown = if text == "1" { 1.0 } else { alpha };
    if include_alpha(shown, options) {
        format!(" / {text}")
    } else {
        String::new()
    }
}
