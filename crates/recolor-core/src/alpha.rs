//! Detects whether a source color token spelled out its alpha channel.

use regex::Regex;
use std::sync::LazyLock;

/// `#RGBA` or `#RRGGBBAA`.
static HEX_WITH_ALPHA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{4}|[0-9a-fA-F]{8})\b").unwrap());

/// Legacy function names whose fourth argument is alpha by definition.
static LEGACY_ALPHA_FN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:rgba|hsla)\(").unwrap());

/// Whether `token` carried an explicit alpha component.
///
/// Only syntax is inspected: a `/` separator, an `rgba(`/`hsla(` function
/// name, a 4- or 8-digit hex literal, or the keyword `transparent`. A fourth
/// comma argument under `rgb(` or `hsl(` does not count.
pub fn had_explicit_alpha(token: &str) -> bool {
    let t = token.trim();

    if t.contains('/') {
        return true;
    }

    if LEGACY_ALPHA_FN_RE.is_match(t) {
        return true;
    }

    if HEX_WITH_ALPHA_RE.is_match(t) {
        return true;
    }

    t.eq_ignore_ascii_case("transparent")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_alpha_in_any_function() {
        assert!(had_explicit_alpha("rgb(10 20 30 / 50%)"));
        assert!(had_explicit_alpha("hsl(240 10% 98% / 1)"));
        assert!(had_explicit_alpha("oklch(62% 0.1 30 / 0.5)"));
        assert!(had_explicit_alpha("color(display-p3 1 0.5 0 / 0.75)"));
    }

    #[test]
    fn legacy_alpha_function_names() {
        assert!(had_explicit_alpha("rgba(10, 20, 30, 1)"));
        assert!(had_explicit_alpha("HSLA(0, 0%, 0%, 0.1)"));
        assert!(had_explicit_alpha("  rgba(0,0,0,.5)"));
    }

    #[test]
    fn hex_with_alpha_digits() {
        assert!(had_explicit_alpha("#abcd"));
        assert!(had_explicit_alpha("#AABBCCDD"));
        assert!(!had_explicit_alpha("#abc"));
        assert!(!had_explicit_alpha("#aabbcc"));
    }

    #[test]
    fn transparent_keyword() {
        assert!(had_explicit_alpha("transparent"));
        assert!(had_explicit_alpha(" TransParent "));
    }

    #[test]
    fn opaque_forms_are_not_explicit() {
        assert!(!had_explicit_alpha("red"));
        assert!(!had_explicit_alpha("hsl(240 10% 98%)"));
        assert!(!had_explicit_alpha("rgb(10 20 30)"));
        assert!(!had_explicit_alpha("oklch(62% 0.1 30)"));
    }

    #[test]
    fn comma_alpha_under_rgb_name_is_not_detected() {
        // Only the function name signals legacy alpha.
        assert!(!had_explicit_alpha("rgb(10, 20, 30, 0.5)"));
        assert!(!had_explicit_alpha("hsl(120, 50%, 50%, 0.5)"));
    }
}
