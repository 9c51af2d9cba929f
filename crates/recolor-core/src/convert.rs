//! One-pass conversion of every color declaration in a text.

use std::ops::Range;

use recolor_common::{ConversionOptions, ConvertError, RecolorError};
use tracing::debug;

use crate::alpha::had_explicit_alpha;
use crate::color::parse_color;
use crate::edits::{apply_edits, sort_for_apply, Edit};
use crate::matcher::find_declaration_colors;
use crate::render::render_color;

/// Outcome of converting one text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub output: String,
    pub edits_applied: usize,
    /// Tokens that failed to parse or render, in scan order, duplicates kept.
    pub error_colors: Vec<String>,
}

impl ConversionResult {
    fn unchanged(input: &str, error_colors: Vec<String>) -> Self {
        Self {
            output: input.to_string(),
            edits_applied: 0,
            error_colors,
        }
    }

    /// Number of declarations the matcher recognized.
    pub fn matches_found(&self) -> usize {
        self.edits_applied + self.error_colors.len()
    }

    pub fn is_noop(&self) -> bool {
        self.edits_applied == 0
    }

    pub fn has_errors(&self) -> bool {
        !self.error_colors.is_empty()
    }

    pub fn summary(&self) -> String {
        match (self.edits_applied, self.error_colors.len()) {
            (0, 0) => "no color declarations found".to_string(),
            (0, failed) => format!("found {failed} color(s), none could be converted"),
            (converted, 0) => format!("converted {converted} color(s)"),
            (converted, failed) => format!("converted {converted} color(s), {failed} failed"),
        }
    }
}

fn convert_token(token: &str, options: &ConversionOptions) -> Result<String, ConvertError> {
    let parsed =
        parse_color(token).ok_or_else(|| ConvertError::UnparseableToken(token.to_string()))?;

    let token_options = options.with_explicit_alpha(had_explicit_alpha(token));
    render_color(&parsed, &token_options).map_err(|e| ConvertError::UnrenderableColor {
        token: token.to_string(),
        format: e.0,
    })
}

/// Rewrite every recognized color declaration in `input` into
/// `options.target_format`.
///
/// Never fails: tokens that cannot be converted are listed in
/// [`ConversionResult::error_colors`] and left untouched. The caller's
/// `had_explicit_alpha` is ignored; it is derived per token.
pub fn convert_text(input: &str, options: &ConversionOptions) -> ConversionResult {
    let matches = find_declaration_colors(input);
    if matches.is_empty() {
        return ConversionResult::unchanged(input, Vec::new());
    }

    let mut error_colors = Vec::new();
    let mut edits = Vec::with_capacity(matches.len());

    for m in &matches {
        match convert_token(m.color, options) {
            Ok(rendered) => edits.push(Edit {
                start: m.start,
                end: m.end(),
                replacement: m.with_color(&rendered),
            }),
            Err(e) => {
                debug!(offset = m.start, "skipping color: {e}");
                error_colors.push(e.token().to_string());
            }
        }
    }

    if edits.is_empty() {
        return ConversionResult::unchanged(input, error_colors);
    }

    sort_for_apply(&mut edits);
    let output = apply_edits(input, &edits);

    debug!(
        matches = matches.len(),
        edits = edits.len(),
        errors = error_colors.len(),
        format = %options.target_format,
        "conversion finished"
    );

    ConversionResult {
        output,
        edits_applied: edits.len(),
        error_colors,
    }
}

/// Convert only the byte range `range` of `text` (a selection) and splice
/// the result back into the full text.
///
/// Declarations are matched within the selection alone.
pub fn convert_range(
    text: &str,
    range: Range<usize>,
    options: &ConversionOptions,
) -> Result<ConversionResult, RecolorError> {
    let selected = text.get(range.clone()).ok_or_else(|| {
        RecolorError::InvalidSelection(format!(
            "byte range {}..{} is not within a {}-byte text on char boundaries",
            range.start,
            range.end,
            text.len()
        ))
    })?;

    let converted = convert_text(selected, options);
    let mut output = String::with_capacity(text.len() - selected.len() + converted.output.len());
    output.push_str(&text[..range.start]);
    output.push_str(&converted.output);
    output.push_str(&text[range.end..]);

    Ok(ConversionResult {
        output,
        ..converted
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use recolor_common::TargetFormat;

    fn hex() -> ConversionOptions {
        ConversionOptions::new(TargetFormat::Hex, 2, true)
    }

    #[test]
    fn no_matches_is_a_noop() {
        let result = convert_text("--breakpoint-sm: 640px;", &hex());
        assert_eq!(result.output, "--breakpoint-sm: 640px;");
        assert_eq!(result.edits_applied, 0);
        assert!(result.error_colors.is_empty());
        assert_eq!(result.summary(), "no color declarations found");
    }

    #[test]
    fn replaces_only_the_token() {
        let result = convert_text("a { --red: red !important; }", &hex());
        assert_eq!(result.output, "a { --red: #ff0000 !important; }");
        assert_eq!(result.edits_applied, 1);
    }

    #[test]
    fn failures_are_collected_in_scan_order() {
        let text = "--a: rgb(1 2 x); --b: red; --c: hsl(nope); --d: rgb(1 2 x);";
        let result = convert_text(text, &hex());
        assert_eq!(result.edits_applied, 1);
        assert_eq!(
            result.error_colors,
            vec!["rgb(1 2 x)", "hsl(nope)", "rgb(1 2 x)"]
        );
        assert_eq!(result.matches_found(), 4);
        assert!(result.output.contains("--b: #ff0000;"));
        assert!(result.output.contains("--a: rgb(1 2 x);"));
    }

    #[test]
    fn all_failures_leave_text_unchanged() {
        let text = "--a: hsl(nope);";
        let result = convert_text(text, &hex());
        assert_eq!(result.output, text);
        assert!(result.is_noop());
        assert!(result.has_errors());
        assert_eq!(result.summary(), "found 1 color(s), none could be converted");
    }

    #[test]
    fn summary_counts() {
        let result = convert_text("--a: red; --b: hsl(nope);", &hex());
        assert_eq!(result.summary(), "converted 1 color(s), 1 failed");
    }

    #[test]
    fn per_token_alpha_flag_overrides_caller() {
        let opts = ConversionOptions::new(TargetFormat::Hex, 2, true).with_explicit_alpha(true);
        let result = convert_text("--a: red; --b: #ff0000ff;", &opts);
        assert_eq!(result.output, "--a: #ff0000; --b: #ff0000ff;");
    }

    #[test]
    fn convert_range_touches_only_the_selection() {
        let text = "--a: red;\n--b: blue;\n--c: lime;\n";
        let start = text.find("--b").unwrap();
        let end = start + "--b: blue;".len();
        let result = convert_range(text, start..end, &hex()).unwrap();
        assert_eq!(result.output, "--a: red;\n--b: #0000ff;\n--c: lime;\n");
        assert_eq!(result.edits_applied, 1);
    }

    #[test]
    fn convert_range_rejects_bad_ranges() {
        let text = "é: red;";
        assert!(matches!(
            convert_range(text, 1..4, &hex()),
            Err(RecolorError::InvalidSelection(_))
        ));
        assert!(matches!(
            convert_range(text, 0..100, &hex()),
            Err(RecolorError::InvalidSelection(_))
        ));
    }
}
