//! Finds color values inside CSS-like property declarations.
//!
//! Recognizes `<property>: <color>` followed by `;` or `}` (after optional
//! whitespace, comments and `!important`-style annotations). No stylesheet
//! parsing happens; everything that does not look like a color declaration
//! is left alone.

mod patterns;
mod terminator;


use patterns::DECLARATION_RE;
use terminator::terminator_follows;

/// One color declaration found in a text.
///
/// Offsets are byte offsets into the scanned `&str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationMatch<'a> {
    /// `<property>: <color>`, without the terminator.
    pub full_text: &'a str,
    /// The color token, a substring of `full_text`.
    pub color: &'a str,
    /// Where `full_text` starts in the scanned text.
    pub start: usize,
    /// Where `color` starts inside `full_text`.
    pub token_offset: usize,
}

impl DeclarationMatch<'_> {
    pub fn end(&self) -> usize {
        self.start + self.full_text.len()
    }

    /// `full_text` with the color token swapped for `replacement`.
    pub fn with_color(&self, replacement: &str) -> String {
        let token_end = self.token_offset + self.color.len();
        let mut out = String::with_capacity(self.full_text.len() + replacement.len());
        out.push_str(&self.full_text[..self.token_offset]);
        out.push_str(replacement);
        out.push_str(&self.full_text[token_end..]);
        out
    }
}

/// Every non-overlapping color declaration in `text`, left to right.
pub fn find_declaration_colors(text: &str) -> Vec<DeclarationMatch<'_>> {
    let mut matches = Vec::new();
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = DECLARATION_RE.captures_at(text, pos) else {
            break;
        };
        let (Some(whole), Some(color)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        if terminator_follows(&text[whole.end()..]) {
            matches.push(DeclarationMatch {
                full_text: whole.as_str(),
                color: color.as_str(),
                start: whole.start(),
                token_offset: color.start() - whole.start(),
            });
            pos = whole.end();
        } else {
            // Resume one character past the rejected start.
            let step = text[whole.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            pos = whole.start() + step;
        }
    }

    matches
}
