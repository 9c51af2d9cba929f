//! Index-based text splicing.

/// Replace the half-open byte range `[start, end)` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// Apply `edits` to `input` one after another.
///
/// Edits must be sorted by descending `start` and must not overlap, so that
/// each splice leaves the offsets of the remaining ones valid. Nothing is
/// validated.
///
/// # Panics
///
/// Panics if an edit range falls outside the text or off a char boundary,
/// which can only happen when the ordering contract is broken.
pub fn apply_edits(input: &str, edits: &[Edit]) -> String {
    let mut out = input.to_string();
    for edit in edits {
        out.replace_range(edit.start..edit.end, &edit.replacement);
    }
    out
}

/// Sort edits into the order [`apply_edits`] expects.
pub fn sort_for_apply(edits: &mut [Edit]) {
    edits.sort_by(|a, b| b.start.cmp(&a.start));
}
