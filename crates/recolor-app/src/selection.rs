//! Line-range selections.
//!
//! A selection names whole lines; the converter works on byte ranges, so
//! the lines are mapped onto the text before converting.

use std::ops::Range;

use recolor_common::RecolorError;

/// 1-based, inclusive line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

/// Parse `START:END` as given on the command line.
pub fn parse_line_range(s: &str) -> Result<LineRange, String> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got `{s}`"))?;
    let start: usize = start
        .trim()
        .parse()
        .map_err(|e| format!("bad start line `{start}`: {e}"))?;
    let end: usize = end
        .trim()
        .parse()
        .map_err(|e| format!("bad end line `{end}`: {e}"))?;

    if start == 0 {
        return Err("line numbers start at 1".into());
    }
    if end < start {
        return Err(format!("end line {end} is before start line {start}"));
    }
    Ok(LineRange { start, end })
}

/// Byte range covering `lines` of `text`, line terminators of the last line
/// excluded. An end past the last line is cut to the last line.
pub fn byte_range(text: &str, lines: LineRange) -> Result<Range<usize>, RecolorError> {
    let mut start = None;
    let mut end = None;
    let mut offset = 0;
    let mut count = 0;

    for (index, line) in text.split_inclusive('\n').enumerate() {
        let number = index + 1;
        count = number;
        if number == lines.start {
            start = Some(offset);
        }
        if number <= lines.end {
            let content = line.trim_end_matches('\n').trim_end_matches('\r');
            end = Some(offset + content.len());
        }
        offset += line.len();
        if number >= lines.end {
            break;
        }
    }

    match (start, end) {
        (Some(start), Some(end)) => Ok(start..end),
        _ => Err(RecolorError::InvalidSelection(format!(
            "line {} is past the end of the text ({count} line(s))",
            lines.start
        ))),
    }
}
