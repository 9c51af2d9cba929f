//! Interactive target-format picker.

use std::io::{self, BufRead, Write};

use recolor_common::TargetFormat;

/// List every format on `out`, then read one answer from `input`.
///
/// Accepts a list number or a format name. Empty input keeps `current`.
/// Returns `None` when the answer matches nothing.
pub fn pick_format<R: BufRead, W: Write>(
    current: TargetFormat,
    mut input: R,
    mut out: W,
) -> io::Result<Option<TargetFormat>> {
    writeln!(out, "Target color format:")?;
    for (i, format) in TargetFormat::ALL.iter().enumerate() {
        let marker = if *format == current { " (current)" } else { "" };
        writeln!(
            out,
            "  {}) {:<14} {}{marker}",
            i + 1,
            format.label(),
            format.description()
        )?;
    }
    write!(out, "Select [{current}]: ")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(parse_answer(answer.trim(), current))
}

fn parse_answer(answer: &str, current: TargetFormat) -> Option<TargetFormat> {
    if answer.is_empty() {
        return Some(current);
    }
    if let Ok(n) = answer.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| TargetFormat::ALL.get(i))
            .copied();
    }
    answer.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(answer: &str) -> (Option<TargetFormat>, String) {
        let mut out = Vec::new();
        let picked = pick_format(TargetFormat::Oklch, answer.as_bytes(), &mut out).unwrap();
        (picked, String::from_utf8(out).unwrap())
    }

    #[test]
    fn lists_every_format() {
        let (_, listing) = pick("\n");
        for format in TargetFormat::ALL {
            assert!(listing.contains(format.description()), "{listing}");
        }
        assert!(listing.contains("(current)"));
        assert!(listing.ends_with("Select [oklch]: "));
    }

    #[test]
    fn empty_answer_keeps_current() {
        assert_eq!(pick("\n").0, Some(TargetFormat::Oklch));
        assert_eq!(pick("").0, Some(TargetFormat::Oklch));
    }

    #[test]
    fn accepts_numbers_and_names() {
        assert_eq!(pick("1\n").0, Some(TargetFormat::ALL[0]));
        assert_eq!(pick("7\n").0, Some(TargetFormat::ALL[6]));
        assert_eq!(pick(" Hex \n").0, Some(TargetFormat::Hex));
    }

    #[test]
    fn unknown_answer_aborts() {
        assert_eq!(pick("0\n").0, None);
        assert_eq!(pick("8\n").0, None);
        assert_eq!(pick("cmyk\n").0, None);
    }
}
