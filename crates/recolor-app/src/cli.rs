use std::path::PathBuf;

use clap::Parser;
use recolor_common::TargetFormat;

use crate::selection::LineRange;

/// Recolor: rewrite CSS color declarations into one notation.
#[derive(Parser, Debug)]
#[command(name = "recolor", version, about)]
pub struct Args {
    /// CSS files to convert. Reads stdin when none are given.
    pub files: Vec<PathBuf>,

    /// Target format: oklch, oklab, lch, lab, rgb, hsl or hex.
    #[arg(short = 'f', long)]
    pub format: Option<TargetFormat>,

    /// Decimal places for non-integer channels (0-6).
    #[arg(short = 'p', long)]
    pub precision: Option<u32>,

    /// Keep an opaque alpha channel when the source spelled it out.
    #[arg(long, overrides_with = "no_opacity")]
    pub opacity: bool,

    /// Drop opaque alpha channels.
    #[arg(long, overrides_with = "opacity")]
    pub no_opacity: bool,

    /// Choose the target format interactively.
    #[arg(long)]
    pub pick: bool,

    /// Convert only lines START:END (1-based, inclusive).
    #[arg(long, value_name = "START:END", value_parser = crate::selection::parse_line_range)]
    pub lines: Option<LineRange>,

    /// Rewrite files instead of printing the result.
    #[arg(short = 'i', long)]
    pub in_place: bool,

    /// Write every color that failed to convert to this file, one per line.
    #[arg(long, value_name = "PATH")]
    pub error_list: Option<PathBuf>,

    /// Print a JSON report instead of the converted text.
    #[arg(long)]
    pub json: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. debug, recolor_core=trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// `Some` when an opacity flag was given; the last one wins.
    pub fn opacity_override(&self) -> Option<bool> {
        if self.no_opacity {
            Some(false)
        } else if self.opacity {
            Some(true)
        } else {
            None
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("recolor").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn no_arguments_reads_stdin() {
        let a = args(&[]);
        assert!(a.files.is_empty());
        assert!(a.format.is_none());
        assert!(a.opacity_override().is_none());
    }

    #[test]
    fn parses_format_and_precision() {
        let a = args(&["-f", "HEX", "-p", "4", "a.css", "b.css"]);
        assert_eq!(a.format, Some(TargetFormat::Hex));
        assert_eq!(a.precision, Some(4));
        assert_eq!(a.files, vec![PathBuf::from("a.css"), PathBuf::from("b.css")]);
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Args::try_parse_from(["recolor", "--format", "cmyk"]);
        assert!(result.is_err());
    }

    #[test]
    fn last_opacity_flag_wins() {
        assert_eq!(args(&["--opacity", "--no-opacity"]).opacity_override(), Some(false));
        assert_eq!(args(&["--no-opacity", "--opacity"]).opacity_override(), Some(true));
    }

    #[test]
    fn parses_line_range() {
        let a = args(&["--lines", "3:7", "a.css"]);
        assert_eq!(a.lines, Some(LineRange { start: 3, end: 7 }));
        assert!(Args::try_parse_from(["recolor", "--lines", "7:3"]).is_err());
    }
}
