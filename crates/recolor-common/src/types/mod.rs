mod format;
mod options;

pub use format::*;
pub use options::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_format_default_is_oklch() {
        assert_eq!(TargetFormat::default(), TargetFormat::Oklch);
    }

    #[test]
    fn target_format_from_str_is_case_insensitive() {
        assert_eq!("HEX".parse::<TargetFormat>().unwrap(), TargetFormat::Hex);
        assert_eq!(" lab ".parse::<TargetFormat>().unwrap(), TargetFormat::Lab);
        assert_eq!("OkLch".parse::<TargetFormat>().unwrap(), TargetFormat::Oklch);
    }

    #[test]
    fn target_format_from_str_rejects_unknown() {
        let err = "cmyk".parse::<TargetFormat>().unwrap_err();
        assert_eq!(err, UnknownFormat("cmyk".into()));
        assert!(err.to_string().contains("oklch"));
    }

    #[test]
    fn target_format_display_round_trips() {
        for format in TargetFormat::ALL {
            assert_eq!(format.to_string().parse::<TargetFormat>().unwrap(), format);
        }
    }

    #[test]
    fn target_format_serialization() {
        let json = serde_json::to_string(&TargetFormat::Oklab).unwrap();
        assert_eq!(json, "\"oklab\"");
        let parsed: TargetFormat = serde_json::from_str("\"hsl\"").unwrap();
        assert_eq!(parsed, TargetFormat::Hsl);
    }

    #[test]
    fn target_format_labels() {
        assert_eq!(TargetFormat::Hex.label(), "#rrggbb[aa]");
        assert_eq!(TargetFormat::Lch.label(), "lch()");
        assert_eq!(TargetFormat::Oklch.description(), "Perceptual OKLCH");
    }

    #[test]
    fn options_clamp_precision() {
        let opts = ConversionOptions::new(TargetFormat::Rgb, 42, false);
        assert_eq!(opts.precision, MAX_PRECISION);
        let opts = ConversionOptions::new(TargetFormat::Rgb, 0, false);
        assert_eq!(opts.precision, 0);
    }

    #[test]
    fn options_defaults() {
        let opts = ConversionOptions::default();
        assert_eq!(opts.target_format, TargetFormat::Oklch);
        assert_eq!(opts.precision, 2);
        assert!(opts.use_opacity);
        assert!(!opts.had_explicit_alpha);
    }

    #[test]
    fn options_with_explicit_alpha_keeps_other_fields() {
        let opts = ConversionOptions::new(TargetFormat::Hsl, 3, false).with_explicit_alpha(true);
        assert!(opts.had_explicit_alpha);
        assert_eq!(opts.target_format, TargetFormat::Hsl);
        assert_eq!(opts.precision, 3);
        assert!(!opts.use_opacity);
    }
}
