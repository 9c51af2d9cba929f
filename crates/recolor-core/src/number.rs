//! Numeric formatting helpers shared by every renderer.

/// Round `value` to `precision` fractional digits, halves away from zero,
/// then drop trailing zeros and a dangling decimal point. `-0` collapses to
/// `0`.
pub fn format_number(value: f64, precision: u8) -> String {
    let factor = 10f64.powi(i32::from(precision));
    let rounded = (value * factor).round() / factor;
    let fixed = format!("{rounded:.prec$}", prec = usize::from(precision));
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    n.max(min).min(max)
}

pub fn clamp01(n: f64) -> f64 {
    clamp(n, 0.0, 1.0)
}

/// Scale a `[0, 1]` channel to a byte, clamping first.
pub fn channel_to_byte(n: f64) -> u8 {
    (clamp01(n) * 255.0).round() as u8
}

/// Two lowercase hex digits for a byte-range value.
pub fn to_hex2(n: f64) -> String {
    format!("{:02x}", clamp(n.round(), 0.0, 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_trims_trailing_zeros() {
        assert_eq!(format_number(0.5, 3), "0.5");
        assert_eq!(format_number(12.0, 2), "12");
        assert_eq!(format_number(12.340, 4), "12.34");
    }

    #[test]
    fn format_number_rounds_to_precision() {
        assert_eq!(format_number(0.123456, 2), "0.12");
        assert_eq!(format_number(98.876, 1), "98.9");
        assert_eq!(format_number(2.6, 0), "3");
    }

    #[test]
    fn format_number_rounds_halves_away_from_zero() {
        assert_eq!(format_number(0.5, 0), "1");
        assert_eq!(format_number(2.5, 0), "3");
        assert_eq!(format_number(-2.5, 0), "-3");
        assert_eq!(format_number(0.125, 2), "0.13");
        assert_eq!(format_number(-0.125, 2), "-0.13");
        assert_eq!(format_number(12.5, 0), "13");
    }

    #[test]
    fn format_number_zero_precision_keeps_integer_zeros() {
        assert_eq!(format_number(100.0, 0), "100");
        assert_eq!(format_number(10.2, 0), "10");
    }

    #[test]
    fn format_number_normalizes_negative_zero() {
        assert_eq!(format_number(-0.0, 2), "0");
        assert_eq!(format_number(-0.0001, 2), "0");
        assert_eq!(format_number(-0.4, 0), "0");
    }

    #[test]
    fn format_number_keeps_real_negatives() {
        assert_eq!(format_number(-0.05, 2), "-0.05");
        assert_eq!(format_number(-12.5, 1), "-12.5");
    }

    #[test]
    fn clamp01_bounds() {
        assert_eq!(clamp01(-0.2), 0.0);
        assert_eq!(clamp01(1.7), 1.0);
        assert_eq!(clamp01(0.25), 0.25);
    }

    #[test]
    fn channel_to_byte_scales_and_clamps() {
        assert_eq!(channel_to_byte(1.0), 255);
        assert_eq!(channel_to_byte(0.5), 128);
        assert_eq!(channel_to_byte(1.2), 255);
        assert_eq!(channel_to_byte(-0.1), 0);
    }

    #[test]
    fn to_hex2_pads_and_clamps() {
        assert_eq!(to_hex2(0.0), "00");
        assert_eq!(to_hex2(10.0), "0a");
        assert_eq!(to_hex2(255.0), "ff");
        assert_eq!(to_hex2(300.0), "ff");
        assert_eq!(to_hex2(-4.0), "00");
        assert_eq!(to_hex2(127.6), "80");
    }
}
