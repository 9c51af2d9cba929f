//! CSS color token parsing at `f64`.
//!
//! Every notation the renderer writes (hex, `rgb`, `hsl`, `lab`, `lch`,
//! `oklab`, `oklch`) is read here into its own space, so a rendered token
//! parses back to exactly the numbers it spells. Named colors come from the
//! `csscolorparser` table; other functions (`hwb`, `hsv`) go through
//! `csscolorparser::parse`.

use palette::{Hsl, Lab, Lch, Oklab, Oklch, Srgb};

use super::{ParsedColor, SourceColor};

/// Parse a CSS color token. `None` when the token is not a color.
pub fn parse_color(token: &str) -> Option<ParsedColor> {
    let s = token.trim();
    let lower = s.to_ascii_lowercase();

    if lower == "transparent" {
        return Some(ParsedColor::from_rgba(0.0, 0.0, 0.0, 0.0));
    }
    if let Some(digits) = lower.strip_prefix('#') {
        return parse_hex(digits);
    }
    if let Some(&[r, g, b]) = csscolorparser::NAMED_COLORS.get(lower.as_str()) {
        return Some(ParsedColor::from_rgba(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            1.0,
        ));
    }

    let (name, args) = split_function(&lower)?;
    let parse_channels: fn([&str; 3]) -> Option<SourceColor> = match name {
        "rgb" | "rgba" => parse_rgb,
        "hsl" | "hsla" => parse_hsl,
        "lab" => parse_lab,
        "lch" => parse_lch,
        "oklab" => parse_oklab,
        "oklch" => parse_oklch,
        _ => return csscolorparser::parse(s).ok().map(ParsedColor::from),
    };

    let params = split_params(args)?;
    let (channels, alpha) = match params.as_slice() {
        [a, b, c] => ([*a, *b, *c], 1.0),
        [a, b, c, alpha] => ([*a, *b, *c], parse_alpha(alpha)?),
        _ => return None,
    };
    let color = parse_channels(channels)?;
    Some(ParsedColor::new(color, alpha))
}

fn parse_hex(digits: &str) -> Option<ParsedColor> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok();
    let pair = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

    let bytes: Vec<u8> = match digits.len() {
        3 | 4 => (0..digits.len())
            .map(|i| nibble(i).map(|n| n * 17))
            .collect::<Option<_>>()?,
        6 | 8 => (0..digits.len())
            .step_by(2)
            .map(pair)
            .collect::<Option<_>>()?,
        _ => return None,
    };
    let channel = |i: usize| bytes.get(i).map_or(1.0, |&b| f64::from(b) / 255.0);
    Some(ParsedColor::from_rgba(
        channel(0),
        channel(1),
        channel(2),
        channel(3),
    ))
}

fn split_function(s: &str) -> Option<(&str, &str)> {
    let open = s.find('(')?;
    let inner = s.strip_suffix(')')?;
    Some((s[..open].trim_end(), &inner[open + 1..]))
}

/// Components separated by commas, a slash, or whitespace.
fn split_params(args: &str) -> Option<Vec<&str>> {
    let params: Vec<&str> = args
        .split([',', '/'])
        .flat_map(str::split_ascii_whitespace)
        .collect();
    (3..=4).contains(&params.len()).then_some(params)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Component {
    Number(f64),
    /// A percentage as a fraction of one.
    Percent(f64),
    /// The `none` keyword, which resolves to zero.
    Missing,
}

impl Component {
    /// The value with percentages scaled so that `100%` equals `full`.
    fn scaled(self, full: f64) -> f64 {
        match self {
            Self::Number(v) => v,
            Self::Percent(v) => v * full,
            Self::Missing => 0.0,
        }
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn component(s: &str) -> Option<Component> {
    if s == "none" {
        return Some(Component::Missing);
    }
    match s.strip_suffix('%') {
        Some(pct) => parse_finite(pct).map(|v| Component::Percent(v / 100.0)),
        None => parse_finite(s).map(Component::Number),
    }
}

/// Hue in degrees; a bare number is degrees.
fn angle(s: &str) -> Option<f64> {
    if s == "none" {
        return Some(0.0);
    }
    if let Some(v) = s.strip_suffix("deg") {
        return parse_finite(v);
    }
    if let Some(v) = s.strip_suffix("grad") {
        return parse_finite(v).map(|t| t * 360.0 / 400.0);
    }
    if let Some(v) = s.strip_suffix("rad") {
        return parse_finite(v).map(f64::to_degrees);
    }
    if let Some(v) = s.strip_suffix("turn") {
        return parse_finite(v).map(|t| t * 360.0);
    }
    parse_finite(s)
}

fn parse_alpha(s: &str) -> Option<f64> {
    Some(component(s)?.scaled(1.0).clamp(0.0, 1.0))
}

fn parse_rgb([r, g, b]: [&str; 3]) -> Option<SourceColor> {
    let parts = [component(r)?, component(g)?, component(b)?];
    let percent = parts.iter().any(|p| matches!(p, Component::Percent(_)));
    let number = parts.iter().any(|p| matches!(p, Component::Number(_)));
    if percent && number {
        return None;
    }
    let channel = |p: Component| match p {
        Component::Number(v) => (v / 255.0).clamp(0.0, 1.0),
        other => other.scaled(1.0).clamp(0.0, 1.0),
    };
    Some(SourceColor::Srgb(Srgb::new(
        channel(parts[0]),
        channel(parts[1]),
        channel(parts[2]),
    )))
}

fn parse_hsl([h, s, l]: [&str; 3]) -> Option<SourceColor> {
    let hue = angle(h)?;
    // Bare numbers count as percentages.
    let fraction = |p: Component| match p {
        Component::Number(v) => v / 100.0,
        other => other.scaled(1.0),
    };
    let saturation = fraction(component(s)?).max(0.0);
    let lightness = fraction(component(l)?);
    Some(SourceColor::Hsl(Hsl::new(hue, saturation, lightness)))
}

fn parse_lab([l, a, b]: [&str; 3]) -> Option<SourceColor> {
    let l = component(l)?.scaled(100.0).max(0.0);
    let a = component(a)?.scaled(125.0);
    let b = component(b)?.scaled(125.0);
    Some(SourceColor::Lab(Lab::new(l, a, b)))
}

fn parse_lch([l, c, h]: [&str; 3]) -> Option<SourceColor> {
    let l = component(l)?.scaled(100.0).max(0.0);
    let c = component(c)?.scaled(150.0).max(0.0);
    Some(SourceColor::Lch(Lch::new(l, c, angle(h)?)))
}

fn parse_oklab([l, a, b]: [&str; 3]) -> Option<SourceColor> {
    let l = component(l)?.scaled(1.0).max(0.0);
    let a = component(a)?.scaled(0.4);
    let b = component(b)?.scaled(0.4);
    Some(SourceColor::Oklab(Oklab::new(l, a, b)))
}

fn parse_oklch([l, c, h]: [&str; 3]) -> Option<SourceColor> {
    let l = component(l)?.scaled(1.0).max(0.0);
    let c = component(c)?.scaled(0.4).max(0.0);
    Some(SourceColor::Oklch(Oklch::new(l, c, angle(h)?)))
}
