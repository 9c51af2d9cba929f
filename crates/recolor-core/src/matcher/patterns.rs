//! Regex building blocks for declaration matching.
//!
//! The grammar is a tagged alternative: named color, hex literal, legacy
//! `rgb()`, then any color function. Not part of the public API.

use regex::Regex;
use std::sync::LazyLock;

/// CSS named colors plus `transparent`.
pub(crate) const NAMED_COLORS: &[&str] = &[
    "aliceblue",
    "antiquewhite",
    "aqua",
    "aquamarine",
    "azure",
    "beige",
    "bisque",
    "black",
    "blanchedalmond",
    "blue",
    "blueviolet",
    "brown",
    "burlywood",
    "cadetblue",
    "chartreuse",
    "chocolate",
    "coral",
    "cornflowerblue",
    "cornsilk",
    "crimson",
    "cyan",
    "darkblue",
    "darkcyan",
    "darkgoldenrod",
    "darkgray",
    "darkgreen",
    "darkgrey",
    "darkkhaki",
    "darkmagenta",
    "darkolivegreen",
    "darkorange",
    "darkorchid",
    "darkred",
    "darksalmon",
    "darkseagreen",
    "darkslateblue",
    "darkslategray",
    "darkslategrey",
    "darkturquoise",
    "darkviolet",
    "deeppink",
    "deepskyblue",
    "dimgray",
    "dimgrey",
    "dodgerblue",
    "firebrick",
    "floralwhite",
    "forestgreen",
    "fuchsia",
    "gainsboro",
    "ghostwhite",
    "gold",
    "goldenrod",
    "gray",
    "green",
    "greenyellow",
    "grey",
    "honeydew",
    "hotpink",
    "indianred",
    "indigo",
    "ivory",
    "khaki",
    "lavender",
    "lavenderblush",
    "lawngreen",
    "lemonchiffon",
    "lightblue",
    "lightcoral",
    "lightcyan",
    "lightgoldenrodyellow",
    "lightgray",
    "lightgreen",
    "lightgrey",
    "lightpink",
    "lightsalmon",
    "lightseagreen",
    "lightskyblue",
    "lightslategray",
    "lightslategrey",
    "lightsteelblue",
    "lightyellow",
    "lime",
    "limegreen",
    "linen",
    "magenta",
    "maroon",
    "mediumaquamarine",
    "mediumblue",
    "mediumorchid",
    "mediumpurple",
    "mediumseagreen",
    "mediumslateblue",
    "mediumspringgreen",
    "mediumturquoise",
    "mediumvioletred",
    "midnightblue",
    "mintcream",
    "mistyrose",
    "moccasin",
    "navajowhite",
    "navy",
    "oldlace",
    "olive",
    "olivedrab",
    "orange",
    "orangered",
    "orchid",
    "palegoldenrod",
    "palegreen",
    "paleturquoise",
    "palevioletred",
    "papayawhip",
    "peachpuff",
    "peru",
    "pink",
    "plum",
    "powderblue",
    "purple",
    "rebeccapurple",
    "red",
    "rosybrown",
    "royalblue",
    "saddlebrown",
    "salmon",
    "sandybrown",
    "seagreen",
    "seashell",
    "sienna",
    "silver",
    "skyblue",
    "slateblue",
    "slategray",
    "slategrey",
    "snow",
    "springgreen",
    "steelblue",
    "tan",
    "teal",
    "thistle",
    "tomato",
    "turquoise",
    "violet",
    "wheat",
    "white",
    "whitesmoke",
    "yellow",
    "yellowgreen",
    "transparent",
];

const HEX_COLOR: &str = r"#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})\b";

const RGB_COLOR: &str = r"rgba?\(\s*[0-9]{1,3}(?:\s*,\s*|\s+)[0-9]{1,3}(?:\s*,\s*|\s+)[0-9]{1,3}(?:\s*(?:/|,)\s*[0-9]?\.?[0-9]+%?)?\s*\)";

/// Any color function with a flat argument list. Arguments are validated by
/// the parser, not here.
const FUNCTION_COLOR: &str = r"(?:rgba?|hsla?|hwb|lab|lch|oklab|oklch|color)\([^()]*\)";

const PROP_NAME: &str = r"(?:--[a-zA-Z0-9_-]+|[a-zA-Z-]+)";

/// `<property> : <color>`; group 1 is the color token. The trailing
/// terminator is checked separately.
pub(crate) static DECLARATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let named = format!(r"(?:{})\b", NAMED_COLORS.join("|"));
    let pattern = format!(
        r"(?i){PROP_NAME}\s*:\s*({named}|{HEX_COLOR}|{RGB_COLOR}|{FUNCTION_COLOR})"
    );
    Regex::new(&pattern).unwrap()
});
