//! Rewrites CSS color declarations into another color notation.
//!
//! The pipeline is match → parse → classify alpha → render → splice:
//!
//! ```rust
//! use recolor_common::{ConversionOptions, TargetFormat};
//! use recolor_core::convert_text;
//!
//! let options = ConversionOptions::new(TargetFormat::Hex, 2, true);
//! let result = convert_text(":root { --accent: rgb(255 0 0); }", &options);
//! assert_eq!(result.output, ":root { --accent: #ff0000; }");
//! assert_eq!(result.edits_applied, 1);
//! ```
//!
//! Everything here is synchronous and holds no global state, so separate
//! buffers can be converted on separate threads.

pub mod alpha;
pub mod color;
pub mod convert;
pub mod edits;
pub mod matcher;
pub mod number;
pub mod render;

pub use alpha::had_explicit_alpha;
pub use color::{parse_color, ParsedColor, SourceColor};
pub use convert::{convert_range, convert_text, ConversionResult};
pub use edits::{apply_edits, Edit};
pub use matcher::{find_declaration_colors, DeclarationMatch};
pub use render::{render_color, RenderError};
