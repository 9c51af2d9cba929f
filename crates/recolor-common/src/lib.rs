pub mod errors;
pub mod types;

pub use errors::{ConfigError, ConvertError, RecolorError};
pub use types::{ConversionOptions, TargetFormat};

pub type Result<T> = std::result::Result<T, RecolorError>;
