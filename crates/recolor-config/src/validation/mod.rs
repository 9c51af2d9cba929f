//! Configuration validation.
//!
//! Checks numeric ranges and collects every problem into a single
//! `ConfigError`.

mod helpers;


use crate::schema::RecolorConfig;
use recolor_common::types::MAX_PRECISION;
use recolor_common::ConfigError;

use helpers::validate_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &RecolorConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_convert(&mut errors, config);
    validate_report(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_convert(errors: &mut Vec<String>, config: &RecolorConfig) {
    validate_range(
        errors,
        "convert.precision",
        config.convert.precision,
        0,
        u32::from(MAX_PRECISION),
    );
}

fn validate_report(errors: &mut Vec<String>, config: &RecolorConfig) {
    validate_range(
        errors,
        "report.max_errors_shown",
        config.report.max_errors_shown,
        1,
        10_000,
    );
}
