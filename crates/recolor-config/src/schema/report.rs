//! Error report settings.

use serde::{Deserialize, Serialize};

/// `[report]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Failed tokens listed inline before the message is cut (valid range: 1-10000).
    pub max_errors_shown: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_errors_shown: 80,
        }
    }
}
