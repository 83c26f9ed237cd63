use serde::{Deserialize, Serialize};

/// Parameters for the correlation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DcorConfig {
    /// Replace a negative cross-product sum with zero before taking the
    /// covariance square root. Off by default: the raw sum goes under the
    /// root, and a negative sum yields NaN.
    pub clamp_negative_covariance: bool,
}

impl Default for DcorConfig {
    fn default() -> Self {
        Self {
            clamp_negative_covariance: false,
        }
    }
}

impl DcorConfig {
    pub fn new(clamp_negative_covariance: bool) -> Self {
        Self {
            clamp_negative_covariance,
        }
    }
}
