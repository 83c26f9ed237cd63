pub mod centering;
pub mod config;
pub mod correlation;
pub mod errors;

pub use centering::double_center;
pub use config::DcorConfig;
pub use correlation::{
    distance_correlation_of, distance_covariance, distance_covariance_with_config,
    distance_variance,
};
pub use errors::{DcorError, Result};
