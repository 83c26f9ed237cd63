use thiserror::Error;

pub type Result<T> = std::result::Result<T, DcorError>;

#[derive(Debug, Error, PartialEq)]
pub enum DcorError {
    #[error("Shape Mismatch: {0}")]
    ShapeMismatch(String),
}
