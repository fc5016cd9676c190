use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DracoError {
    #[error("General error: {0}")]
    DracoError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(String),
}

pub type Status = Result<(), DracoError>;

pub fn error_status(msg: impl Into<String>) -> DracoError {
    DracoError::DracoError(msg.into())
}

pub fn invalid_parameter(msg: impl Into<String>) -> DracoError {
    DracoError::InvalidParameter(msg.into())
}
