use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Invalid input: {0}")]
    ValidationError(String),

    #[error("Invalid address: {0}")]
    InvalidAddressError(String),

    #[error("Invalid amount: {0}")]
    InvalidAmountError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

// Decode failures (missing key, wrong type, bad syntax) are all validation failures
impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::ValidationError(e.to_string())
    }
}

impl SdkError {
    pub fn is_validation(&self) -> bool {
        matches!(self, SdkError::ValidationError(_))
    }
}
