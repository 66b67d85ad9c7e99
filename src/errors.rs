use aws_sdk_rds::error::{DisplayErrorContext, SdkError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlockError {
    #[error("Invalid block input: {0}")]
    InvalidInput(String),

    #[error("Unknown block: {0}")]
    UnknownBlock(String),

    #[error("Failed to load connection settings: {0}")]
    ConfigError(String),

    #[error("Failed to call AWS API: {0}")]
    AwsError(String),

    #[error("Failed to serialize payload: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for BlockError {
    fn from(error: serde_json::Error) -> Self {
        BlockError::SerializationError(error.to_string())
    }
}

// Generic implementation for AWS SDK errors. DisplayErrorContext walks the
// source chain so the service error detail survives into the message.
impl<E, R> From<SdkError<E, R>> for BlockError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    fn from(error: SdkError<E, R>) -> Self {
        BlockError::AwsError(DisplayErrorContext(&error).to_string())
    }
}
