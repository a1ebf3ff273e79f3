use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API responded with {status}: {message}")]
    Status { status: StatusCode, message: String },
}
