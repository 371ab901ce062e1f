use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptnikError {
    #[error("Submission failed with status {status}: {reason}")]
    SubmissionFailed { status: u16, reason: String },

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, PromptnikError>;
