use common_types::ErrorEnvelope;
use reqwest::StatusCode;
use thiserror::Error;

pub type ImmichResult<T> = Result<T, ImmichError>;

#[derive(Error, Debug)]
pub enum ImmichError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to build request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// Non-2xx response whose body was not an error envelope.
    #[error("Server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The server explained what went wrong.
    #[error("{domain} ({code}): {message}")]
    Api {
        domain: String,
        code: i64,
        message: String,
    },

    #[error("Could not decode server response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No albums found")]
    NoAlbums,
}

impl From<ErrorEnvelope> for ImmichError {
    fn from(envelope: ErrorEnvelope) -> Self {
        Self::Api {
            domain: envelope.error,
            code: envelope.status_code,
            message: envelope.message,
        }
    }
}

impl ImmichError {
    /// Text suitable for showing to a person. API errors show the server's own message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
