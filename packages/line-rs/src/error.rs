use thiserror::Error;

/// Errors from the LINE Messaging API client
#[derive(Error, Debug)]
pub enum LineError {
    #[error("Invalid channel configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("Invalid webhook signature")]
    InvalidSignature,

    #[error("Malformed webhook body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid reply: {0}")]
    InvalidReply(String),

    #[error("Request to LINE failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LINE returned {status}: {body}")]
    Api { status: u16, body: String },
}
