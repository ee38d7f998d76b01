use thiserror::Error;

/// Failures of a check-in run.
///
/// A response the airline decoded as a business failure (wrong locator, already
/// checked in, too early) is not one of these; it comes back as a normal
/// [`CheckInResponse`](crate::models::CheckInResponse).
#[derive(Debug, Error)]
pub enum CheckinError {
    #[error("{0} is required and cannot be empty")]
    MissingField(&'static str),

    #[error("Invalid check-in endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode check-in response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected check-in response: {0}")]
    UnexpectedBody(&'static str),
}

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Email provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Email provider returned status {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Email to {recipient} was {status}: {reason}")]
    Rejected {
        recipient: String,
        status: String,
        reason: String,
    },

    #[error("Template render returned no HTML")]
    MissingHtml,
}
