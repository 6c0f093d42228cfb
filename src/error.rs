//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("WebSocket error: {0}")]
    Ws(#[from] WsError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl SdkError {
    /// The venue-reported message, if this error came from the venue.
    pub fn venue_message(&self) -> Option<&str> {
        match self {
            SdkError::Http(e) => e.venue_message(),
            _ => None,
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The venue answered with `"ok": false` or a status without a more specific variant.
    #[error("Venue error ({status}): {message}")]
    Venue { status: u16, message: String },

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited: {message}")]
    RateLimited {
        message: String,
        retry_after_ms: Option<u64>,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Undecodable response body: {0}")]
    Decode(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    /// The venue-reported message carried by this error, if any.
    pub fn venue_message(&self) -> Option<&str> {
        match self {
            HttpError::Venue { message, .. }
            | HttpError::Unauthorized(message)
            | HttpError::NotFound(message)
            | HttpError::BadRequest(message)
            | HttpError::RateLimited { message, .. } => Some(message),
            HttpError::ServerError { body, .. } => Some(body),
            _ => None,
        }
    }

    /// HTTP status code associated with this error, if known.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Venue { status, .. } | HttpError::ServerError { status, .. } => {
                Some(*status)
            }
            HttpError::RateLimited { .. } => Some(429),
            HttpError::Unauthorized(_) => Some(401),
            HttpError::NotFound(_) => Some(404),
            HttpError::BadRequest(_) => Some(400),
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// WebSocket errors.
#[derive(Error, Debug)]
pub enum WsError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// The feed sent `"ok": false`.
    #[error("Protocol error: {0}")]
    ProtocolError(String),
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated: no API key configured")]
    NotAuthenticated,

    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_message_passes_through_sdk_error() {
        let err: SdkError = HttpError::Venue {
            status: 200,
            message: "No venue exists with the symbol NOPE".into(),
        }
        .into();
        assert_eq!(
            err.venue_message(),
            Some("No venue exists with the symbol NOPE")
        );
        assert_eq!(
            err.to_string(),
            "HTTP error: Venue error (200): No venue exists with the symbol NOPE"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(HttpError::NotFound("x".into()).status(), Some(404));
        assert_eq!(HttpError::Unauthorized("x".into()).status(), Some(401));
        assert_eq!(HttpError::Timeout.status(), None);
        assert!(SdkError::Validation("v".into()).venue_message().is_none());
    }
}
