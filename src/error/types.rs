//! Error types for the Bunny Stream client
//!
//! Every failure the client can produce is one variant of [`Error`]: configuration
//! problems, preconditions checked before any I/O, transport failures and the
//! status-code conditions returned by the API.

use thiserror::Error;

/// Maximum number of body bytes kept in [`ApiError::message`].
pub const MAX_ERROR_MESSAGE_BYTES: usize = 200;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request errors raised by reqwest
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or incomplete configuration
    #[error("invalid config: {field}: {message}")]
    InvalidConfig {
        /// The configuration field at fault
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// Transport failures reported by a non-reqwest transport
    #[error("Network error: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    #[error("video id is required")]
    VideoIdRequired,

    #[error("title is required")]
    TitleRequired,

    #[error("resolution is required")]
    ResolutionRequired,

    #[error("cdn hostname required - set cdn.hostname in Settings")]
    CdnHostnameRequired,

    #[error("embed token key required - set embed.token_key in Settings")]
    EmbedTokenKeyRequired,

    #[error("cdn token key required - set cdn.token_key in Settings")]
    CdnTokenKeyRequired,

    /// 401
    #[error("unauthorized - check your API key")]
    Unauthorized,

    /// 403
    #[error("forbidden")]
    Forbidden,

    /// 404
    #[error("video not found")]
    VideoNotFound,

    /// 429
    #[error("rate limited - too many requests")]
    RateLimited,

    /// 500
    #[error("internal server error")]
    InternalServer,

    /// 503
    #[error("service unavailable")]
    ServiceUnavailable,

    /// 400 and any status without a dedicated variant
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

/// Error response from the Bunny Stream API that has no dedicated [`Error`] variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code
    pub status_code: u16,
    /// Response body, truncated to [`MAX_ERROR_MESSAGE_BYTES`]
    pub message: String,
    /// Full response body
    pub body: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "bunny stream api error (status {})", self.status_code)
        } else {
            write!(
                f,
                "bunny stream api error (status {}): {}",
                self.status_code, self.message
            )
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Build an API error from a status code and the raw response body
    pub fn new(status_code: u16, body: &[u8]) -> Self {
        let body = String::from_utf8_lossy(body).into_owned();
        Self {
            status_code,
            message: truncate_message(&body),
            body,
        }
    }
}

// Bunny does not document a structured error body, so the raw text is the message.
fn truncate_message(body: &str) -> String {
    if body.len() <= MAX_ERROR_MESSAGE_BYTES {
        return body.to_string();
    }

    let mut end = MAX_ERROR_MESSAGE_BYTES;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

impl Error {
    /// Create a configuration error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Map a response status to its error, or `None` for the success codes
    /// (200, 201, 202, 204).
    pub fn from_status(status_code: u16, body: &[u8]) -> Option<Self> {
        match status_code {
            200 | 201 | 202 | 204 => None,
            401 => Some(Self::Unauthorized),
            403 => Some(Self::Forbidden),
            404 => Some(Self::VideoNotFound),
            429 => Some(Self::RateLimited),
            500 => Some(Self::InternalServer),
            503 => Some(Self::ServiceUnavailable),
            _ => Some(Self::Api(ApiError::new(status_code, body))),
        }
    }

    /// HTTP status behind a protocol error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Unauthorized => Some(401),
            Error::Forbidden => Some(403),
            Error::VideoNotFound => Some(404),
            Error::RateLimited => Some(429),
            Error::InternalServer => Some(500),
            Error::ServiceUnavailable => Some(503),
            Error::Api(e) => Some(e.status_code),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this is a retryable error
    ///
    /// The client does not retry on its own; this is for callers that do.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network { .. } => true,
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::RateLimited | Error::InternalServer | Error::ServiceUnavailable => true,
            _ => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Http(..) => "http",
            Error::Json(..) => "json",
            Error::Toml(..) => "toml",
            Error::Url(..) => "url",
            Error::Io(..) => "io",
            Error::InvalidConfig { .. } => "config",
            Error::Network { .. } => "network",
            Error::VideoIdRequired
            | Error::TitleRequired
            | Error::ResolutionRequired
            | Error::CdnHostnameRequired
            | Error::EmbedTokenKeyRequired
            | Error::CdnTokenKeyRequired => "precondition",
            Error::Unauthorized | Error::Forbidden => "auth",
            Error::VideoNotFound => "not_found",
            Error::RateLimited => "rate_limit",
            Error::InternalServer | Error::ServiceUnavailable => "server",
            Error::Api(..) => "api",
        }
    }
}
