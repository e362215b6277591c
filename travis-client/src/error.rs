//! Error types for the Travis client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Travis client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived (DNS, connect, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The token was rejected (401/403)
    #[error("Unauthorized (status {status}): {message}")]
    Unauthorized {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// API returned an unexpected status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Remote state never reached the expected value
    #[error("Timed out waiting for {operation} after {attempts} attempt(s)")]
    Timeout {
        /// What was being waited for
        operation: String,
        /// Number of polls performed
        attempts: u32,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Classify a non-success response
    ///
    /// 401 and 403 become [`ClientError::Unauthorized`], 404 becomes
    /// [`ClientError::NotFound`] naming `resource`, everything else is an
    /// [`ClientError::ApiError`].
    pub fn from_status(status: u16, resource: &str, body: impl Into<String>) -> Self {
        match status {
            401 | 403 => Self::Unauthorized {
                status,
                message: body.into(),
            },
            404 => Self::NotFound(resource.to_string()),
            _ => Self::api_error(status, body),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_)) || matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a polling timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::NotFound(_) | Self::Unauthorized { .. } => true,
            Self::ApiError { status, .. } => *status >= 400 && *status < 500,
            _ => false,
        }
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classification() {
        assert!(matches!(
            ClientError::from_status(401, "user", "bad token"),
            ClientError::Unauthorized { status: 401, .. }
        ));
        assert!(matches!(
            ClientError::from_status(403, "user", ""),
            ClientError::Unauthorized { status: 403, .. }
        ));
        assert!(ClientError::from_status(404, "repo cs50/hello", "").is_not_found());
        assert!(ClientError::from_status(500, "user", "").is_server_error());
        assert!(ClientError::from_status(409, "user", "").is_client_error());
    }

    #[test]
    fn test_timeout_message() {
        let err = ClientError::Timeout {
            operation: "activation of cs50/hello".to_string(),
            attempts: 10,
        };
        assert!(err.is_timeout());
        assert_eq!(
            err.to_string(),
            "Timed out waiting for activation of cs50/hello after 10 attempt(s)"
        );
    }
}
