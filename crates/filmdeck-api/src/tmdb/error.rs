//! `FetchError` - failure taxonomy for TMDB requests.

use thiserror::Error;

/// Errors produced by a single TMDB fetch.
///
/// `Network` and `HttpStatus` are both network failures: the transport
/// failed or the server answered outside the 2xx range. `Parse` means the
/// body arrived but was not the expected JSON.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum FetchError {
    /// The request URL could not be built.
    #[error("invalid request URL for {path}: {source}")]
    InvalidUrl {
        /// Endpoint path relative to the base URL.
        path: String,
        /// Underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The transport failed (connect, TLS, timeout, body read).
    #[error("network error for {path}: {source}")]
    Network {
        /// Endpoint path relative to the base URL.
        path: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("TMDB API error (HTTP {status}) for {path}: {message}")]
    HttpStatus {
        /// Endpoint path relative to the base URL.
        path: String,
        /// HTTP status code.
        status: u16,
        /// TMDB `status_message` and `status_code`, or the raw body when it
        /// is not a TMDB error.
        message: String,
    },

    /// The response body was not valid JSON for the expected shape.
    #[error("failed to decode JSON response for {path}: {source}")]
    Parse {
        /// Endpoint path relative to the base URL.
        path: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Returns `true` for transport failures and non-success statuses.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::HttpStatus { .. })
    }

    /// Returns `true` when the body could not be decoded.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_http_status_is_network() {
        // Arrange
        let err = FetchError::HttpStatus {
            path: String::from("movie/popular"),
            status: 503,
            message: String::from("Service Unavailable"),
        };

        // Act & Assert
        assert!(err.is_network());
        assert!(!err.is_parse());
        assert_eq!(
            err.to_string(),
            "TMDB API error (HTTP 503) for movie/popular: Service Unavailable"
        );
    }

    #[test]
    fn test_parse_error_is_not_network() {
        // Arrange
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = FetchError::Parse {
            path: String::from("search/multi"),
            source,
        };

        // Act & Assert
        assert!(err.is_parse());
        assert!(!err.is_network());
        assert!(err.to_string().contains("search/multi"));
    }
}
