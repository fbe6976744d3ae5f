//! Error types for the two fetch families (launch catalog, imagery)

use thiserror::Error;

/// A failed fetch.
///
/// Carries strings instead of the underlying errors so it can travel
/// inside UI messages, which must be `Clone`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connection reset...)
    #[error("network failure: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body did not have the expected shape
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Malformed(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Malformed(err.to_string())
    }
}

/// Invalid configuration value
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_errors_are_malformed() {
        let err = serde_json::from_str::<Vec<u32>>("{\"not\": \"a list\"}").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Malformed(_)));
    }

    #[test]
    fn test_display() {
        let err = FetchError::Status {
            status: 429,
            body: "OVER_RATE_LIMIT".into(),
        };
        assert_eq!(err.to_string(), "unexpected status 429: OVER_RATE_LIMIT");
    }
}
