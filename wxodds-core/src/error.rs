//! Errors raised while talking to the remote weather service.

use thiserror::Error;

/// Alert shown for any failed export.
pub const DOWNLOAD_UNAVAILABLE: &str = "Download not available";

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{endpoint} failed with status {status}")]
    Status { endpoint: String, status: u16 },

    /// The request never produced a response.
    #[error("network error calling {endpoint}: {message}")]
    Network { endpoint: String, message: String },

    /// The body was not the JSON we expected.
    #[error("could not read response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl ApiError {
    /// Short diagnostic for the blocking alert shown after a failed check.
    pub fn alert_message(&self) -> String {
        match self {
            ApiError::Status { status, .. } => format!("Error fetching data: HTTP {status}"),
            ApiError::Network { message, .. } => format!("Error fetching data: {message}"),
            ApiError::Decode { message, .. } => format!("Error reading data: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_alert_mentions_status() {
        let err = ApiError::Status {
            endpoint: "/check".to_string(),
            status: 502,
        };
        assert!(err.alert_message().contains("502"));
        assert_eq!(err.to_string(), "/check failed with status 502");
    }

    #[test]
    fn decode_alert_mentions_reason() {
        let err = ApiError::Decode {
            endpoint: "/check".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert!(err.alert_message().starts_with("Error reading data"));
    }
}
