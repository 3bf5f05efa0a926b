use thiserror::Error;

/// Failure reported by an `HttpTransport` before any status was received
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Everything a backend call can fail with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401 from the backend. The session has already been cleared and the
    /// browser sent to the login page when this is returned.
    #[error("unauthorized")]
    Unauthorized,

    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Text shown to the user in a notification or inline form error
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Status {
                status,
                message: None,
            } => format!("Request failed ({}). Please try again.", status),
            ApiError::Network(_) => "Network error. Please try again later.".to_string(),
            ApiError::Decode(_) => "Unexpected response from the server.".to_string(),
            ApiError::Encode(_) => "Could not prepare the request.".to_string(),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Network(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::Status {
            status: 409,
            message: Some("License number already registered".into()),
        };
        assert_eq!(err.user_message(), "License number already registered");

        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), "Request failed (500). Please try again.");

        let err: ApiError = TransportError("connection refused".into()).into();
        assert_eq!(err.user_message(), "Network error. Please try again later.");
    }
}
