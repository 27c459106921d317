use thiserror::Error;

/// Errors returned by the Gemini generateContent API
#[derive(Debug, Error)]
pub enum GeminiApiError {
    #[error("Invalid request (400): {message}")]
    InvalidRequest { message: String },

    #[error("Failed precondition (400): {message}")]
    FailedPrecondition { message: String },

    #[error("Authentication error (401): {message}")]
    Authentication { message: String },

    #[error("Permission error (403): {message}")]
    Permission { message: String },

    #[error("Not found (404): {message}")]
    NotFound { message: String },

    #[error("Quota exhausted (429): {message}")]
    QuotaExhausted { message: String },

    #[error("Internal API error (500): {message}")]
    Api { message: String },

    #[error("API unavailable (503): {message}")]
    Unavailable { message: String },

    #[error("Deadline exceeded (504): {message}")]
    DeadlineExceeded { message: String },

    /// Catch-all for unexpected RPC statuses
    #[error("Unexpected API error ({status}): {message}")]
    Unexpected { status: String, message: String },
}

impl GeminiApiError {
    pub fn from_status(status: &str, message: impl Into<String>) -> Self {
        let message = message.into();

        match status {
            "INVALID_ARGUMENT" => Self::InvalidRequest { message },
            "FAILED_PRECONDITION" => Self::FailedPrecondition { message },
            "UNAUTHENTICATED" => Self::Authentication { message },
            "PERMISSION_DENIED" => Self::Permission { message },
            "NOT_FOUND" => Self::NotFound { message },
            "RESOURCE_EXHAUSTED" => Self::QuotaExhausted { message },
            "INTERNAL" => Self::Api { message },
            "UNAVAILABLE" => Self::Unavailable { message },
            "DEADLINE_EXCEEDED" => Self::DeadlineExceeded { message },
            other => Self::Unexpected {
                status: other.to_string(),
                message,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_mapping() {
        let err = GeminiApiError::from_status("RESOURCE_EXHAUSTED", "quota exceeded for model");
        assert_eq!(
            err.to_string(),
            "Quota exhausted (429): quota exceeded for model"
        );

        let err = GeminiApiError::from_status("SOMETHING_NEW", "who knows");
        assert_eq!(err.to_string(), "Unexpected API error (SOMETHING_NEW): who knows");
    }
}
