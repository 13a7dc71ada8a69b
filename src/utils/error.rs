use thiserror::Error;

#[derive(Error, Debug)]
pub enum HiringError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API responded with status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("API responded with an empty body")]
    EmptyBody,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl HiringError {
    /// Errors that can only come out of the fetch boundary.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            HiringError::ApiError(_)
                | HiringError::UnexpectedStatus { .. }
                | HiringError::EmptyBody
                | HiringError::SerializationError(_)
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HiringError::ApiError(e) if e.is_timeout() => {
                "The server took too long to respond.".to_string()
            }
            HiringError::ApiError(e) if e.is_connect() => {
                "Could not connect to the server.".to_string()
            }
            HiringError::ApiError(_) | HiringError::UnexpectedStatus { .. } => {
                "Something went wrong while loading candidates.".to_string()
            }
            HiringError::EmptyBody | HiringError::SerializationError(_) => {
                "The server returned data that could not be read.".to_string()
            }
            HiringError::CsvError(_) | HiringError::IoError(_) => {
                format!("Could not write output: {}", self)
            }
            HiringError::ConfigError { .. }
            | HiringError::ConfigValidationError { .. }
            | HiringError::InvalidConfigValueError { .. }
            | HiringError::MissingConfigError { .. } => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HiringError::ApiError(_) | HiringError::UnexpectedStatus { .. } => {
                "Check your network connection and retry"
            }
            HiringError::EmptyBody | HiringError::SerializationError(_) => {
                "Verify the endpoint serves a JSON array of candidates"
            }
            HiringError::CsvError(_) | HiringError::IoError(_) => {
                "Check that stdout is writable"
            }
            HiringError::ConfigError { .. }
            | HiringError::ConfigValidationError { .. }
            | HiringError::InvalidConfigValueError { .. }
            | HiringError::MissingConfigError { .. } => {
                "Fix the configuration file or command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HiringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failures_are_classified() {
        assert!(HiringError::UnexpectedStatus { status: 503 }.is_fetch_failure());
        assert!(HiringError::EmptyBody.is_fetch_failure());
        assert!(!HiringError::MissingConfigError {
            field: "source.endpoint".to_string()
        }
        .is_fetch_failure());
    }

    #[test]
    fn test_status_error_message() {
        let err = HiringError::UnexpectedStatus { status: 404 };
        assert_eq!(err.to_string(), "API responded with status 404");
        assert_eq!(
            err.user_friendly_message(),
            "Something went wrong while loading candidates."
        );
    }
}
