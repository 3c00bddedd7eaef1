//! Errors surfaced while shuffling up a dog.

use http::StatusCode;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// The image API was unreachable, timed out, or sent something unexpected.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The image API answered with a non-success status.
    #[error("Dog API request failed with status {status}: {url}")]
    NotFound { status: u16, url: String },

    /// The breed folder from the image URL has no record in the dataset.
    #[error("No breed record matches '{identifier}'")]
    Lookup { identifier: String },

    /// The bundled dataset failed to load.
    #[error("Breed dataset is invalid: {message}")]
    Dataset { message: String },

    #[error("Template rendering failed: {0}")]
    Render(String),
}

impl AppError {
    pub fn network<S: Into<String>>(message: S) -> Self {
        AppError::Network {
            message: message.into(),
        }
    }

    /// Failures worth another fetch: a fresh image may come from a breed we know.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Network { .. } | AppError::Lookup { .. } => true,
            _ => false,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Network { .. } | AppError::NotFound { .. } | AppError::Lookup { .. } => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Dataset { .. } | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The fallback message shown in place of the dog.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network { .. } => {
                "We couldn't reach the dog photo service. Give it another shuffle.".to_owned()
            }
            AppError::NotFound { status, .. } => format!(
                "The dog photo service didn't send a picture (error code {}).",
                status
            ),
            AppError::Lookup { identifier } => format!(
                "We found a dog but couldn't match its breed ({}) to our records.",
                identifier
            ),
            AppError::Dataset { .. } | AppError::Render(_) => {
                "Something went wrong on our side.".to_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Lookup {
            identifier: "appenzeller".to_owned(),
        };
        assert!(err.to_string().contains("appenzeller"));

        let err = AppError::NotFound {
            status: 503,
            url: "https://dog.ceo/api/breeds/image/random".to_owned(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("dog.ceo"));
    }

    #[test]
    fn only_network_and_lookup_are_retried() {
        assert!(AppError::network("timed out").is_retryable());
        assert!(AppError::Lookup {
            identifier: "x".to_owned()
        }
        .is_retryable());
        assert!(!AppError::NotFound {
            status: 404,
            url: String::new()
        }
        .is_retryable());
        assert!(!AppError::Render("bad".to_owned()).is_retryable());
    }

    #[test]
    fn user_facing_failures_map_to_bad_gateway() {
        assert_eq!(AppError::network("x").status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            AppError::Dataset {
                message: "x".to_owned()
            }
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let msg = AppError::NotFound {
            status: 500,
            url: String::new(),
        }
        .user_message();
        assert!(msg.contains("500"));
    }
}
