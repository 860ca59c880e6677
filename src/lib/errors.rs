use thiserror::Error;

/// Failures surfaced by HTTP helpers and auth flows.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Http {
        status: u16,
        message: Option<String>,
    },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Not signed in")]
    Unauthenticated,
}

impl AppError {
    /// Message supplied by the server in an error body, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Http { status: 401, .. })
    }
}
