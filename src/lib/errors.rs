use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
    Browser(String),
}

impl AppError {
    /// HTTP status carried by the error, `0` when no response was received.
    pub fn status(&self) -> u16 {
        match self {
            AppError::Http { status, .. } => *status,
            _ => 0,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            AppError::Browser(message) => write!(formatter, "Browser error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn status_is_zero_without_response() {
        assert_eq!(AppError::Network("offline".to_string()).status(), 0);
        assert_eq!(AppError::Timeout("slow".to_string()).status(), 0);
        assert_eq!(
            AppError::Http {
                status: 403,
                message: "CSRF verification failed".to_string()
            }
            .status(),
            403
        );
    }

    #[test]
    fn display_includes_status_for_http_errors() {
        let err = AppError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (500): boom");
    }
}
