use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum SiteSageError {
    // Caller-supplied input errors
    #[error("Validation error for field '{field}': value '{value}' violates constraint '{constraint}'")]
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // Credential errors
    #[error("Authentication required for {operation}: {reason}")]
    AuthError {
        operation: String,
        reason: String,
    },

    // Non-success responses from the audit service
    #[error("Service error during {operation} (status {status_code}): {message}")]
    ServiceError {
        operation: String,
        status_code: u16,
        message: String,
    },

    // Transport errors
    #[error("Network error during {operation}: {reason}")]
    NetworkError {
        operation: String,
        url: Option<String>,
        reason: String,
    },

    // Parser errors
    #[error("Parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl SiteSageError {
    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn auth_error(operation: &str, reason: &str) -> Self {
        Self::AuthError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn service_error(operation: &str, status_code: u16, message: &str) -> Self {
        Self::ServiceError {
            operation: operation.to_string(),
            status_code,
            message: message.to_string(),
        }
    }

    pub fn network_error(operation: &str, url: Option<&str>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: url.map(|u| u.to_string()),
            reason: reason.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthError { .. })
            || matches!(self, Self::ServiceError { status_code: 401, .. })
    }

    /// Status code carried by a service error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ServiceError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ValidationError { .. } => true,
            Self::AuthError { .. } => true,
            Self::ServiceError { .. } => true,
            Self::NetworkError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::ParseError { .. } => false,
            Self::ConfigurationFileError { .. } => false,
            Self::SystemError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::ServiceError { status_code, .. } if *status_code >= 500 => ErrorSeverity::High,
            Self::ServiceError { .. } => ErrorSeverity::Medium,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::AuthError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ValidationError { suggestion, .. } => {
                let mut msg = self.to_string();
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::AuthError { .. } => {
                format!("{}\n💡 Run 'sitesage login' to sign in again", self)
            }
            Self::ServiceError { status_code, message, .. } => {
                let mut msg = message.clone();
                if *status_code == 401 || *status_code == 403 {
                    msg.push_str("\n💡 Your session may have expired - run 'sitesage login'");
                } else if *status_code >= 500 {
                    msg.push_str("\n💡 The audit service is having trouble - try again shortly");
                }
                msg
            }
            Self::NetworkError { url, .. } => {
                let mut msg = self.to_string();
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                msg.push_str("\n💡 Check your internet connection and the configured API URL");
                msg
            }
            Self::ParseError { line_number, .. } => {
                let mut msg = self.to_string();
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                msg
            }
            Self::ConfigurationError { field, suggestion, .. } => {
                let mut msg = self.to_string();
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { .. } => {
                format!("{}\n💡 Check file permissions and syntax", self)
            }
            Self::SystemError { .. } => self.to_string(),
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for sitesage operations
pub type SiteSageResult<T> = Result<T, SiteSageError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &SiteSageError) {
        let severity = error.severity();

        log::debug!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 You can retry the same command");
        }
    }
}

impl From<std::io::Error> for SiteSageError {
    fn from(error: std::io::Error) -> Self {
        SiteSageError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for SiteSageError {
    fn from(error: serde_json::Error) -> Self {
        SiteSageError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for SiteSageError {
    fn from(error: toml::de::Error) -> Self {
        SiteSageError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

impl From<toml::ser::Error> for SiteSageError {
    fn from(error: toml::ser::Error) -> Self {
        SiteSageError::SystemError {
            operation: "TOML serialization".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<url::ParseError> for SiteSageError {
    fn from(error: url::ParseError) -> Self {
        SiteSageError::ParseError {
            content_type: "URL".to_string(),
            line_number: None,
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for SiteSageError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return SiteSageError::ParseError {
                content_type: "JSON response".to_string(),
                line_number: None,
                reason: error.to_string(),
            };
        }

        SiteSageError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            reason: error.to_string(),
        }
    }
}
