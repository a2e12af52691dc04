use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Document error in '{name}': {reason}")]
    DocumentError { name: String, reason: String },

    #[error("Project not found: id {id}")]
    ProjectNotFound { id: i64 },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Document,
    Config,
    Server,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::IoError(_) => ErrorCategory::Storage,
            FolioError::SerializationError(_)
            | FolioError::DocumentError { .. }
            | FolioError::ProjectNotFound { .. } => ErrorCategory::Document,
            FolioError::ConfigValidationError { .. }
            | FolioError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            FolioError::ServerError { .. } => ErrorCategory::Server,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FolioError::ProjectNotFound { .. } => ErrorSeverity::Low,
            FolioError::SerializationError(_) | FolioError::DocumentError { .. } => {
                ErrorSeverity::Medium
            }
            FolioError::IoError(_) => ErrorSeverity::High,
            FolioError::ConfigValidationError { .. }
            | FolioError::InvalidConfigValueError { .. }
            | FolioError::ServerError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FolioError::IoError(e) => format!("File access failed: {}", e),
            FolioError::SerializationError(e) => format!("Invalid JSON: {}", e),
            FolioError::DocumentError { name, reason } => {
                format!("Document '{}' could not be processed: {}", name, reason)
            }
            FolioError::ProjectNotFound { id } => {
                format!("No project with id {} exists", id)
            }
            FolioError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            FolioError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            FolioError::ServerError { message } => format!("Server failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Storage => {
                "Check that the data directory exists and is writable".to_string()
            }
            ErrorCategory::Document => {
                "Inspect the JSON document on disk; deleting it restores the default on restart"
                    .to_string()
            }
            ErrorCategory::Config => {
                "Fix the configuration value and restart the server".to_string()
            }
            ErrorCategory::Server => {
                "Check whether the bind address is already in use".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
