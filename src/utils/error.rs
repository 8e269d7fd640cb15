use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeatingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Could not open input file '{path}': {message}")]
    InputUnavailable { path: String, message: String },

    #[error("Could not export seating plan to '{path}': {message}")]
    ExportFailed { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
    Encoding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SeatingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SeatingError::InputUnavailable { .. } => ErrorCategory::Input,
            SeatingError::IoError(_) | SeatingError::ExportFailed { .. } => ErrorCategory::Output,
            SeatingError::CsvError(_) | SeatingError::SerializationError(_) => {
                ErrorCategory::Encoding
            }
            SeatingError::ConfigError { .. }
            | SeatingError::ConfigValidationError { .. }
            | SeatingError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Export failures never abort a run; everything that stops the plan
    /// from being built does.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SeatingError::ExportFailed { .. } => ErrorSeverity::Low,
            SeatingError::CsvError(_) | SeatingError::SerializationError(_) => {
                ErrorSeverity::Medium
            }
            SeatingError::InputUnavailable { .. }
            | SeatingError::ConfigError { .. }
            | SeatingError::ConfigValidationError { .. }
            | SeatingError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SeatingError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() >= ErrorSeverity::High
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SeatingError::InputUnavailable { path, .. } => {
                format!("Please make sure '{}' is in the same folder!", path)
            }
            SeatingError::ExportFailed { path, .. } => {
                format!("Check that the directory for '{}' exists and is writable", path)
            }
            SeatingError::IoError(_) => "Check file permissions and free disk space".to_string(),
            SeatingError::CsvError(_) | SeatingError::SerializationError(_) => {
                "Try exporting with --format text".to_string()
            }
            SeatingError::ConfigError { .. }
            | SeatingError::ConfigValidationError { .. }
            | SeatingError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SeatingError::InputUnavailable { path, .. } => {
                format!("Error: Could not open file '{}'.", path)
            }
            SeatingError::ExportFailed { .. } => {
                "Error: Could not open file to export.".to_string()
            }
            SeatingError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SeatingError>;
