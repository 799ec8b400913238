use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Key not found: {key}")]
    NotFound { key: String },

    #[error("Lookup source failed: {message}")]
    Source { message: String },

    #[error("Scripted outputs exhausted after {calls} calls")]
    SequenceExhausted { calls: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arithmetic,
    Lookup,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LookupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LookupError::DivisionByZero => ErrorCategory::Arithmetic,
            LookupError::NotFound { .. }
            | LookupError::Source { .. }
            | LookupError::SequenceExhausted { .. } => ErrorCategory::Lookup,
            LookupError::IoError(_) => ErrorCategory::Io,
            LookupError::TomlError(_)
            | LookupError::SerializationError(_)
            | LookupError::ConfigValidationError { .. }
            | LookupError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Arithmetic | ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for a failed command.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// Short message suitable for printing to a terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            LookupError::DivisionByZero => "Cannot take a remainder by zero".to_string(),
            LookupError::NotFound { key } => format!("No value stored for '{}'", key),
            LookupError::Source { message } => format!("The store could not answer: {}", message),
            LookupError::SequenceExhausted { .. } => "No scripted outputs left".to_string(),
            LookupError::IoError(e) => format!("Could not read the store file: {}", e),
            LookupError::TomlError(e) => {
                format!("The store file is not valid TOML: {}", e.message())
            }
            LookupError::SerializationError(_) => "Could not encode the result".to_string(),
            LookupError::ConfigValidationError { field, .. }
            | LookupError::InvalidConfigValueError { field, .. } => {
                format!("Invalid configuration for '{}'", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LookupError::DivisionByZero => "Use a non-zero divisor",
            LookupError::NotFound { .. } => "Add the key to the [values] table of the store file",
            LookupError::Source { .. } => "Check that the store is reachable and retry",
            LookupError::SequenceExhausted { .. } => "Script more outputs for the source",
            LookupError::IoError(_) => "Check the --store path and its permissions",
            LookupError::TomlError(_) | LookupError::SerializationError(_) => {
                "Fix the syntax of the store file"
            }
            LookupError::ConfigValidationError { .. }
            | LookupError::InvalidConfigValueError { .. } => "Correct the reported field",
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
