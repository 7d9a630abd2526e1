use thiserror::Error;

#[derive(Error, Debug)]
pub enum StampError {
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidComponent {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl StampError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            StampError::InvalidComponent { field, value, .. } => {
                format!("The {} value {} is not a valid calendar value", field, value)
            }
            StampError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            StampError::IoError(e) => format!("Could not read input: {}", e),
            StampError::SerializationError(e) => format!("Could not write JSON output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StampError::InvalidComponent { .. } => {
                "Check the date and time components, or run without --strict to format them as-is"
            }
            StampError::ConfigValidationError { .. } => {
                "Fix the configuration file; valid log levels are trace, debug, info, warn and error"
            }
            StampError::IoError(_) => "Make sure the configuration file exists and is readable",
            StampError::SerializationError(_) => "Run again without --json",
        }
    }
}

pub type Result<T> = std::result::Result<T, StampError>;
