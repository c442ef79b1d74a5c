use crate::domain::model::OfferingId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GymError {
    #[error("Unknown offering: {offering_id}")]
    UnknownOffering { offering_id: OfferingId },

    #[error("No queue line for offering {offering_id}")]
    LineNotFound { offering_id: OfferingId },

    #[error("Quantity delta must be non-zero")]
    ZeroDelta,

    #[error("Quantity overflow for offering {offering_id}")]
    QuantityOverflow { offering_id: OfferingId },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {}", .errors.join(", "))]
    ValidationError { errors: Vec<String> },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Submission failed: {message}")]
    SubmissionError { message: String },

    #[error("Authentication failed: {message}")]
    AuthError { message: String },
}

impl GymError {
    /// 給使用者看的訊息 (toast)
    pub fn user_friendly_message(&self) -> String {
        match self {
            GymError::UnknownOffering { .. } => {
                "This program is no longer available.".to_string()
            }
            GymError::LineNotFound { .. } => "This program is not in your plan.".to_string(),
            GymError::ZeroDelta | GymError::QuantityOverflow { .. } => {
                "Unable to change the quantity of this program.".to_string()
            }
            GymError::ValidationError { errors } => errors.join(", "),
            GymError::SubmissionError { .. } => {
                "Submission failed. Please try again.".to_string()
            }
            GymError::AuthError { .. } => "Login failed. Please try again.".to_string(),
            GymError::ConfigError { message } => format!("Configuration problem: {}", message),
            GymError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            GymError::IoError(_)
            | GymError::SerializationError(_)
            | GymError::StorageError { .. } => "Local storage is unavailable.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GymError>;
