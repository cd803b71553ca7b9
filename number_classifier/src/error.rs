use serde_json::{json, Value};

/// Everything that stops a request from producing a classification.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    #[error("Missing number parameter")]
    MissingInput,

    #[error("Invalid number format")]
    InvalidFormat(String),

    #[error("{0}")]
    Internal(String),
}

impl ClassifyError {
    pub fn status_code(&self) -> u16 {
        match self {
            ClassifyError::MissingInput | ClassifyError::InvalidFormat(_) => 400,
            ClassifyError::Internal(_) => 500,
        }
    }

    pub fn body(&self) -> Value {
        match self {
            ClassifyError::MissingInput => json!({
                "number": null,
                "error": self.to_string(),
            }),
            ClassifyError::InvalidFormat(raw) => json!({
                "number": raw,
                "error": self.to_string(),
            }),
            ClassifyError::Internal(message) => json!({
                "number": null,
                "error": "Internal server error",
                "message": message,
            }),
        }
    }
}
