use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum HazSheetError {
    #[error("Document read error: {message}")]
    DocumentRead { message: String },

    #[error("Reference table error: {message}")]
    ReferenceTable { message: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl HazSheetError {
    pub fn document_read(message: impl Into<String>) -> Self {
        Self::DocumentRead {
            message: message.into(),
        }
    }

    pub fn reference_table(message: impl Into<String>) -> Self {
        Self::ReferenceTable {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DocumentRead { .. } => "DOCUMENT_READ_ERROR",
            Self::ReferenceTable { .. } => "REFERENCE_TABLE_ERROR",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::DocumentRead { .. } => 422,
            Self::ReferenceTable { .. } => 500,
            Self::Validation { .. } => 400,
            Self::Configuration { .. } => 500,
            Self::NotFound { .. } => 404,
            Self::Internal { .. } => 500,
        }
    }
}

pub type HazSheetResult<T> = Result<T, HazSheetError>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl From<HazSheetError> for ErrorResponse {
    fn from(error: HazSheetError) -> Self {
        Self {
            error: error.to_string(),
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }
}

// Conversion from common error types
impl From<pdf_extract::OutputError> for HazSheetError {
    fn from(error: pdf_extract::OutputError) -> Self {
        Self::document_read(error.to_string())
    }
}

impl From<calamine::XlsxError> for HazSheetError {
    fn from(error: calamine::XlsxError) -> Self {
        Self::reference_table(error.to_string())
    }
}

impl From<csv::Error> for HazSheetError {
    fn from(error: csv::Error) -> Self {
        Self::internal(error.to_string())
    }
}

impl From<std::io::Error> for HazSheetError {
    fn from(error: std::io::Error) -> Self {
        Self::internal(error.to_string())
    }
}

impl From<serde_json::Error> for HazSheetError {
    fn from(error: serde_json::Error) -> Self {
        Self::validation("JSON", error.to_string())
    }
}
