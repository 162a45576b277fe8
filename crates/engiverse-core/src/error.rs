//! Error types for EngiVerse

use thiserror::Error;

/// Result type alias using EngiVerse's Error
pub type Result<T> = std::result::Result<T, Error>;

/// EngiVerse error types with helpful messages and suggestions
#[derive(Error, Debug)]
pub enum Error {
    // Entity errors (E001-E099)
    #[error("Project '{0}' not found. Run `engiverse discover` to see all projects.")]
    ProjectNotFound(String),

    #[error("Project '{0}' has no AI analysis yet.")]
    AnalysisUnavailable(String),

    // Catalog errors (E300-E399)
    #[error("Failed to load catalog from {path}: {message}")]
    CatalogLoad { path: String, message: String },

    #[error("Catalog is not valid project JSON: {0}")]
    CatalogParse(#[from] serde_json::Error),

    // Config errors (E600-E699)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // Input errors (E800-E899)
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    // Generic errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a validation error for a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProjectNotFound(_) => "E001",
            Self::AnalysisUnavailable(_) => "E002",
            Self::CatalogLoad { .. } => "E300",
            Self::CatalogParse(_) => "E301",
            Self::ConfigError(_) => "E600",
            Self::Validation { .. } => "E800",
            Self::Io(_) => "E9999",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ProjectNotFound(_) => Some("engiverse discover".to_string()),
            Self::AnalysisUnavailable(id) => Some(format!("engiverse show {}", id)),
            Self::CatalogLoad { .. } | Self::CatalogParse(_) => {
                Some("engiverse config get catalog.path".to_string())
            }
            Self::ConfigError(_) => Some("engiverse config list".to_string()),
            Self::Validation { field, .. } if field == "domain" => {
                Some("engiverse options".to_string())
            }
            _ => None,
        }
    }
}
