//! Error types for Toolshed
//!
//! Centralized error handling using thiserror. Configuration errors are raised
//! while the registry is assembled; load errors come from component loaders.

use thiserror::Error;

use crate::tools::LoadError;

/// Malformed or conflicting tool descriptors, caught when the registry is built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required descriptor field is empty
    #[error("Tool '{tool}' is missing required field '{field}'")]
    MissingField { tool: String, field: &'static str },

    /// A route path is not of the form `/segment...`
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// Two descriptors claim the same primary path
    #[error("Duplicate path '{path}' registered by '{first}' and '{second}'")]
    DuplicatePath { path: String, first: String, second: String },

    /// A tool lists the same redirect alias twice
    #[error("Tool '{tool}' lists redirect '{redirect}' more than once")]
    DuplicateRedirect { redirect: String, tool: String },

    /// A redirect alias shadows a primary path or another tool's alias
    #[error("Redirect '{redirect}' of '{tool}' collides with '{owner}'")]
    RedirectCollision { redirect: String, tool: String, owner: String },
}

/// All error types that can occur in Toolshed
#[derive(Debug, Error)]
pub enum ToolshedError {
    /// Registry assembly failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No tool is routed at the given path
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A component loader rejected
    #[error("Failed to load component for '{path}': {source}")]
    Load {
        path: String,
        #[source]
        source: LoadError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Toolshed operations
pub type Result<T> = std::result::Result<T, ToolshedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_error() {
        let err = ConfigError::MissingField {
            tool: "/qrcode-generator".to_string(),
            field: "description",
        };
        assert_eq!(
            err.to_string(),
            "Tool '/qrcode-generator' is missing required field 'description'"
        );
    }

    #[test]
    fn test_duplicate_path_error() {
        let err = ConfigError::DuplicatePath {
            path: "/dup".to_string(),
            first: "A".to_string(),
            second: "B".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate path '/dup' registered by 'A' and 'B'");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: ToolshedError = ConfigError::InvalidPath {
            path: "tool".to_string(),
            reason: "must start with '/'".to_string(),
        }
        .into();
        assert!(matches!(err, ToolshedError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error: Invalid path 'tool'"));
    }

    #[test]
    fn test_unknown_tool_error() {
        let err = ToolshedError::UnknownTool("/nope".to_string());
        assert_eq!(err.to_string(), "Unknown tool: /nope");
    }

    #[test]
    fn test_load_error_display() {
        let err = ToolshedError::Load {
            path: "/bip39-generator".to_string(),
            source: LoadError::Unavailable("bundle missing".to_string()),
        };
        assert!(err.to_string().contains("/bip39-generator"));
        assert!(err.to_string().contains("bundle missing"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ToolshedError = io_err.into();
        assert!(matches!(err, ToolshedError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<usize> {
            Ok(3)
        }

        fn returns_err() -> Result<usize> {
            Err(ToolshedError::UnknownTool("/x".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
