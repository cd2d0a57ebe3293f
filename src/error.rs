use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a folder: {0}")]
    NotAFolder(String),

    #[error("Error loading: {path}")]
    Load {
        path: String,
        #[source]
        source: VaultError,
    },

    #[error("Error rendering folder '{path}': {reason}")]
    Render { path: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failures raised by a vault lookup
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Vault unavailable: {0}")]
    Unavailable(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = ConfigError::Invalid("hover_delay_ms must be 1-60000".into());
        assert!(err.to_string().contains("hover_delay_ms"));
    }

    #[test]
    fn test_error_conversion() {
        let config_err = ConfigError::Invalid("test".into());
        let explorer_err: ExplorerError = config_err.into();
        assert!(matches!(explorer_err, ExplorerError::Config(_)));
    }

    #[test]
    fn test_inline_column_messages() {
        let err = ExplorerError::NotAFolder("notes/todo.md".into());
        assert_eq!(err.to_string(), "Not a folder: notes/todo.md");

        let err = ExplorerError::Load {
            path: "notes".into(),
            source: VaultError::Unavailable("index not ready".into()),
        };
        assert_eq!(err.to_string(), "Error loading: notes");
    }
}
