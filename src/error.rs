/// Centralized error types for til-index using thiserror
///
/// Provides domain-specific error types for better error handling and user-facing messages.
use thiserror::Error;

/// Main error type for til-index
#[derive(Error, Debug)]
pub enum TilError {
    #[error("Indexing error: {0}")]
    Indexing(#[from] IndexingError),

    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors related to walking and reading notes
#[derive(Error, Debug)]
pub enum IndexingError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Path is not a directory: {0}")]
    NotADirectory(String),

    #[error("Failed to walk directory: {0}")]
    WalkFailed(String),

    #[error("Failed to read file '{file}': {reason}")]
    FileReadFailed { file: String, reason: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {0}")]
    LoadFailed(String),

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    #[error("Invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),
}

/// Errors related to git operations
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open git repository: {0}")]
    OpenFailed(String),

    #[error("Failed to resolve git reference: {0}")]
    RefNotFound(String),

    #[error("Failed to iterate commits: {0}")]
    IterFailed(String),

    #[error("Failed to diff commits: {0}")]
    DiffFailed(String),
}

/// Errors related to webhook notifications
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Webhook request failed: {0}")]
    RequestFailed(String),

    #[error("Webhook returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
}

// Conversion from anyhow::Error to TilError
impl From<anyhow::Error> for TilError {
    fn from(err: anyhow::Error) -> Self {
        TilError::Other(format!("{:#}", err))
    }
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        NotifyError::RequestFailed(err.to_string())
    }
}

impl TilError {
    /// Create a new error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        TilError::Other(msg.into())
    }

    /// Check if this is a user error (bad input or configuration) vs system error
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            TilError::Config(_)
                | TilError::Git(GitError::RefNotFound(_))
                | TilError::Indexing(IndexingError::DirectoryNotFound(_))
                | TilError::Indexing(IndexingError::NotADirectory(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TilError::Indexing(IndexingError::DirectoryNotFound("/notes".to_string()));
        assert_eq!(err.to_string(), "Indexing error: Directory not found: /notes");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let til_err: TilError = io_err.into();
        assert!(matches!(til_err, TilError::Io(_)));
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("test error");
        let til_err: TilError = anyhow_err.into();
        assert!(matches!(til_err, TilError::Other(_)));
        assert_eq!(til_err.to_string(), "test error");
    }

    #[test]
    fn test_is_user_error() {
        let user_err = TilError::Config(ConfigError::MissingRequired("webhook_url".to_string()));
        assert!(user_err.is_user_error());

        let bad_ref = TilError::Git(GitError::RefNotFound("nope".to_string()));
        assert!(bad_ref.is_user_error());

        let system_err = TilError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "test"));
        assert!(!system_err.is_user_error());
    }

    #[test]
    fn test_file_read_failed_display() {
        let err = IndexingError::FileReadFailed {
            file: "go/channels.md".to_string(),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read file 'go/channels.md': permission denied"
        );
    }

    #[test]
    fn test_http_status_display() {
        let err = NotifyError::HttpStatus {
            status: 400,
            body: "Bad payload".to_string(),
        };
        assert_eq!(err.to_string(), "Webhook returned HTTP 400: Bad payload");
    }

    #[test]
    fn test_config_error_invalid_value() {
        let err = ConfigError::InvalidValue {
            key: "notify.excerpt_width".to_string(),
            reason: "must be greater than 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for 'notify.excerpt_width': must be greater than 0"
        );
    }

    #[test]
    fn test_error_chain() {
        let git_err = GitError::DiffFailed("bad tree".to_string());
        let til_err: TilError = git_err.into();
        assert!(matches!(til_err, TilError::Git(_)));
        assert_eq!(
            til_err.to_string(),
            "Git error: Failed to diff commits: bad tree"
        );
    }
}
