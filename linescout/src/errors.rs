use std::path::PathBuf;
use thiserror::Error;

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors surfaced by the scan and configuration layer.
///
/// Per-file load failures never appear here: they collapse into skipped
/// [`FileView`](crate::loader::FileView)s so the engine keeps a single
/// "nothing to index" branch. Only problems with the scan as a whole reach
/// the caller as errors.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Root path not found: {0}")]
    RootNotFound(PathBuf),
    #[error("Root path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ScanError {
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RootNotFound(path.into())
    }

    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory(path.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_creation() {
        let path = Path::new("missing");
        let err = ScanError::root_not_found(path);
        assert!(matches!(err, ScanError::RootNotFound(_)));

        let err = ScanError::not_a_directory(path);
        assert!(matches!(err, ScanError::NotADirectory(_)));

        let err = ScanError::config_error("bad yaml");
        assert!(matches!(err, ScanError::ConfigError(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = ScanError::root_not_found("scans/missing");
        assert_eq!(err.to_string(), "Root path not found: scans/missing");

        let err = ScanError::not_a_directory("Cargo.toml");
        assert_eq!(err.to_string(), "Root path is not a directory: Cargo.toml");

        let err = ScanError::config_error("invalid log level 'loud'");
        assert_eq!(
            err.to_string(),
            "Configuration error: invalid log level 'loud'"
        );
    }
}
