//! Error types for pagelinks
//!
//! All fallible public APIs return `Result<T, Error>` where Error is defined here.
//! Only configuration and rendering can fail; the window algorithm itself is total.

use thiserror::Error;

/// The main error type for pagelinks
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Rendering Errors
    // ============================================================================
    #[error("Render error: {message}")]
    Render { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid value error for a named option
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a render error
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Check if this error comes from caller-supplied configuration
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::Config { .. }
                | Error::InvalidConfigValue { .. }
                | Error::YamlParse(_)
                | Error::JsonParse(_)
        )
    }
}

impl From<askama::Error> for Error {
    fn from(err: askama::Error) -> Self {
        Self::render(err.to_string())
    }
}

/// Result type alias for pagelinks
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Other(format!("{}: {}", message.into(), e.into())))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Other(format!("{}: {}", f(), e.into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::invalid_value("type", "unknown layout `grid`");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'type': unknown layout `grid`"
        );

        let err = Error::render("boom");
        assert_eq!(err.to_string(), "Render error: boom");
    }

    #[test]
    fn test_is_config() {
        assert!(Error::config("x").is_config());
        assert!(Error::invalid_value("perPage", "must be positive").is_config());
        assert!(!Error::render("x").is_config());
        assert!(!Error::Other("x".to_string()).is_config());
    }

    #[test]
    fn test_template_error_becomes_render_error() {
        let err: Error = askama::Error::Fmt(std::fmt::Error).into();
        assert!(matches!(err, Error::Render { .. }));
    }

    #[test]
    fn test_result_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        let err = result.context("Failed to read options file").unwrap_err();
        assert!(matches!(err, Error::Other(_)));
        assert_eq!(
            err.to_string(),
            "Failed to read options file: IO error: gone"
        );
    }

    #[test]
    fn test_with_context_is_lazy() {
        let ok: Result<u8> = Ok(1);
        let value = ok
            .with_context(|| panic!("context built for a success"))
            .unwrap();
        assert_eq!(value, 1);
    }
}
