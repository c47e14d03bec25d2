//! Error types for the gist client.

use std::fmt;
use thiserror::Error;

/// Result type alias for gist operations.
pub type GistResult<T> = Result<T, GistError>;

/// Error kinds for categorizing gist client errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GistErrorKind {
    // Configuration errors
    /// No token configured for an operation that requires one.
    MissingAuth,
    /// No content supplied for a create.
    MissingContent,
    /// Invalid base URL.
    InvalidBaseUrl,
    /// Invalid configuration.
    InvalidConfiguration,

    // Authentication errors
    /// Bad credentials (401).
    BadCredentials,
    /// Access forbidden (403).
    Forbidden,

    // Resource errors
    /// Gist not found, or the response carried no identifier.
    NotFound,
    /// Unprocessable entity (422).
    UnprocessableEntity,

    // Network errors
    /// Connection failed.
    ConnectionFailed,
    /// Request timeout.
    Timeout,

    // Server errors
    /// Internal server error (500).
    InternalError,
    /// Service unavailable (503).
    ServiceUnavailable,

    // Request/response errors
    /// Failed to serialize the request body.
    SerializationError,
    /// Failed to deserialize the response body.
    DeserializationError,

    // Editor workflow errors
    /// The editor could not be launched.
    EditorLaunchFailed,
    /// The editor exited with a non-zero status.
    EditorFailed,
    /// Temp file creation, write, or read failed.
    TempFile,

    // Generic
    /// Unknown error.
    Unknown,
}

impl fmt::Display for GistErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAuth => write!(f, "missing_auth"),
            Self::MissingContent => write!(f, "missing_content"),
            Self::InvalidBaseUrl => write!(f, "invalid_base_url"),
            Self::InvalidConfiguration => write!(f, "invalid_configuration"),
            Self::BadCredentials => write!(f, "bad_credentials"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not_found"),
            Self::UnprocessableEntity => write!(f, "unprocessable_entity"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::InternalError => write!(f, "internal_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::SerializationError => write!(f, "serialization_error"),
            Self::DeserializationError => write!(f, "deserialization_error"),
            Self::EditorLaunchFailed => write!(f, "editor_launch_failed"),
            Self::EditorFailed => write!(f, "editor_failed"),
            Self::TempFile => write!(f, "temp_file"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Gist client error with kind, message, and optional HTTP context.
#[derive(Error, Debug)]
pub struct GistError {
    /// Error kind.
    kind: GistErrorKind,
    /// Error message.
    message: String,
    /// HTTP status code.
    status_code: Option<u16>,
    /// Documentation URL from the API error body.
    documentation_url: Option<String>,
    /// Underlying cause.
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for GistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(code) = self.status_code {
            write!(f, " (HTTP {})", code)?;
        }
        Ok(())
    }
}

impl GistError {
    /// Creates a new gist error.
    pub fn new(kind: GistErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            documentation_url: None,
            cause: None,
        }
    }

    /// Sets the HTTP status code.
    pub fn with_status(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Sets the documentation URL.
    pub fn with_documentation_url(mut self, url: impl Into<String>) -> Self {
        self.documentation_url = Some(url.into());
        self
    }

    /// Sets the underlying cause.
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Gets the error kind.
    pub fn kind(&self) -> &GistErrorKind {
        &self.kind
    }

    /// Gets the bare message, without the kind/status decoration.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the HTTP status code.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Gets the documentation URL.
    pub fn documentation_url(&self) -> Option<&str> {
        self.documentation_url.as_deref()
    }

    /// Returns true for errors that should be reported as a plain
    /// user-facing message rather than an internal failure.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self.kind,
            GistErrorKind::MissingAuth
                | GistErrorKind::MissingContent
                | GistErrorKind::NotFound
        )
    }

    /// Creates an error from an HTTP status code and API error body.
    pub fn from_response(
        status: u16,
        message: String,
        documentation_url: Option<String>,
    ) -> Self {
        let kind = Self::kind_from_status(status);
        let mut error = Self::new(kind, message).with_status(status);

        if let Some(url) = documentation_url {
            error = error.with_documentation_url(url);
        }

        error
    }

    /// Maps HTTP status code to error kind.
    fn kind_from_status(status: u16) -> GistErrorKind {
        match status {
            401 => GistErrorKind::BadCredentials,
            403 => GistErrorKind::Forbidden,
            404 => GistErrorKind::NotFound,
            422 => GistErrorKind::UnprocessableEntity,
            500 => GistErrorKind::InternalError,
            503 => GistErrorKind::ServiceUnavailable,
            _ => GistErrorKind::Unknown,
        }
    }

    // Convenience constructors

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(GistErrorKind::InvalidConfiguration, message)
    }

    /// Creates a missing-auth error.
    pub fn missing_auth(message: impl Into<String>) -> Self {
        Self::new(GistErrorKind::MissingAuth, message)
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(GistErrorKind::NotFound, message)
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(GistErrorKind::Timeout, message)
    }

    /// Creates a deserialization error.
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::new(GistErrorKind::DeserializationError, message)
    }

    /// Creates a temp-file error from an I/O failure.
    pub fn temp_file(message: impl Into<String>, cause: std::io::Error) -> Self {
        Self::new(GistErrorKind::TempFile, message).with_cause(cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(401, GistErrorKind::BadCredentials; "unauthorized")]
    #[test_case(403, GistErrorKind::Forbidden; "forbidden")]
    #[test_case(404, GistErrorKind::NotFound; "not found")]
    #[test_case(422, GistErrorKind::UnprocessableEntity; "unprocessable")]
    #[test_case(500, GistErrorKind::InternalError; "server error")]
    #[test_case(503, GistErrorKind::ServiceUnavailable; "unavailable")]
    #[test_case(418, GistErrorKind::Unknown; "teapot")]
    fn test_kind_from_status(status: u16, expected: GistErrorKind) {
        let error = GistError::from_response(status, "m".to_string(), None);
        assert_eq!(*error.kind(), expected);
        assert_eq!(error.status_code(), Some(status));
    }

    #[test]
    fn test_error_display() {
        let error = GistError::new(GistErrorKind::NotFound, "gist not found").with_status(404);

        let display = format!("{}", error);
        assert!(display.contains("not_found"));
        assert!(display.contains("gist not found"));
        assert!(display.contains("404"));
    }

    #[test]
    fn test_is_user_error() {
        assert!(GistError::missing_auth("no token").is_user_error());
        assert!(GistError::not_found("nope").is_user_error());
        assert!(!GistError::timeout("slow").is_user_error());
        assert!(!GistError::deserialization("bad json").is_user_error());
    }

    #[test]
    fn test_from_response() {
        let error = GistError::from_response(
            404,
            "Not Found".to_string(),
            Some("https://docs.github.com/rest/gists".to_string()),
        );

        assert_eq!(*error.kind(), GistErrorKind::NotFound);
        assert_eq!(error.status_code(), Some(404));
        assert_eq!(
            error.documentation_url(),
            Some("https://docs.github.com/rest/gists")
        );
    }
}
