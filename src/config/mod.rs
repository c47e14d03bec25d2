//! Configuration for the gist client.

use crate::errors::{GistError, GistErrorKind};
use secrecy::SecretString;
use std::time::Duration;

/// Default GitHub API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default GitHub API version (date-based).
pub const DEFAULT_API_VERSION: &str = "2022-11-28";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent header.
pub const DEFAULT_USER_AGENT: &str = "gisty/0.1.0";

/// Default editor command when `EDITOR` is unset.
pub const DEFAULT_EDITOR: &str = "vim";

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable holding the editor command.
pub const EDITOR_ENV: &str = "EDITOR";

/// Gist client configuration.
///
/// The token and editor are explicit values here; `from_env` is the only
/// place the process environment is consulted.
#[derive(Debug, Clone)]
pub struct GistConfig {
    /// API base URL.
    pub base_url: String,
    /// API version header.
    pub api_version: String,
    /// API token. Absent means anonymous requests where permitted.
    pub token: Option<SecretString>,
    /// Editor command for the edit workflow.
    pub editor: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// User-Agent header.
    pub user_agent: String,
}

impl Default for GistConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            token: None,
            editor: DEFAULT_EDITOR.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl GistConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> GistConfigBuilder {
        GistConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads `GITHUB_TOKEN` for the API token and `EDITOR` for the editor
    /// command, falling back to `vim`. An unset token is not an error here;
    /// operations that require authentication reject it at call time.
    pub fn from_env() -> Self {
        let mut builder = Self::builder();
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.is_empty() {
                builder = builder.token(token);
            }
        }
        if let Ok(editor) = std::env::var(EDITOR_ENV) {
            if !editor.is_empty() {
                builder = builder.editor(editor);
            }
        }
        // Defaults are always valid, so this cannot fail.
        builder.build().unwrap_or_default()
    }

    /// Returns true when a token is configured.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GistError> {
        if self.base_url.is_empty() {
            return Err(GistError::new(
                GistErrorKind::InvalidBaseUrl,
                "Base URL cannot be empty",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(GistError::new(
                GistErrorKind::InvalidBaseUrl,
                "Base URL must start with http:// or https://",
            ));
        }

        if self.user_agent.is_empty() {
            return Err(GistError::configuration(
                "User-Agent is required by the GitHub API",
            ));
        }

        if self.editor.is_empty() {
            return Err(GistError::configuration("Editor command cannot be empty"));
        }

        Ok(())
    }
}

/// Builder for GistConfig.
#[derive(Debug, Default)]
pub struct GistConfigBuilder {
    base_url: Option<String>,
    api_version: Option<String>,
    token: Option<SecretString>,
    editor: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl GistConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the API version.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets the API token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::new(token.into()));
        self
    }

    /// Sets the editor command.
    pub fn editor(mut self, editor: impl Into<String>) -> Self {
        self.editor = Some(editor.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Result<GistConfig, GistError> {
        let config = GistConfig {
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            token: self.token,
            editor: self.editor.unwrap_or_else(|| DEFAULT_EDITOR.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            user_agent: self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GistConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.editor, DEFAULT_EDITOR);
        assert!(config.token.is_none());
        assert!(!config.has_token());
    }

    #[test]
    fn test_config_builder() {
        let config = GistConfig::builder()
            .base_url("https://github.example.com/api/v3")
            .token("ghp_xxxx")
            .editor("nano")
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap();

        assert_eq!(config.base_url, "https://github.example.com/api/v3");
        assert_eq!(config.editor, "nano");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.has_token());
    }

    #[test]
    fn test_invalid_base_url() {
        let result = GistConfig::builder().base_url("invalid-url").build();

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_editor_rejected() {
        let result = GistConfig::builder().editor("").build();

        assert!(result.is_err());
    }
}
