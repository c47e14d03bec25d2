//! HTTP transport for the gist API.

use crate::config::GistConfig;
use crate::errors::{GistError, GistErrorKind, GistResult};
use crate::gists::GistsService;
use reqwest::{
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
    Client, Method, Response,
};
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

/// GitHub API error response format.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    message: String,
    documentation_url: Option<String>,
}

/// HTTP client for the gist API.
///
/// Holds a single reqwest client for the lifetime of the process; every
/// operation issues exactly one outbound call, with no retries.
pub struct GistClient {
    /// HTTP client.
    http: Client,
    /// Configuration.
    config: GistConfig,
}

impl GistClient {
    /// Creates a new gist client.
    pub fn new(config: GistConfig) -> GistResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| {
                GistError::new(
                    GistErrorKind::InvalidConfiguration,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { http, config })
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Gets the configuration.
    pub fn config(&self) -> &GistConfig {
        &self.config
    }

    /// Returns true when a token is configured.
    pub fn has_token(&self) -> bool {
        self.config.has_token()
    }

    /// Fails with `MissingAuth` when no token is configured.
    ///
    /// Called by operations that must be rejected locally, before any
    /// network traffic happens.
    pub fn ensure_authenticated(&self) -> GistResult<()> {
        if self.has_token() {
            Ok(())
        } else {
            Err(GistError::missing_auth(format!(
                "This operation requires a token; set ${}",
                crate::config::TOKEN_ENV
            )))
        }
    }

    /// Gets the gists service.
    pub fn gists(&self) -> GistsService {
        GistsService::new(self)
    }

    // HTTP methods

    /// Makes a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> GistResult<T> {
        self.request(Method::GET, path, Option::<&()>::None).await
    }

    /// Makes a POST request.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> GistResult<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a PATCH request.
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> GistResult<T> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    // Internal methods

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> GistResult<T> {
        let response = self.execute_request(method, path, body).await?;

        // Decoding failures are distinct from transport failures.
        response.json().await.map_err(|e| {
            GistError::deserialization(format!("Failed to deserialize response: {}", e))
        })
    }

    async fn execute_request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> GistResult<Response> {
        let url = self.build_url(path);
        debug!(%method, %url, "sending request");

        let mut request = self
            .http
            .request(method, &url)
            .header(USER_AGENT, &self.config.user_agent)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", &self.config.api_version);

        // The wire protocol uses the `Token` scheme; the header is omitted
        // entirely for anonymous requests.
        if let Some(token) = &self.config.token {
            request = request.header(
                AUTHORIZATION,
                format!("Token {}", token.expose_secret()),
            );
        }

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| {
                GistError::new(
                    GistErrorKind::SerializationError,
                    format!("Failed to serialize request body: {}", e),
                )
            })?;
            request = request
                .header("Content-Type", "application/json")
                .body(bytes);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                GistError::timeout(format!("Request timed out: {}", e))
            } else if e.is_connect() {
                GistError::new(
                    GistErrorKind::ConnectionFailed,
                    format!("Connection failed: {}", e),
                )
            } else {
                GistError::new(GistErrorKind::Unknown, format!("Request failed: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        Ok(response)
    }

    fn build_url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    async fn handle_error_response(response: Response) -> GistError {
        let status = response.status();

        // Try to parse the API error body
        let error_body = response.json::<ApiErrorResponse>().await.ok();

        let message = error_body
            .as_ref()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| format!("HTTP {} error", status.as_u16()));

        let documentation_url = error_body.and_then(|e| e.documentation_url);

        GistError::from_response(status.as_u16(), message, documentation_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GistConfig;

    #[test]
    fn test_build_url() {
        let config = GistConfig::builder().token("test").build().unwrap();
        let client = GistClient::new(config).unwrap();

        assert_eq!(client.build_url("/gists"), "https://api.github.com/gists");
        assert_eq!(
            client.build_url("gists/abc123"),
            "https://api.github.com/gists/abc123"
        );
    }

    #[test]
    fn test_ensure_authenticated() {
        let anon = GistClient::new(GistConfig::default()).unwrap();
        let err = anon.ensure_authenticated().unwrap_err();
        assert_eq!(*err.kind(), crate::errors::GistErrorKind::MissingAuth);

        let config = GistConfig::builder().token("ghp_xxxx").build().unwrap();
        let authed = GistClient::new(config).unwrap();
        assert!(authed.ensure_authenticated().is_ok());
    }
}
