//! Gist repository: create, show, update, and list.

use crate::client::GistClient;
use crate::errors::{GistError, GistResult};
use crate::types::Gist;
use tracing::debug;

/// Service for gist operations, borrowing the shared client.
pub struct GistsService<'a> {
    client: &'a GistClient,
}

impl<'a> GistsService<'a> {
    /// Creates a new gists service.
    pub fn new(client: &'a GistClient) -> Self {
        Self { client }
    }

    /// Creates a gist.
    ///
    /// POSTs the provided gist to the collection endpoint and returns the
    /// server's canonical representation, with `id`, `html_url`, and
    /// `updated_at` populated. Anonymous creation is permitted when no token
    /// is configured.
    pub async fn create(&self, gist: &Gist) -> GistResult<Gist> {
        debug!(public = gist.public, "creating gist");
        self.client.post("/gists", gist).await
    }

    /// Shows a single gist by id.
    ///
    /// A response that decodes to a gist without an identifier is reported
    /// as `NotFound`, the same kind an HTTP 404 maps to; both are distinct
    /// from transport failures.
    pub async fn show(&self, id: &str) -> GistResult<Gist> {
        self.client.ensure_authenticated()?;
        let gist: Gist = self.client.get(&format!("/gists/{}", id)).await?;
        if !gist.is_persisted() {
            return Err(GistError::not_found(format!("No gist with id {}", id)));
        }
        Ok(gist)
    }

    /// Updates a gist.
    ///
    /// PATCHes a full replacement body against the single-item endpoint.
    /// The body always carries the complete file map; the server applies
    /// full-document replace semantics, never a field-level merge.
    pub async fn update(&self, id: &str, gist: &Gist) -> GistResult<Gist> {
        self.client.ensure_authenticated()?;
        debug!(%id, files = gist.files.len(), "updating gist");
        self.client.patch(&format!("/gists/{}", id), gist).await
    }

    /// Lists gists for the authenticated user.
    ///
    /// Anonymous listing is rejected here, before any network call. The
    /// server's ordering is preserved.
    pub async fn list(&self) -> GistResult<Vec<Gist>> {
        self.client.ensure_authenticated()?;
        self.client.get("/gists").await
    }
}
