//! Typed fetchers for content-type schemas and entries.
//!
//! Both calls are read-only snapshots of remote state. Failures surface as
//! [`ApiError`] here; the fail-soft empty-list policy lives with the adapter
//! surface, which owns the decision to swallow and log.

use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

use hubsource_types::{ContentEntry, ContentTypeSchema};

use crate::HubClient;
use crate::auth::AccessToken;
use crate::error::ApiError;

/// The `{"data": [...]}` envelope the content API wraps collections in.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    // The path form keeps the derive from putting a `T: Default` bound
    // on the generated impl.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl HubClient {
    /// Fetch every content-type schema visible to the tenant.
    pub async fn content_types(&self, token: &AccessToken) -> Result<Vec<ContentTypeSchema>, ApiError> {
        let request = self
            .request(Method::GET, &self.endpoints.content_base, "/api/content/v1/types")
            .bearer_auth(&token.access_token);
        let envelope: Envelope<ContentTypeSchema> = self.read_json(request).await?;
        debug!(type_count = envelope.data.len(), "fetched content types");
        Ok(envelope.data)
    }

    /// Fetch the entries of one content type, in whatever order the remote
    /// returns them.
    pub async fn entries_by_type(&self, token: &AccessToken, type_id: &str) -> Result<Vec<ContentEntry>, ApiError> {
        let request = self
            .request(Method::GET, &self.endpoints.content_base, "/api/content/v1/items")
            .query(&[("system.contentType.id", type_id)])
            .bearer_auth(&token.access_token);
        let envelope: Envelope<ContentEntry> = self.read_json(request).await?;
        debug!(content_type_id = %type_id, entry_count = envelope.data.len(), "fetched entries");
        Ok(envelope.data)
    }
}
