//! The content-source seam between the adapter surface and the remote API.
//!
//! [`ContentSource`] is what the adapter fetches through. Production code
//! uses [`HubClient`]; tests substitute static or failing sources to
//! exercise the surface without a network.

use async_trait::async_trait;
use hubsource_api::HubClient;
use hubsource_api::auth::AccessToken;
use hubsource_api::error::ApiError;
use hubsource_types::{ContentEntry, ContentTypeSchema};

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch every content-type schema visible to the session's tenant.
    async fn content_types(&self, token: &AccessToken) -> Result<Vec<ContentTypeSchema>, ApiError>;

    /// Fetch the entries of one content type, in remote order.
    async fn entries_by_type(&self, token: &AccessToken, type_id: &str) -> Result<Vec<ContentEntry>, ApiError>;
}

#[async_trait]
impl ContentSource for HubClient {
    async fn content_types(&self, token: &AccessToken) -> Result<Vec<ContentTypeSchema>, ApiError> {
        HubClient::content_types(self, token).await
    }

    async fn entries_by_type(&self, token: &AccessToken, type_id: &str) -> Result<Vec<ContentEntry>, ApiError> {
        HubClient::entries_by_type(self, token, type_id).await
    }
}
