//! Host-facing adapter surface.
//!
//! [`ContentHubAdapter`] is the object the host drives: connect once with
//! tenant settings, then enumerate resource types, resolve entries, and
//! build delivery URLs. Connection failures are fatal and loud; fetch
//! failures after that degrade to empty lists with a logged diagnostic so a
//! broken tenant never crashes the host's render cycle.

use std::fmt;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use hubsource_api::HubClient;
use hubsource_api::auth::{self, Credentials, TenantSession};
use hubsource_types::{AdapterSettings, EntrySelection, ResourceType, ResultItem, SelectedOptions};

use crate::encode;
use crate::project::project_resource_type;
use crate::resolve::resolve_entries;
use crate::source::ContentSource;

pub struct ContentHubAdapter {
    source: Arc<dyn ContentSource>,
    session: TenantSession,
    router_base: String,
}

impl fmt::Debug for ContentHubAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentHubAdapter")
            .field("router_base", &self.router_base)
            .finish()
    }
}

impl ContentHubAdapter {
    /// Connect to a tenant with the host-collected settings.
    ///
    /// Validates the settings, builds the client from the environment, and
    /// establishes the session tokens. Every failure here propagates: a
    /// tenant that cannot authenticate gets no adapter.
    pub async fn connect(settings: &AdapterSettings) -> Result<Self> {
        let credentials = Credentials::from_settings(settings).context("validate adapter settings")?;
        let client = HubClient::new().context("build Content Hub client")?;
        let router_base = client.endpoints.router_base.clone();
        let session = auth::establish_session(&client, &credentials)
            .await
            .context("establish tenant session")?;
        info!("content hub adapter connected");

        Ok(Self {
            source: Arc::new(client),
            session,
            router_base,
        })
    }

    /// Build an adapter over an explicit source and session.
    ///
    /// Used by hosts that manage their own transport, and by tests
    /// substituting the source.
    pub fn with_source(source: Arc<dyn ContentSource>, session: TenantSession, router_base: impl Into<String>) -> Self {
        Self {
            source,
            session,
            router_base: router_base.into(),
        }
    }

    /// Enumerate the tenant's content types as pickable resource types.
    ///
    /// Fails soft: any fetch error is logged and an empty list returned.
    pub async fn resource_types(&self) -> Vec<ResourceType> {
        match self.source.content_types(&self.session.access_token).await {
            Ok(schemas) => {
                let resource_types: Vec<ResourceType> = schemas.iter().map(project_resource_type).collect();
                debug!(resource_type_count = resource_types.len(), "projected resource types");
                resource_types
            }
            Err(error) => {
                warn!(%error, "content type fetch failed; returning no resource types");
                Vec::new()
            }
        }
    }

    /// Resolve entries of one resource type against the host's selection.
    ///
    /// Same fail-soft policy as [`Self::resource_types`].
    pub async fn entries_by_resource_type(&self, type_id: &str, selection: &EntrySelection) -> Vec<ResultItem> {
        match self.source.entries_by_type(&self.session.access_token, type_id).await {
            Ok(entries) => resolve_entries(&entries, selection),
            Err(error) => {
                warn!(content_type_id = %type_id, %error, "entry fetch failed; returning no entries");
                Vec::new()
            }
        }
    }

    /// Build the delivery URL for a resource type and option set.
    pub fn request_url(&self, resource: &ResourceType, options: &SelectedOptions) -> String {
        encode::request_url(&self.router_base, resource, &self.session, options)
    }

    /// The established session, for hosts that drive URL synthesis directly.
    pub fn session(&self) -> &TenantSession {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hubsource_api::auth::AccessToken;
    use hubsource_api::error::ApiError;
    use hubsource_types::{ContentEntry, ContentTypeSchema};
    use reqwest::StatusCode;
    use serde_json::json;

    struct StaticSource {
        types: Vec<ContentTypeSchema>,
        entries: Vec<ContentEntry>,
    }

    #[async_trait]
    impl ContentSource for StaticSource {
        async fn content_types(&self, _token: &AccessToken) -> Result<Vec<ContentTypeSchema>, ApiError> {
            Ok(self.types.clone())
        }

        async fn entries_by_type(&self, _token: &AccessToken, _type_id: &str) -> Result<Vec<ContentEntry>, ApiError> {
            Ok(self.entries.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ContentSource for FailingSource {
        async fn content_types(&self, _token: &AccessToken) -> Result<Vec<ContentTypeSchema>, ApiError> {
            Err(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "upstream unavailable".into(),
            })
        }

        async fn entries_by_type(&self, _token: &AccessToken, _type_id: &str) -> Result<Vec<ContentEntry>, ApiError> {
            Err(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "upstream unavailable".into(),
            })
        }
    }

    fn session() -> TenantSession {
        TenantSession {
            access_token: AccessToken {
                access_token: "raw-token".into(),
                token_type: "Bearer".into(),
                expires_in: Some(86_400),
            },
            encrypted_client_id: "enc-id".into(),
            encrypted_client_secret: "enc-secret".into(),
        }
    }

    fn blog_post_schema() -> ContentTypeSchema {
        serde_json::from_str(
            r#"{
                "id": "blogPost",
                "name": { "en-US": "Blog Post" },
                "fields": [ { "id": "title", "name": { "en-US": "Title" }, "type": "ShortText" } ],
                "system": {}
            }"#,
        )
        .expect("schema fixture")
    }

    fn entry(id: &str, name: Option<&str>) -> ContentEntry {
        serde_json::from_value(json!({ "id": id, "name": name })).expect("entry fixture")
    }

    fn adapter_over(source: impl ContentSource + 'static) -> ContentHubAdapter {
        ContentHubAdapter::with_source(Arc::new(source), session(), "https://router.contenthub.cloud")
    }

    #[tokio::test]
    async fn resource_types_projects_fetched_schemas() {
        let adapter = adapter_over(StaticSource {
            types: vec![blog_post_schema()],
            entries: Vec::new(),
        });
        let resource_types = adapter.resource_types().await;
        assert_eq!(resource_types.len(), 1);
        assert_eq!(resource_types[0].id, "blogPost");
        assert_eq!(resource_types[0].display_name, "Blog Post");
        assert!(resource_types[0].inputs.iter().any(|input| input.name == "fields"));
    }

    #[tokio::test]
    async fn fetch_failures_degrade_to_empty_lists() {
        let adapter = adapter_over(FailingSource);
        assert!(adapter.resource_types().await.is_empty());
        assert!(
            adapter
                .entries_by_resource_type("blogPost", &EntrySelection::default())
                .await
                .is_empty()
        );
    }

    #[tokio::test]
    async fn entries_pass_through_the_resolver() {
        let adapter = adapter_over(StaticSource {
            types: Vec::new(),
            entries: vec![entry("1", Some("Foo")), entry("2", Some("Bar")), entry("3", None)],
        });

        let by_id = adapter
            .entries_by_resource_type(
                "blogPost",
                &EntrySelection {
                    search_text: None,
                    resource_entry_id: Some("2".into()),
                },
            )
            .await;
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].id, "2");

        let by_search = adapter
            .entries_by_resource_type(
                "blogPost",
                &EntrySelection {
                    search_text: Some("foo".into()),
                    resource_entry_id: None,
                },
            )
            .await;
        assert_eq!(by_search.len(), 1);
        assert_eq!(by_search[0].name, "Foo");

        let all = adapter
            .entries_by_resource_type("blogPost", &EntrySelection::default())
            .await;
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn connect_rejects_blank_settings_before_any_exchange() {
        let err = ContentHubAdapter::connect(&AdapterSettings::default()).await.unwrap_err();
        assert!(err.to_string().contains("validate adapter settings"));
    }

    #[tokio::test]
    async fn request_url_carries_the_session_tokens() {
        let adapter = adapter_over(StaticSource {
            types: vec![blog_post_schema()],
            entries: Vec::new(),
        });
        let resource_types = adapter.resource_types().await;
        let url = adapter.request_url(&resource_types[0], &SelectedOptions::default());
        assert!(url.starts_with("https://router.contenthub.cloud/api/content/search?"));
        assert!(url.contains("clientId=enc-id"));
        assert!(url.contains("clientSecret=enc-secret"));
    }
}
