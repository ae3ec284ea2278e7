//! Credential exchange for Content Hub tenants.
//!
//! Adapter settings carry an OAuth client id and secret. Initialization
//! turns them into a [`TenantSession`]: one client-credentials access token
//! for the adapter's own content API calls, plus router-encrypted copies of
//! both credentials for embedding in the URLs handed to the host.

use std::fmt;

use reqwest::Method;
use serde::Deserialize;
use tracing::info;

use hubsource_types::AdapterSettings;

use crate::HubClient;
use crate::error::ApiError;

/// Validated, trimmed tenant credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    /// Validate adapter settings into usable credentials.
    ///
    /// Both fields are trimmed. A missing or blank field is rejected here so
    /// no exchange call ever runs with unusable credentials.
    pub fn from_settings(settings: &AdapterSettings) -> Result<Self, ApiError> {
        let client_id = settings.client_id.trim();
        let client_secret = settings.client_secret.trim();
        if client_id.is_empty() {
            return Err(ApiError::Settings("clientId is required".into()));
        }
        if client_secret.is_empty() {
            return Err(ApiError::Settings("clientSecret is required".into()));
        }
        Ok(Self {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Access token minted by the OAuth token service.
#[derive(Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EncryptedTokenResponse {
    encrypted_token: String,
}

/// Session tokens derived once per settings configuration and reused for
/// every subsequent call and generated URL.
#[derive(Clone)]
pub struct TenantSession {
    /// Bearer token for the adapter's own content API calls.
    pub access_token: AccessToken,
    /// Router-encrypted client id, safe to embed in host-visible URLs.
    pub encrypted_client_id: String,
    /// Router-encrypted client secret, safe to embed in host-visible URLs.
    pub encrypted_client_secret: String,
}

impl fmt::Debug for TenantSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TenantSession")
            .field("access_token", &self.access_token)
            .field("encrypted_client_id", &"<redacted>")
            .field("encrypted_client_secret", &"<redacted>")
            .finish()
    }
}

impl HubClient {
    /// Exchange credentials for an access token via the client-credentials
    /// grant.
    pub async fn fetch_access_token(&self, credentials: &Credentials) -> Result<AccessToken, ApiError> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ];
        let request = self
            .request(Method::POST, &self.endpoints.auth_base, "/oauth/token")
            .form(&form);
        self.read_json(request).await
    }

    /// Encrypt one credential through the delivery router.
    ///
    /// The router accepts the plaintext as a bearer credential and returns
    /// an opaque token that is safe to embed in host-visible URLs.
    pub async fn encrypt_credential(&self, plaintext: &str) -> Result<String, ApiError> {
        let request = self
            .request(Method::GET, &self.endpoints.router_base, "/api/authorize")
            .bearer_auth(plaintext);
        let response: EncryptedTokenResponse = self.read_json(request).await?;
        Ok(response.encrypted_token)
    }
}

/// Establish a tenant session from validated credentials.
///
/// Performs one token fetch plus one encryption per credential. Any failure
/// propagates to the caller; initialization has no fallback path.
pub async fn establish_session(client: &HubClient, credentials: &Credentials) -> Result<TenantSession, ApiError> {
    let access_token = client.fetch_access_token(credentials).await?;
    let encrypted_client_id = client.encrypt_credential(&credentials.client_id).await?;
    let encrypted_client_secret = client.encrypt_credential(&credentials.client_secret).await?;
    info!(token_type = %access_token.token_type, "tenant session established");

    Ok(TenantSession {
        access_token,
        encrypted_client_id,
        encrypted_client_secret,
    })
}
