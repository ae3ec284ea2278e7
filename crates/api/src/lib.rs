//! Content Hub API client utilities.
//!
//! This crate provides a lightweight client for the Content Hub services.
//! It focuses on:
//!
//! - Constructing an HTTP client with sensible defaults
//! - Resolving the content, auth, and router base URLs with env overrides
//! - Validating overridden base URLs for safety
//! - Exchanging tenant credentials for session tokens ([`auth`])
//! - Fetching content-type schemas and entries ([`content`])
//!
//! The primary entry point is [`HubClient`]. Create an instance via
//! [`HubClient::new`], then call the typed fetchers on it.
//!
//! # Example
//!
//! ```ignore
//! use hubsource_api::{HubClient, auth};
//! use hubsource_types::AdapterSettings;
//! use anyhow::Result;
//!
//! async fn connect(settings: &AdapterSettings) -> Result<()> {
//!     let client = HubClient::new()?;
//!     let credentials = auth::Credentials::from_settings(settings)?;
//!     let session = auth::establish_session(&client, &credentials).await?;
//!     let types = client.content_types(&session.access_token).await?;
//!     println!("content types: {}", types.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod content;
pub mod error;

use std::env;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, header};
use tracing::debug;
use url::Url;

use crate::error::ApiError;

/// Allowed base domains for non-local base-URL overrides. Subdomains of
/// these domains are also allowed.
const ALLOWED_HUB_DOMAINS: &[&str] = &["contenthub.cloud"];
/// Hostnames allowed for local development regardless of scheme.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

/// Environment variable overriding the content API base URL.
pub const CONTENT_API_BASE_VAR: &str = "HUBSOURCE_CONTENT_API_BASE";
/// Environment variable overriding the authentication service base URL.
pub const AUTH_API_BASE_VAR: &str = "HUBSOURCE_AUTH_API_BASE";
/// Environment variable overriding the delivery router base URL.
pub const ROUTER_BASE_VAR: &str = "HUBSOURCE_ROUTER_BASE";

const DEFAULT_CONTENT_API_BASE: &str = "https://content-api.contenthub.cloud";
const DEFAULT_AUTH_API_BASE: &str = "https://auth.contenthub.cloud";
const DEFAULT_ROUTER_BASE: &str = "https://router.contenthub.cloud";

/// Resolved base URLs for the three Content Hub services.
///
/// Each base comes from its environment variable when set, otherwise the
/// documented default. Trailing slashes are trimmed so path concatenation
/// stays predictable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubEndpoints {
    /// Content delivery API, serving schemas and entries.
    pub content_base: String,
    /// OAuth token service.
    pub auth_base: String,
    /// Delivery router that fronts credential encryption and the URLs the
    /// host renders against.
    pub router_base: String,
}

impl HubEndpoints {
    /// Resolve all three bases from the environment, validating overrides.
    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self {
            content_base: resolve_base(CONTENT_API_BASE_VAR, DEFAULT_CONTENT_API_BASE)?,
            auth_base: resolve_base(AUTH_API_BASE_VAR, DEFAULT_AUTH_API_BASE)?,
            router_base: resolve_base(ROUTER_BASE_VAR, DEFAULT_ROUTER_BASE)?,
        })
    }
}

#[derive(Debug, Clone)]
/// Thin wrapper around a configured `reqwest::Client` for Content Hub access.
///
/// The client pre-configures default headers and a request timeout, and
/// builds requests against validated base URLs. Per-tenant authorization is
/// attached by the callers in [`auth`] and [`content`]; the client itself
/// holds no credential material.
pub struct HubClient {
    pub endpoints: HubEndpoints,
    http: Client,
    user_agent: String,
}

impl HubClient {
    /// Construct a [`HubClient`] with endpoints resolved from the environment.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_endpoints(HubEndpoints::from_env()?)
    }

    /// Construct a [`HubClient`] against explicit endpoints.
    pub fn with_endpoints(endpoints: HubEndpoints) -> Result<Self, ApiError> {
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            endpoints,
            http,
            user_agent: format!("hubsource/0.1; {}", env::consts::OS),
        })
    }

    /// Build a `reqwest::RequestBuilder` for a method, base, and relative path.
    ///
    /// The resulting request includes the configured User-Agent and base
    /// headers.
    pub(crate) fn request(&self, method: Method, base: &str, path: &str) -> RequestBuilder {
        let url = format!("{base}{path}");
        debug!(%url, "building request");

        self.http
            .request(method, url)
            .header(header::USER_AGENT, &self.user_agent)
    }

    /// Send a request and deserialize a JSON success body.
    ///
    /// Non-2xx responses become [`ApiError::Status`] with a truncated body
    /// preview; undecodable bodies become [`ApiError::Json`].
    pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                body: error::truncate_body_preview(&body, 200),
            });
        }
        error::parse_json(&body)
    }
}

/// Resolve one base URL from its environment variable or default.
fn resolve_base(var: &str, default: &str) -> Result<String, ApiError> {
    let base = env::var(var).unwrap_or_else(|_| default.to_string());
    validate_base_url(var, &base)?;
    Ok(base.trim_end_matches('/').to_string())
}

/// Validate that a base URL is acceptable for use by the client.
///
/// Rules:
/// - `localhost` or `127.0.0.1`: any scheme is allowed
/// - otherwise: scheme must be HTTPS, and host must be one of the allowed
///   Content Hub domains or a subdomain thereof
fn validate_base_url(var: &str, base: &str) -> Result<(), ApiError> {
    let parsed_base_url =
        Url::parse(base).map_err(|e| ApiError::InvalidBaseUrl(format!("invalid {var} URL '{base}': {e}")))?;

    let host_name = parsed_base_url
        .host_str()
        .ok_or_else(|| ApiError::InvalidBaseUrl(format!("{var} must include a host")))?;

    // Local development allowances: localhost/127.0.0.1 with any scheme.
    if LOCALHOST_DOMAINS
        .iter()
        .any(|&allowed| host_name.eq_ignore_ascii_case(allowed))
    {
        return Ok(());
    }

    // Production: must be HTTPS and end with one of the allowed domains.
    if parsed_base_url.scheme() != "https" {
        return Err(ApiError::InvalidBaseUrl(format!(
            "{var} must use https for non-localhost hosts; got '{}://'",
            parsed_base_url.scheme()
        )));
    }

    let is_allowed_domain = ALLOWED_HUB_DOMAINS.iter().any(|&allowed_domain| {
        host_name.eq_ignore_ascii_case(allowed_domain) || host_name.ends_with(&format!(".{allowed_domain}"))
    });
    if !is_allowed_domain {
        return Err(ApiError::InvalidBaseUrl(format!(
            "{var} host '{host_name}' is not allowed; must be one of {ALLOWED_HUB_DOMAINS:?} or a subdomain, or localhost"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bases_pass_validation() {
        for (var, base) in [
            (CONTENT_API_BASE_VAR, DEFAULT_CONTENT_API_BASE),
            (AUTH_API_BASE_VAR, DEFAULT_AUTH_API_BASE),
            (ROUTER_BASE_VAR, DEFAULT_ROUTER_BASE),
        ] {
            assert!(validate_base_url(var, base).is_ok(), "{base} should validate");
        }
    }

    #[test]
    fn localhost_allows_any_scheme() {
        assert!(validate_base_url(ROUTER_BASE_VAR, "http://localhost:3000").is_ok());
        assert!(validate_base_url(ROUTER_BASE_VAR, "http://127.0.0.1:8080").is_ok());
    }

    #[test]
    fn non_https_production_hosts_are_rejected() {
        let err = validate_base_url(CONTENT_API_BASE_VAR, "http://content-api.contenthub.cloud").unwrap_err();
        assert!(err.to_string().contains("must use https"));
    }

    #[test]
    fn foreign_domains_are_rejected() {
        let err = validate_base_url(AUTH_API_BASE_VAR, "https://auth.examplecdn.net").unwrap_err();
        assert!(err.to_string().contains("not allowed"));

        // A domain merely containing the allowed name does not qualify.
        let err = validate_base_url(AUTH_API_BASE_VAR, "https://evilcontenthub.cloud.attacker.io").unwrap_err();
        assert!(err.to_string().contains("not allowed"));
    }

    #[test]
    fn subdomains_of_allowed_domains_pass() {
        assert!(validate_base_url(CONTENT_API_BASE_VAR, "https://tenant-eu.contenthub.cloud").is_ok());
    }

    #[test]
    fn endpoints_honor_env_overrides_and_trim_trailing_slash() {
        temp_env::with_vars(
            [
                (CONTENT_API_BASE_VAR, Some("http://localhost:8080/")),
                (AUTH_API_BASE_VAR, None::<&str>),
                (ROUTER_BASE_VAR, None::<&str>),
            ],
            || {
                let endpoints = HubEndpoints::from_env().unwrap();
                assert_eq!(endpoints.content_base, "http://localhost:8080");
                assert_eq!(endpoints.auth_base, DEFAULT_AUTH_API_BASE);
                assert_eq!(endpoints.router_base, DEFAULT_ROUTER_BASE);
            },
        );
    }

    #[test]
    fn endpoints_reject_disallowed_overrides() {
        temp_env::with_vars([(ROUTER_BASE_VAR, Some("https://router.attacker.io"))], || {
            let err = HubEndpoints::from_env().unwrap_err();
            assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
        });
    }
}
