//! Deterministic synthesis of host-consumable delivery URLs.
//!
//! The host persists generated URLs inside its own documents, so identical
//! inputs must yield byte-identical output: parameters are sorted by key and
//! then value, and every key and value is percent-encoded over the RFC 3986
//! unreserved set. The tenant's credentials travel only in their
//! router-encrypted form.

use hubsource_api::auth::TenantSession;
use hubsource_types::{ResourceType, SelectedOptions};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;
use tracing::debug;

// Encode everything outside the RFC 3986 unreserved characters.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Build the delivery URL for one resource type and option set.
///
/// A non-empty `entry` option resolves exactly one entry through the
/// router's item endpoint and every other option is ignored; otherwise the
/// search endpoint is addressed with the merged query options. Empty-string
/// option values are the host's "no value" signal and are omitted.
pub fn request_url(
    router_base: &str,
    resource: &ResourceType,
    session: &TenantSession,
    options: &SelectedOptions,
) -> String {
    let (path, pairs) = if let Some(entry) = non_empty(options.entry.as_deref()) {
        ("/api/content/item", item_pairs(session, entry))
    } else {
        ("/api/content/search", search_pairs(session, options))
    };
    debug!(resource_type_id = %resource.id, %path, pair_count = pairs.len(), "built delivery url");

    format!("{router_base}{path}?{}", serialize_pairs(pairs))
}

fn item_pairs(session: &TenantSession, entry: &str) -> Vec<(String, String)> {
    vec![
        ("clientId".to_string(), session.encrypted_client_id.clone()),
        ("clientSecret".to_string(), session.encrypted_client_secret.clone()),
        ("contentId".to_string(), entry.to_string()),
    ]
}

fn search_pairs(session: &TenantSession, options: &SelectedOptions) -> Vec<(String, String)> {
    let mut pairs = vec![
        ("clientId".to_string(), session.encrypted_client_id.clone()),
        ("clientSecret".to_string(), session.encrypted_client_secret.clone()),
    ];
    if let Some(page_number) = options.page_number {
        pairs.push(("pageNumber".to_string(), page_number.to_string()));
    }
    if let Some(page_size) = options.page_size {
        pairs.push(("pageSize".to_string(), page_size.to_string()));
    }
    if let Some(order_by) = non_empty(options.order_by.as_deref()) {
        pairs.push(("orderBy".to_string(), order_by.to_string()));
    }
    if let Some(search_query) = non_empty(options.search_query.as_deref()) {
        pairs.push(("searchQuery".to_string(), search_query.to_string()));
    }
    for (key, value) in &options.fields {
        if let Some(text) = scalar_text(value) {
            pairs.push((key.clone(), text));
        }
    }
    pairs
}

/// Serialize pairs into canonical query form: sorted, percent-encoded.
fn serialize_pairs(mut pairs: Vec<(String, String)>) -> String {
    pairs.sort();
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, QUERY_ENCODE_SET),
                utf8_percent_encode(value, QUERY_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|value| !value.is_empty())
}

/// Render a filter value for the query string. Nulls and empty strings are
/// absent values; anything else uses its JSON rendering.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
