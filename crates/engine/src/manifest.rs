//! The registration payload the host consumes to list this adapter.

use hubsource_types::{InputField, InputKind};
use serde::Serialize;

/// Stable adapter identifier the host keys configuration by.
pub const ADAPTER_ID: &str = "hubsource";
/// Display name shown in the host's data-source catalog.
pub const ADAPTER_NAME: &str = "Content Hub";

/// Registration payload: identity, call-to-action, and the settings inputs
/// the host must collect before [`connect`](crate::ContentHubAdapter::connect)
/// can run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterManifest {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub cta_text: String,
    pub settings: Vec<InputField>,
}

/// Build the manifest. Pure data; safe to call before any connection.
pub fn manifest() -> AdapterManifest {
    AdapterManifest {
        id: ADAPTER_ID.to_string(),
        name: ADAPTER_NAME.to_string(),
        icon: None,
        cta_text: "Connect with your Content Hub tenant".to_string(),
        settings: vec![
            setting_input("clientId", "Client ID"),
            setting_input("clientSecret", "Client Secret"),
        ],
    }
}

fn setting_input(name: &str, display_name: &str) -> InputField {
    InputField {
        name: name.to_string(),
        display_name: Some(display_name.to_string()),
        kind: InputKind::String,
        required: true,
        help_text: Some(format!(
            "Get your {display_name} from your tenant's Integration > OAuth > Client Credentials page"
        )),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_requires_both_credentials() {
        let manifest = manifest();
        assert_eq!(manifest.id, ADAPTER_ID);
        assert_eq!(manifest.settings.len(), 2);

        let names: Vec<&str> = manifest.settings.iter().map(|setting| setting.name.as_str()).collect();
        assert_eq!(names, ["clientId", "clientSecret"]);
        assert!(manifest.settings.iter().all(|setting| setting.required));
        assert!(manifest.settings.iter().all(|setting| setting.kind == InputKind::String));
        assert!(
            manifest
                .settings
                .iter()
                .all(|setting| setting.help_text.as_deref().is_some_and(|text| text.contains("OAuth")))
        );
    }

    #[test]
    fn manifest_serializes_camel_case_keys() {
        let value = serde_json::to_value(manifest()).unwrap();
        assert_eq!(value["ctaText"], serde_json::json!("Connect with your Content Hub tenant"));
        assert!(value.get("icon").is_none());
        assert_eq!(value["settings"][0]["type"], serde_json::json!("string"));
    }
}
