use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The locale display text is resolved against. Content Hub labels every
/// human-readable string by locale; only one locale is in scope for now.
pub const DEFAULT_LOCALE: &str = "en-US";

/// A locale-keyed text map as delivered by the content API
/// (e.g. `{"en-US": "Blog Post"}`).
///
/// Entries keep wire order so downstream projections stay deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(pub IndexMap<String, String>);

impl LocalizedText {
    /// Build a single-locale text under [`DEFAULT_LOCALE`].
    pub fn literal(text: impl Into<String>) -> Self {
        let mut map = IndexMap::new();
        map.insert(DEFAULT_LOCALE.to_string(), text.into());
        Self(map)
    }

    /// Resolve the supported locale's value, falling back to the first
    /// non-empty entry when the tenant did not localize for it.
    pub fn resolve(&self) -> Option<&str> {
        self.0
            .get(DEFAULT_LOCALE)
            .filter(|text| !text.is_empty())
            .or_else(|| self.0.values().find(|text| !text.is_empty()))
            .map(String::as_str)
    }
}

/// Field data types a Content Hub schema can declare.
///
/// The eight named kinds are the ones the adapter knows how to query;
/// anything else the remote invents lands in `Other` and is dropped from
/// generated forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Text,
    Boolean,
    Number,
    Symbol,
    Reference,
    Media,
    ShortText,
    LongText,
    Other(String),
}

impl FieldKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "Text",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::Symbol => "Symbol",
            Self::Reference => "Reference",
            Self::Media => "Media",
            Self::ShortText => "ShortText",
            Self::LongText => "LongText",
            Self::Other(name) => name,
        }
    }

    /// Whether fields of this kind can appear in generated query forms.
    pub fn is_queryable(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Whether fields of this kind can be offered for ordering. Reference
    /// and Media are relational/binary, not scalar, and are excluded.
    pub fn supports_ordering(&self) -> bool {
        self.is_queryable() && !matches!(self, Self::Reference | Self::Media)
    }

    /// The host input kind a queryable field projects to. `Symbol` has no
    /// host-side counterpart and maps to a plain text input.
    pub fn input_kind(&self) -> Option<InputKind> {
        match self {
            Self::Text | Self::Symbol => Some(InputKind::Text),
            Self::Boolean => Some(InputKind::Boolean),
            Self::Number => Some(InputKind::Number),
            Self::Reference => Some(InputKind::Reference),
            Self::Media => Some(InputKind::Media),
            Self::ShortText => Some(InputKind::ShortText),
            Self::LongText => Some(InputKind::LongText),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for FieldKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Text" => Self::Text,
            "Boolean" => Self::Boolean,
            "Number" => Self::Number,
            "Symbol" => Self::Symbol,
            "Reference" => Self::Reference,
            "Media" => Self::Media,
            "ShortText" => Self::ShortText,
            "LongText" => Self::LongText,
            _ => Self::Other(value),
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A single field declaration inside a content-type schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    /// Stable field identifier, unique within its schema.
    pub id: String,
    /// Locale-keyed field label.
    #[serde(default)]
    pub name: LocalizedText,
    /// Declared data type of the field.
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Whether the remote requires a value for this field.
    #[serde(default)]
    pub required: bool,
    /// Optional locale-keyed help text authored on the schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<LocalizedText>,
}

impl SchemaField {
    /// Resolved label, falling back to the field id.
    pub fn display_name(&self) -> &str {
        self.name.resolve().unwrap_or(&self.id)
    }
}

/// A content-type schema as returned by `GET /api/content/v1/types`.
///
/// Immutable snapshot; fetched once per settings-configuration lifecycle and
/// never mutated locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeSchema {
    /// Stable content-type identifier.
    pub id: String,
    /// Locale-keyed display name.
    #[serde(default)]
    pub name: LocalizedText,
    /// Optional locale-keyed description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    /// Declared custom fields, in wire order.
    #[serde(default)]
    pub fields: Vec<SchemaField>,
    /// System metadata block. The keys double as the orderable metadata
    /// names, so wire order is preserved.
    #[serde(default)]
    pub system: IndexMap<String, Value>,
}

impl ContentTypeSchema {
    /// Resolved display name, falling back to the type id.
    pub fn display_name(&self) -> &str {
        self.name.resolve().unwrap_or(&self.id)
    }
}

/// A content entry as returned by `GET /api/content/v1/items`.
///
/// Only `id` and `name` are interpreted; `fields` and `system` are opaque
/// pass-through payloads and are never mutated locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    /// Stable entry identifier.
    pub id: String,
    /// Entry display name. Tenants can publish entries without one.
    #[serde(default)]
    pub name: Option<String>,
    /// Raw field values.
    #[serde(default)]
    pub fields: Value,
    /// Raw system metadata.
    #[serde(default)]
    pub system: Value,
}

/// The lightweight record handed to the host for entry selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub id: String,
    pub name: String,
}

impl ResultItem {
    /// Project an entry to its selection record. A missing name becomes the
    /// empty string rather than failing the projection.
    pub fn from_entry(entry: &ContentEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone().unwrap_or_default(),
        }
    }
}

/// Input kinds the host form renderer understands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Number,
    #[default]
    String,
    Text,
    Boolean,
    ShortText,
    LongText,
    Reference,
    Media,
    Object,
}

/// One `{label, value}` choice of an enumerated input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumOption {
    pub label: String,
    pub value: String,
}

/// A host-renderable form field description. Purely descriptive; all
/// behavior lives in the engine that generated it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputField {
    /// Field name the host keys submitted values by.
    pub name: String,
    /// Optional label shown instead of the raw name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether the host should tuck the field behind its "advanced" fold.
    #[serde(default)]
    pub advanced: bool,
    /// Input kind the host renders.
    #[serde(rename = "type")]
    pub kind: InputKind,
    /// Whether the host must require a value.
    #[serde(default)]
    pub required: bool,
    /// Pre-filled value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    /// Lower bound for number inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    /// Upper bound for number inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    /// Choices for enumerated inputs (empty when free-form).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_options: Vec<EnumOption>,
    /// Nested fields for object inputs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_fields: Vec<InputField>,
    /// Helper text rendered alongside the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

/// A generated, pickable resource type: one per content-type schema.
///
/// Plain data; URL synthesis takes the session explicitly instead of closing
/// over tokens, so descriptors stay serializable and comparable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceType {
    /// Equals the source content-type id.
    pub id: String,
    /// Resolved content-type display name.
    pub display_name: String,
    /// Always true for this adapter; entries are pickable.
    pub can_pick_entries: bool,
    /// Generated query-input form.
    #[serde(default)]
    pub inputs: Vec<InputField>,
}

/// Query options the host collected from a generated form.
///
/// An empty-string value anywhere is the host's "no filter" signal and is
/// treated as absent during query construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    /// Present when the host wants exactly one entry resolved by id; all
    /// other options are ignored in that case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    /// Per-field filter values keyed by schema field id, in form order.
    #[serde(
        default,
        deserialize_with = "fields_or_empty",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub fields: IndexMap<String, Value>,
}

/// The host submits an explicit `null` when no field filters are set.
fn fields_or_empty<'de, D>(deserializer: D) -> Result<IndexMap<String, Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<IndexMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Narrowing options for an entry listing call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySelection {
    /// Case-insensitive substring to match entry names against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    /// Exact entry id; takes precedence over `search_text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_entry_id: Option<String>,
}

/// Tenant credentials the host collects on the settings surface.
///
/// Both fields are required and are trimmed before use; validation happens
/// at the adapter-initialization boundary.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterSettings {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
}

impl fmt::Debug for AdapterSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterSettings")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
