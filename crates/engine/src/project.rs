//! Schema-to-form projection.
//!
//! Each content-type schema projects to one [`ResourceType`] whose inputs the
//! host renders as a query form. Projection is pure and deterministic: the
//! same schema always yields the same descriptor, and descriptors are built
//! fresh on every call rather than cached.

use hubsource_types::{ContentTypeSchema, EnumOption, InputField, InputKind, ResourceType, SchemaField};
use serde_json::json;
use tracing::debug;

/// System-metadata keys never offered for ordering.
const META_FIELD_BLACKLIST: &[&str] = &[
    "version",
    "status",
    "type",
    "createdBy",
    "createdAt",
    "updatedBy",
    "updatedAt",
    "publishedBy",
    "publishedAt",
];

/// Project one content-type schema into a pickable resource type.
///
/// The generated form always carries pagination, ordering, and search
/// controls. A structured per-field filter input is added only when the
/// schema declares at least one field of a queryable kind; fields of
/// unrecognized kinds are dropped from the form entirely.
pub fn project_resource_type(schema: &ContentTypeSchema) -> ResourceType {
    let type_name = schema.display_name().to_string();
    let acceptable_fields: Vec<&SchemaField> = schema.fields.iter().filter(|field| field.kind.is_queryable()).collect();

    let mut inputs = vec![
        page_input("pageNumber", "Page Number", 1),
        page_input("pageSize", "Page Size", 10),
        order_by_input(schema, &acceptable_fields),
        InputField {
            name: "searchQuery".to_string(),
            display_name: Some("Search Query".to_string()),
            advanced: true,
            kind: InputKind::String,
            ..Default::default()
        },
    ];
    if !acceptable_fields.is_empty() {
        inputs.push(fields_input(&type_name, &acceptable_fields));
    }
    debug!(content_type_id = %schema.id, input_count = inputs.len(), "projected resource type");

    ResourceType {
        id: schema.id.clone(),
        display_name: type_name,
        can_pick_entries: true,
        inputs,
    }
}

fn page_input(name: &str, display_name: &str, default_value: i64) -> InputField {
    InputField {
        name: name.to_string(),
        display_name: Some(display_name.to_string()),
        advanced: true,
        kind: InputKind::Number,
        default_value: Some(json!(default_value)),
        min: Some(0),
        max: Some(100),
        ..Default::default()
    }
}

/// The Order By choices: non-blacklisted system-metadata keys in wire order,
/// followed by the queryable fields that support ordering.
fn order_by_input(schema: &ContentTypeSchema, acceptable_fields: &[&SchemaField]) -> InputField {
    let mut enum_options: Vec<EnumOption> = schema
        .system
        .keys()
        .filter(|key| !META_FIELD_BLACKLIST.contains(&key.as_str()))
        .map(|key| EnumOption {
            label: key.clone(),
            value: key.clone(),
        })
        .collect();
    enum_options.extend(
        acceptable_fields
            .iter()
            .filter(|field| field.kind.supports_ordering())
            .map(|field| EnumOption {
                label: field.display_name().to_string(),
                value: field.id.clone(),
            }),
    );

    InputField {
        name: "orderBy".to_string(),
        display_name: Some("Order By".to_string()),
        kind: InputKind::String,
        enum_options,
        ..Default::default()
    }
}

fn fields_input(type_name: &str, acceptable_fields: &[&SchemaField]) -> InputField {
    let sub_fields = acceptable_fields
        .iter()
        .filter_map(|field| {
            let kind = field.kind.input_kind()?;
            let field_name = field.display_name();
            Some(InputField {
                name: field.id.clone(),
                display_name: Some(field_name.to_string()),
                kind,
                help_text: Some(format!("Query by a specific \"{field_name}\" on {type_name}")),
                ..Default::default()
            })
        })
        .collect();

    InputField {
        name: "fields".to_string(),
        display_name: Some(format!("{type_name} fields")),
        advanced: true,
        kind: InputKind::Object,
        sub_fields,
        ..Default::default()
    }
}
