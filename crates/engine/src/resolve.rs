//! Entry resolution against host selection options.

use hubsource_types::{ContentEntry, EntrySelection, ResultItem};

/// Resolve fetched entries against the host's selection.
///
/// Precedence, first match wins with no combination:
/// 1. A non-empty `resource_entry_id` returns at most the one entry whose id
///    equals it; an unknown id yields an empty list, never an error.
/// 2. Otherwise a non-empty `search_text` returns every entry whose name
///    contains it case-insensitively, in fetch order.
/// 3. Otherwise every entry is returned in fetch order.
///
/// Entries without a name never match a search and project with an empty
/// name.
pub fn resolve_entries(entries: &[ContentEntry], selection: &EntrySelection) -> Vec<ResultItem> {
    if let Some(entry_id) = non_empty(selection.resource_entry_id.as_deref()) {
        return entries
            .iter()
            .find(|entry| entry.id == entry_id)
            .map(ResultItem::from_entry)
            .into_iter()
            .collect();
    }

    if let Some(search_text) = non_empty(selection.search_text.as_deref()) {
        let needle = search_text.to_lowercase();
        return entries
            .iter()
            .filter(|entry| {
                entry
                    .name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
            .map(ResultItem::from_entry)
            .collect();
    }

    entries.iter().map(ResultItem::from_entry).collect()
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(id: &str, name: Option<&str>) -> ContentEntry {
        serde_json::from_value(json!({ "id": id, "name": name })).expect("entry fixture")
    }

    fn catalog() -> Vec<ContentEntry> {
        vec![entry("1", Some("Foo")), entry("2", Some("Bar")), entry("3", None)]
    }

    #[test]
    fn entry_id_takes_precedence_over_search_text() {
        let selection = EntrySelection {
            search_text: Some("Bar".into()),
            resource_entry_id: Some("1".into()),
        };
        let items = resolve_entries(&catalog(), &selection);
        assert_eq!(items, vec![ResultItem { id: "1".into(), name: "Foo".into() }]);
    }

    #[test]
    fn unknown_entry_id_yields_an_empty_list() {
        let selection = EntrySelection {
            search_text: None,
            resource_entry_id: Some("missing".into()),
        };
        assert!(resolve_entries(&catalog(), &selection).is_empty());
    }

    #[test]
    fn search_matches_names_case_insensitively() {
        let selection = EntrySelection {
            search_text: Some("fo".into()),
            resource_entry_id: None,
        };
        let items = resolve_entries(&catalog(), &selection);
        assert_eq!(items, vec![ResultItem { id: "1".into(), name: "Foo".into() }]);

        let selection = EntrySelection {
            search_text: Some("BAR".into()),
            resource_entry_id: None,
        };
        let items = resolve_entries(&catalog(), &selection);
        assert_eq!(items, vec![ResultItem { id: "2".into(), name: "Bar".into() }]);
    }

    #[test]
    fn nameless_entries_never_match_a_search_but_list_normally() {
        let selection = EntrySelection {
            search_text: Some("anything".into()),
            resource_entry_id: None,
        };
        assert!(resolve_entries(&catalog(), &selection).is_empty());

        let all = resolve_entries(&catalog(), &EntrySelection::default());
        assert_eq!(all.len(), 3);
        assert_eq!(all[2], ResultItem { id: "3".into(), name: String::new() });
    }

    #[test]
    fn empty_strings_are_treated_as_absent_selectors() {
        let selection = EntrySelection {
            search_text: Some("foo".into()),
            resource_entry_id: Some(String::new()),
        };
        // The blank id is skipped, so the search applies.
        let items = resolve_entries(&catalog(), &selection);
        assert_eq!(items.len(), 1);

        let selection = EntrySelection {
            search_text: Some(String::new()),
            resource_entry_id: None,
        };
        assert_eq!(resolve_entries(&catalog(), &selection).len(), 3);
    }
}
