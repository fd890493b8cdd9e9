//! Draft persistence for in-progress form input.
//!
//! Non-empty field values are written as one JSON object under a fixed key
//! on every input/blur event, restored when a controller attaches, and
//! deleted only after a successful submission. The draft is advisory: a
//! missing or corrupt draft is logged and ignored, never surfaced.

use std::collections::BTreeMap;

use tracing::warn;

use super::field::{Field, FieldValues};
use crate::store::KeyValueStore;

/// Fixed storage key the draft lives under, shared with the web front end
pub const DRAFT_KEY: &str = "contactFormData";

/// Serialize the non-empty fields and write them under [`DRAFT_KEY`].
/// Write failures are logged and swallowed; losing a draft must never
/// break the form.
pub fn save_draft<S: KeyValueStore>(store: &S, values: &FieldValues) {
    let draft: BTreeMap<&str, &str> = values
        .entries()
        .filter(|(_, value)| !value.is_empty())
        .map(|(field, value)| (field.as_str(), value))
        .collect();

    let json = match serde_json::to_string(&draft) {
        Ok(json) => json,
        Err(err) => {
            warn!(error = %err, "failed to serialize contact form draft");
            return;
        }
    };

    if let Err(err) = store.set(DRAFT_KEY, &json) {
        warn!(error = %err, "failed to save contact form draft");
    }
}

/// Read the stored draft. Fields absent from storage stay at their default
/// empty value; an unreadable or corrupt draft yields all defaults.
pub fn load_draft<S: KeyValueStore>(store: &S) -> FieldValues {
    let raw = match store.get(DRAFT_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return FieldValues::default(),
        Err(err) => {
            warn!(error = %err, "failed to read saved contact form draft");
            return FieldValues::default();
        }
    };

    let entries: BTreeMap<String, String> = match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(error = %err, "ignoring corrupt contact form draft");
            return FieldValues::default();
        }
    };

    let mut values = FieldValues::default();
    for field in Field::ALL {
        if let Some(value) = entries.get(field.as_str()) {
            values.set(field, value.clone());
        }
    }
    values
}

/// Delete the stored draft. Called only after a successful submission.
pub fn clear_draft<S: KeyValueStore>(store: &S) {
    if let Err(err) = store.remove(DRAFT_KEY) {
        warn!(error = %err, "failed to clear contact form draft");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_draft_roundtrip_skips_empty_fields() {
        let store = MemoryStore::new();

        let mut values = FieldValues::default();
        values.set(Field::Name, "Jane");
        values.set(Field::Message, "I would like to discuss a project.");
        save_draft(&store, &values);

        let raw = store.get(DRAFT_KEY).unwrap().expect("draft saved");
        assert!(raw.contains("\"name\""));
        assert!(!raw.contains("\"email\""));

        let restored = load_draft(&store);
        assert_eq!(restored.get(Field::Name), "Jane");
        assert_eq!(restored.get(Field::Email), "");
        assert_eq!(
            restored.get(Field::Message),
            "I would like to discuss a project."
        );
    }

    #[test]
    fn test_load_missing_draft_yields_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_draft(&store), FieldValues::default());
    }

    #[test]
    fn test_load_corrupt_draft_yields_defaults() {
        let store = MemoryStore::with_entry(DRAFT_KEY, "{not json");
        assert_eq!(load_draft(&store), FieldValues::default());

        // Wrong value types count as corrupt too
        let store = MemoryStore::with_entry(DRAFT_KEY, "{\"name\": 42}");
        assert_eq!(load_draft(&store), FieldValues::default());
    }

    #[test]
    fn test_load_ignores_unknown_keys() {
        let store = MemoryStore::with_entry(
            DRAFT_KEY,
            "{\"name\": \"Jane\", \"company\": \"Acme\"}",
        );

        let restored = load_draft(&store);
        assert_eq!(restored.get(Field::Name), "Jane");
    }

    #[test]
    fn test_clear_draft_removes_key() {
        let store = MemoryStore::with_entry(DRAFT_KEY, "{}");
        clear_draft(&store);
        assert_eq!(store.get(DRAFT_KEY).unwrap(), None);
    }
}
