// SPDX-License-Identifier: GPL-3.0-only

//! Layout loading and serialization.
//!
//! The strict functions return a [`LayoutError`]. The `_or_empty` variants are
//! meant for UI boundaries: they log the failure and degrade to the `"Empty"`
//! layout (or `"{}"` when serializing) instead of returning an error.

use std::fs;
use std::path::Path;

use crate::layout::registry::LayoutRegistry;
use crate::layout::types::{Layout, LayoutError, LayoutRecord};

/// Parses a layout from a JSON string, resolving its base in `registry`.
///
/// # Example
///
/// ```rust,ignore
/// use softboard::layout::{parse_layout, LayoutRegistry};
///
/// let registry = LayoutRegistry::new();
/// let layout = parse_layout(r#"{"name": "Tiny", "keys": {"1": {"character": "a"}}}"#, &registry)?;
/// assert_eq!(layout.name(), "Tiny");
/// ```
pub fn parse_layout(json: &str, registry: &LayoutRegistry) -> Result<Layout, LayoutError> {
    let record: LayoutRecord = serde_json::from_str(json)?;
    layout_from_record(record, registry)
}

/// Parses a layout, returning the `"Empty"` layout on any failure.
pub fn parse_layout_or_empty(json: &str, registry: &LayoutRegistry) -> Layout {
    parse_layout(json, registry).unwrap_or_else(|e| {
        tracing::error!("Failed to parse layout: {}", e);
        Layout::empty()
    })
}

/// Reads and parses a layout file.
pub fn load_layout_file(
    path: impl AsRef<Path>,
    registry: &LayoutRegistry,
) -> Result<Layout, LayoutError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let json = fs::read_to_string(path).map_err(|e| LayoutError::io_error_with_path(e, &display))?;

    parse_layout(&json, registry).map_err(|e| e.with_path(display))
}

/// Reads and parses a layout file, returning the `"Empty"` layout on any failure.
pub fn load_layout_file_or_empty(path: impl AsRef<Path>, registry: &LayoutRegistry) -> Layout {
    load_layout_file(path, registry).unwrap_or_else(|e| {
        tracing::error!("Failed to load layout: {}", e);
        Layout::empty()
    })
}

/// Serializes a layout to JSON.
///
/// The output is flattened: it carries the full effective key map and no
/// base, so it loads back to the same layout against any registry.
pub fn serialize_layout(layout: &Layout) -> Result<String, LayoutError> {
    let record = LayoutRecord::from(layout);
    Ok(serde_json::to_string(&record)?)
}

/// Serializes a layout, returning `"{}"` on failure.
pub fn serialize_layout_or_empty(layout: &Layout) -> String {
    serialize_layout(layout).unwrap_or_else(|e| {
        tracing::error!("Could not serialize layout '{}': {}", layout.name(), e);
        "{}".to_string()
    })
}

/// Builds a layout from its record, validating the name.
pub(crate) fn layout_from_record(
    record: LayoutRecord,
    registry: &LayoutRegistry,
) -> Result<Layout, LayoutError> {
    if record.name.trim().is_empty() {
        return Err(LayoutError::validation("layout name must not be empty", "name"));
    }

    Ok(Layout::create(
        registry,
        record.base.as_deref(),
        record.name,
        record.keys,
    ))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::{KeyDefinition, EMPTY_LAYOUT_NAME};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn base_registry() -> LayoutRegistry {
        let mut registry = LayoutRegistry::new();
        registry.register(Layout::new(
            "Base",
            [
                (1, KeyDefinition::new("a").with_shifted("A")),
                (2, KeyDefinition::new("b").with_shifted("B")),
            ],
        ));
        registry
    }

    #[test]
    fn test_parse_valid_json() {
        let json = r#"{
            "name": "Test",
            "keys": {
                "1": {"character": "e", "output": "e", "upperCase": "E", "altGr": "€"},
                "7": {"character": "x"}
            }
        }"#;

        let layout = parse_layout(json, &LayoutRegistry::new()).unwrap();

        assert_eq!(layout.name(), "Test");
        assert_eq!(layout.len(), 2);
        let e = layout.key(1).unwrap();
        assert_eq!(e.shifted.as_deref(), Some("E"));
        assert_eq!(e.alt_gr.as_deref(), Some("€"));
        assert_eq!(layout.key(7).unwrap().output, None);
    }

    #[test]
    fn test_parse_with_base_overlays_keys() {
        let json = r#"{"base": "Base", "name": "Derived", "keys": {"2": {"character": "z"}, "3": {"character": "c"}}}"#;

        let layout = parse_layout(json, &base_registry()).unwrap();

        assert_eq!(layout.len(), 3);
        assert_eq!(layout.key(1).unwrap().glyph.as_deref(), Some("a"));
        assert_eq!(layout.key(2).unwrap().glyph.as_deref(), Some("z"));
        assert_eq!(layout.key(3).unwrap().glyph.as_deref(), Some("c"));
    }

    #[test]
    fn test_parse_unknown_base_starts_empty() {
        let json = r#"{"base": "Nowhere", "name": "Alone", "keys": {"5": {"character": "q"}}}"#;

        let layout = parse_layout(json, &base_registry()).unwrap();

        assert_eq!(layout.len(), 1);
        assert!(layout.key(5).is_some());
    }

    #[test]
    fn test_parse_missing_keys_is_empty_map() {
        let layout = parse_layout(r#"{"name": "NoKeys"}"#, &LayoutRegistry::new()).unwrap();
        assert!(layout.is_empty());
    }

    #[test]
    fn test_malformed_json_returns_error() {
        let result = parse_layout("{ not json", &LayoutRegistry::new());
        assert!(matches!(result, Err(LayoutError::JsonError { .. })));
    }

    #[test]
    fn test_malformed_json_degrades_to_empty() {
        for json in [
            "{ not json",
            "",
            "[]",
            r#"{"keys": {}}"#,
            r#"{"name": ""}"#,
            r#"{"name": "Bad", "keys": {"one": {"character": "a"}}}"#,
        ] {
            let layout = parse_layout_or_empty(json, &LayoutRegistry::new());
            assert_eq!(layout.name(), EMPTY_LAYOUT_NAME, "input: {json}");
            assert!(layout.is_empty(), "input: {json}");
        }
    }

    #[test]
    fn test_empty_name_is_validation_error() {
        let result = parse_layout(r#"{"name": "  "}"#, &LayoutRegistry::new());
        assert!(matches!(result, Err(LayoutError::ValidationError { .. })));
    }

    #[test]
    fn test_serialize_is_flattened() {
        let registry = base_registry();
        let derived = parse_layout(
            r#"{"base": "Base", "name": "Derived", "keys": {"3": {"character": "c"}}}"#,
            &registry,
        )
        .unwrap();

        let json = serialize_layout(&derived).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "Derived");
        assert!(value.get("base").is_none());
        assert_eq!(value["keys"]["1"]["character"], "a");
        assert_eq!(value["keys"]["3"]["character"], "c");
    }

    #[test]
    fn test_serialize_then_parse_preserves_layout() {
        let registry = base_registry();
        let original = parse_layout(
            r#"{"base": "Base", "name": "Derived", "keys": {"2": {"character": "z", "altGr": "ż"}}}"#,
            &registry,
        )
        .unwrap();

        let restored = parse_layout(&serialize_layout_or_empty(&original), &LayoutRegistry::new()).unwrap();

        assert_eq!(restored, original);
    }

    /// Slot ids are plain integers; negative and sparse ids load and save.
    #[test]
    fn test_negative_slot_ids_round_trip() {
        let json = r#"{"name": "Neg", "keys": {"-1": {"character": "a"}, "2": {"character": "b"}}}"#;

        let layout = parse_layout_or_empty(json, &LayoutRegistry::new());
        assert_eq!(layout.name(), "Neg");
        assert_eq!(layout.key(-1), Some(&KeyDefinition::new("a")));
        assert_eq!(layout.key(2), Some(&KeyDefinition::new("b")));

        let saved = serialize_layout(&layout).unwrap();
        let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
        assert_eq!(value["keys"]["-1"]["character"], "a");

        let restored = parse_layout(&saved, &LayoutRegistry::new()).unwrap();
        assert_eq!(restored, layout);
    }

    #[test]
    fn test_load_layout_file() {
        let json = r#"{"name": "File Layout", "keys": {"13": {"character": "q", "upperCase": "Q"}}}"#;

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(json.as_bytes())
            .expect("Failed to write temp file");

        let layout = load_layout_file(temp_file.path(), &LayoutRegistry::new()).unwrap();

        assert_eq!(layout.name(), "File Layout");
        assert_eq!(layout.key(13).unwrap().glyph.as_deref(), Some("q"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_layout_file("/nonexistent/path/to/layout.json", &LayoutRegistry::new());

        match result {
            Err(LayoutError::IoError { file_path, suggestion, .. }) => {
                assert_eq!(file_path.as_deref(), Some("/nonexistent/path/to/layout.json"));
                assert!(suggestion.is_some());
            }
            other => panic!("Expected IoError, got {:?}", other),
        }

        let fallback =
            load_layout_file_or_empty("/nonexistent/path/to/layout.json", &LayoutRegistry::new());
        assert_eq!(fallback.name(), EMPTY_LAYOUT_NAME);
    }

    #[test]
    fn test_load_malformed_file_reports_path() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file.write_all(b"{\n  \"name\": ,\n}").unwrap();

        let err = load_layout_file(temp_file.path(), &LayoutRegistry::new()).unwrap_err();
        let display = err.to_string();

        assert!(display.contains("JSON error"));
        assert!(display.contains(&temp_file.path().display().to_string()));
    }
}
