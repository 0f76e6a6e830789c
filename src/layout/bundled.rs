// SPDX-License-Identifier: GPL-3.0-only

//! Layouts compiled into the binary.
//!
//! Every JSON file under `resources/layouts/` is embedded. Registration follows
//! base dependencies: a layout whose base is also bundled is registered after it.

use rust_embed::RustEmbed;

use crate::layout::parser::layout_from_record;
use crate::layout::registry::LayoutRegistry;
use crate::layout::types::{LayoutError, LayoutRecord};

#[derive(RustEmbed)]
#[folder = "resources/layouts/"]
struct BundledLayouts;

/// Returns the file names of all bundled layouts, sorted.
pub fn bundled_layout_files() -> Vec<String> {
    let mut files: Vec<String> = BundledLayouts::iter()
        .filter(|name| name.ends_with(".json"))
        .map(|name| name.into_owned())
        .collect();
    files.sort();
    files
}

/// Parses one bundled layout file into its record.
fn read_bundled_record(file: &str) -> Result<LayoutRecord, LayoutError> {
    let embedded = BundledLayouts::get(file).ok_or_else(|| {
        LayoutError::io_error_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "not bundled"),
            file,
        )
    })?;

    serde_json::from_slice(&embedded.data).map_err(|e| LayoutError::json_error(e).with_path(file))
}

/// Registers every bundled layout into `registry`.
///
/// Files that fail to parse are logged and skipped. Returns the number of
/// layouts registered.
pub fn register_bundled_layouts(registry: &mut LayoutRegistry) -> usize {
    let mut pending: Vec<LayoutRecord> = Vec::new();

    for file in bundled_layout_files() {
        match read_bundled_record(&file) {
            Ok(record) => pending.push(record),
            Err(e) => tracing::error!("Skipping bundled layout: {}", e),
        }
    }

    let mut registered = 0;

    // Each pass registers the records whose base is absent or already
    // available. When a pass makes no progress the rest go in as they are.
    while !pending.is_empty() {
        let (ready, waiting): (Vec<_>, Vec<_>) = pending.into_iter().partition(|record| {
            record
                .base
                .as_deref()
                .is_none_or(|base| registry.contains(base))
        });

        let stalled = ready.is_empty();
        let (batch, rest) = if stalled {
            (waiting, Vec::new())
        } else {
            (ready, waiting)
        };
        pending = rest;

        for record in batch {
            let name = record.name.clone();
            match layout_from_record(record, registry) {
                Ok(layout) => {
                    registry.register(layout);
                    registered += 1;
                }
                Err(e) => tracing::error!("Skipping bundled layout '{}': {}", name, e),
            }
        }
    }

    tracing::info!("Registered {} bundled layout(s)", registered);
    registered
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_files_present() {
        let files = bundled_layout_files();
        assert!(files.contains(&"qwerty.json".to_string()));
        assert!(files.contains(&"qwertz.json".to_string()));
    }

    #[test]
    fn test_register_bundled_layouts() {
        let mut registry = LayoutRegistry::new();
        let count = register_bundled_layouts(&mut registry);

        assert_eq!(count, registry.len());
        assert!(registry.contains("QWERTY"));
        assert!(registry.contains("QWERTZ"));
    }

    #[test]
    fn test_qwerty_top_row() {
        let mut registry = LayoutRegistry::new();
        register_bundled_layouts(&mut registry);
        let qwerty = registry.get("QWERTY").unwrap();

        let glyphs: Vec<&str> = (13..=18)
            .map(|slot| qwerty.key(slot).unwrap().glyph.as_deref().unwrap())
            .collect();
        assert_eq!(glyphs, ["q", "w", "e", "r", "t", "y"]);
    }

    /// QWERTZ is derived from QWERTY: unchanged slots come from the base.
    #[test]
    fn test_qwertz_inherits_from_qwerty() {
        let mut registry = LayoutRegistry::new();
        register_bundled_layouts(&mut registry);
        let qwerty = registry.get("QWERTY").unwrap();
        let qwertz = registry.get("QWERTZ").unwrap();

        assert_eq!(qwertz.len(), qwerty.len());
        assert_eq!(qwertz.key(18).unwrap().glyph.as_deref(), Some("z"));
        assert_eq!(qwertz.key(37).unwrap().glyph.as_deref(), Some("y"));
        assert_eq!(qwertz.key(13), qwerty.key(13));
        assert_eq!(qwertz.key(15).unwrap().alt_gr.as_deref(), Some("€"));
    }
}
