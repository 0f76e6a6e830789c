// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard layouts for Softboard.
//!
//! A layout maps slot ids (key positions) to key definitions. Layouts can be
//! derived from a base layout by name: the base's keys are copied and the
//! derived layout only lists the slots it changes.
//!
//! # Features
//!
//! - **Layout derivation**: Start from a registered base and override slots
//! - **Registry**: Append-only, name-searched collection of layouts
//! - **JSON persistence**: Load and save layouts in the flat record format
//! - **Permissive loading**: `_or_empty` helpers degrade to the `"Empty"` layout
//! - **Bundled layouts**: QWERTY and QWERTZ compiled into the binary
//!
//! # File Format
//!
//! ```json
//! {
//!     "base": "QWERTY",
//!     "name": "QWERTZ",
//!     "keys": {
//!         "18": {"character": "z", "upperCase": "Z"},
//!         "15": {"character": "e", "upperCase": "E", "altGr": "€"}
//!     }
//! }
//! ```
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use softboard::layout::{parse_layout_or_empty, register_bundled_layouts, LayoutRegistry};
//!
//! let mut registry = LayoutRegistry::new();
//! register_bundled_layouts(&mut registry);
//!
//! let layout = parse_layout_or_empty(
//!     r#"{"base": "QWERTY", "name": "Mine", "keys": {"13": {"character": "ä"}}}"#,
//!     &registry,
//! );
//! registry.register(layout);
//! ```

// Sub-modules
pub mod bundled;
pub mod parser;
pub mod registry;
pub mod types;

// Re-export public API
pub use bundled::{bundled_layout_files, register_bundled_layouts};
pub use parser::{
    load_layout_file, load_layout_file_or_empty, parse_layout, parse_layout_or_empty,
    serialize_layout, serialize_layout_or_empty,
};
pub use registry::LayoutRegistry;
pub use types::{EMPTY_LAYOUT_NAME, KeyDefinition, Layout, LayoutError, LayoutRecord, SlotId};

// ============================================================================
// Module Tests
// ============================================================================
