// SPDX-License-Identifier: GPL-3.0-only

//! Core data types for keyboard layouts.
//!
//! This module defines key definitions, the layout value itself, the JSON
//! record used for persistence, and the error type returned by the strict
//! loading functions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::layout::registry::LayoutRegistry;

/// Name of the layout returned when a layout cannot be loaded.
pub const EMPTY_LAYOUT_NAME: &str = "Empty";

/// Identifies a key position in a layout, independent of the glyph it shows.
///
/// Any integer is a valid id, negative ones included; a grid only shows the
/// ids it places.
pub type SlotId = i32;

// ============================================================================
// Error Handling Types
// ============================================================================

/// Error type for layout loading and serialization.
///
/// Mirrors the context-carrying style used for layout parsing: each variant
/// keeps the data needed to print a helpful message, including an optional
/// suggestion.
#[derive(Debug)]
pub enum LayoutError {
    /// I/O error occurred while reading a layout file
    IoError {
        /// The underlying I/O error
        source: std::io::Error,
        /// Optional file path that caused the error
        file_path: Option<String>,
        /// Optional suggestion for fixing the error
        suggestion: Option<String>,
    },

    /// JSON (de)serialization error
    JsonError {
        /// The underlying serde_json error
        source: serde_json::Error,
        /// Optional file path being parsed
        file_path: Option<String>,
        /// Line number where the error occurred (0 when not applicable)
        line_number: Option<usize>,
        /// Optional suggestion for fixing the error
        suggestion: Option<String>,
    },

    /// The record was well-formed JSON but describes an invalid layout
    ValidationError {
        /// Human-readable description of the problem
        message: String,
        /// Path to the offending field (e.g. "name")
        field_path: String,
        /// Optional file path being validated
        file_path: Option<String>,
    },
}

impl LayoutError {
    /// Creates an I/O error with context.
    pub fn io_error(source: std::io::Error) -> Self {
        Self::IoError {
            source,
            file_path: None,
            suggestion: None,
        }
    }

    /// Creates an I/O error with file path.
    pub fn io_error_with_path(source: std::io::Error, file_path: impl Into<String>) -> Self {
        Self::IoError {
            source,
            file_path: Some(file_path.into()),
            suggestion: Some("Check that the file exists and you have read permissions".into()),
        }
    }

    /// Creates a JSON error with context.
    pub fn json_error(source: serde_json::Error) -> Self {
        let line_number = match source.line() {
            0 => None,
            line => Some(line),
        };
        Self::JsonError {
            source,
            file_path: None,
            line_number,
            suggestion: Some("Check the JSON syntax at the indicated line".into()),
        }
    }

    /// Attaches a file path to an error that does not carry one yet.
    pub fn with_path(self, path: impl Into<String>) -> Self {
        let path = path.into();
        match self {
            Self::IoError {
                source,
                file_path: None,
                suggestion,
            } => Self::IoError {
                source,
                file_path: Some(path),
                suggestion,
            },
            Self::JsonError {
                source,
                file_path: None,
                line_number,
                suggestion,
            } => Self::JsonError {
                source,
                file_path: Some(path),
                line_number,
                suggestion,
            },
            Self::ValidationError {
                message,
                field_path,
                file_path: None,
            } => Self::ValidationError {
                message,
                field_path,
                file_path: Some(path),
            },
            other => other,
        }
    }

    /// Creates a validation error for a single field.
    pub fn validation(message: impl Into<String>, field_path: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field_path: field_path.into(),
            file_path: None,
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::IoError {
                source,
                file_path,
                suggestion,
            } => {
                write!(f, "I/O error")?;
                if let Some(path) = file_path {
                    write!(f, " reading file '{}'", path)?;
                }
                write!(f, ": {}", source)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            LayoutError::JsonError {
                source,
                file_path,
                line_number,
                suggestion,
            } => {
                write!(f, "JSON error")?;
                if let Some(path) = file_path {
                    write!(f, " in file '{}'", path)?;
                }
                if let Some(line) = line_number {
                    write!(f, " at line {}", line)?;
                }
                write!(f, ": {}", source)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            LayoutError::ValidationError {
                message,
                field_path,
                file_path,
            } => {
                write!(f, "Invalid layout")?;
                if let Some(path) = file_path {
                    write!(f, " in file '{}'", path)?;
                }
                write!(f, ": {}: {}", field_path, message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::IoError { source, .. } => Some(source),
            LayoutError::JsonError { source, .. } => Some(source),
            LayoutError::ValidationError { .. } => None,
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err)
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::json_error(err)
    }
}

// ============================================================================
// Key Definitions
// ============================================================================

/// What a single key shows and produces.
///
/// A key without a `glyph` is a non-printing key and carries no label.
/// The serialized field names follow the layout file format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyDefinition {
    /// Label shown when no modifier applies
    #[serde(rename = "character", default, skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,

    /// Text emitted on activation; falls back to `glyph` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Label and output while shift or caps is active
    #[serde(rename = "upperCase", default, skip_serializing_if = "Option::is_none")]
    pub shifted: Option<String>,

    /// Label and output while ctrl and alt are both active
    #[serde(rename = "altGr", default, skip_serializing_if = "Option::is_none")]
    pub alt_gr: Option<String>,
}

impl KeyDefinition {
    /// Creates a printable key showing `glyph`.
    pub fn new(glyph: impl Into<String>) -> Self {
        Self {
            glyph: Some(glyph.into()),
            ..Self::default()
        }
    }

    /// Sets the text emitted instead of the glyph.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Sets the shifted glyph.
    pub fn with_shifted(mut self, shifted: impl Into<String>) -> Self {
        self.shifted = Some(shifted.into());
        self
    }

    /// Sets the alt-gr glyph.
    pub fn with_alt_gr(mut self, alt_gr: impl Into<String>) -> Self {
        self.alt_gr = Some(alt_gr.into());
        self
    }

    /// Text produced with no modifier active.
    pub fn base_text(&self) -> Option<&str> {
        self.output.as_deref().or(self.glyph.as_deref())
    }
}

// ============================================================================
// Layout
// ============================================================================

/// A named, immutable mapping from slot ids to key definitions.
///
/// A layout may be derived from a base layout: the base's effective key map is
/// copied and the layout's own keys are laid over it. The copy means a derived
/// layout never shares storage with its base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    name: String,
    keys: BTreeMap<SlotId, KeyDefinition>,
}

impl Layout {
    /// Creates a layout with no base.
    pub fn new(
        name: impl Into<String>,
        keys: impl IntoIterator<Item = (SlotId, KeyDefinition)>,
    ) -> Self {
        Self::with_base(None, name, keys)
    }

    /// Creates a layout on top of an explicit base layout.
    ///
    /// Every key of `base` is present in the result unless overridden.
    pub fn with_base(
        base: Option<&Layout>,
        name: impl Into<String>,
        overrides: impl IntoIterator<Item = (SlotId, KeyDefinition)>,
    ) -> Self {
        let mut keys = base.map(|b| b.keys.clone()).unwrap_or_default();
        keys.extend(overrides);

        Self {
            name: name.into(),
            keys,
        }
    }

    /// Creates a layout whose base is looked up by name in `registry`.
    ///
    /// The first registered layout named `base_name` is used, unless its name
    /// equals `name`. An unresolvable base silently falls back to no base.
    pub fn create(
        registry: &LayoutRegistry,
        base_name: Option<&str>,
        name: impl Into<String>,
        overrides: impl IntoIterator<Item = (SlotId, KeyDefinition)>,
    ) -> Self {
        let name = name.into();
        let base = base_name.and_then(|base_name| registry.find_base(base_name, &name));

        if base.is_none() {
            if let Some(base_name) = base_name {
                tracing::debug!(
                    "Base layout '{}' not found for '{}', starting from an empty map",
                    base_name,
                    name
                );
            }
        }

        Self::with_base(base, name, overrides)
    }

    /// The layout returned when loading fails.
    pub fn empty() -> Self {
        Self::new(EMPTY_LAYOUT_NAME, [])
    }

    /// Returns the layout name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the effective key map (base keys plus overrides).
    pub fn keys(&self) -> &BTreeMap<SlotId, KeyDefinition> {
        &self.keys
    }

    /// Looks up the key in a slot.
    pub fn key(&self, slot: SlotId) -> Option<&KeyDefinition> {
        self.keys.get(&slot)
    }

    /// Number of slots with a key definition.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no slot has a key definition.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

// ============================================================================
// Persistence Record
// ============================================================================

/// JSON form of a layout.
///
/// `keys` holds only the overrides when `base` is set; serialized layouts are
/// written flattened with the full effective map and no base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRecord {
    /// Name of the layout this one is derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Unique layout name
    pub name: String,

    /// Keys by slot id
    #[serde(default)]
    pub keys: BTreeMap<SlotId, KeyDefinition>,
}

impl From<&Layout> for LayoutRecord {
    fn from(layout: &Layout) -> Self {
        Self {
            base: None,
            name: layout.name.clone(),
            keys: layout.keys.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
