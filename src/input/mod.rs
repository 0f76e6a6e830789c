// SPDX-License-Identifier: GPL-3.0-only

//! Input handling for the Softboard keyboard.
//!
//! This module holds the pieces the keyboard controller is built from:
//! activation identifiers, modifier state and text resolution.
//!
//! # Features
//!
//! - **Activations**: `ActivationId` names a layout slot or a function key
//! - **Modifier state**: shift (one-shot), caps, ctrl and alt (sticky)
//! - **Resolution**: ctrl + alt selects the alt-gr glyph, shift or caps the shifted one
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use softboard::input::{resolve_text, ModifierState};
//! use softboard::layout::KeyDefinition;
//!
//! let key = KeyDefinition::new("e").with_shifted("E").with_alt_gr("€");
//! let mut state = ModifierState::new();
//!
//! state.press_shift();
//! assert_eq!(resolve_text(&key, &state), Some("E"));
//! ```

// Sub-modules
pub mod activation;
pub mod modifier;
pub mod resolve;

// Re-export public API
pub use activation::{ActivationId, FunctionKind, KeyRole};
pub use modifier::ModifierState;
pub use resolve::{resolve_label, resolve_text};

// ============================================================================
// Module Tests
// ============================================================================
