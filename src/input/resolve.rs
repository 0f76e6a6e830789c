// SPDX-License-Identifier: GPL-3.0-only

//! Text and label resolution for a key under the current modifiers.

use crate::input::modifier::ModifierState;
use crate::layout::KeyDefinition;

/// Resolves the text a key produces.
///
/// Starts from the key's output (or glyph), replaced by the shifted glyph when
/// shift or caps is active, replaced again by the alt-gr glyph when ctrl and
/// alt are both active. The alt-gr glyph therefore wins over shift.
pub fn resolve_text<'a>(key: &'a KeyDefinition, state: &ModifierState) -> Option<&'a str> {
    let mut text = key.base_text();

    if state.is_shifted() {
        if let Some(shifted) = key.shifted.as_deref() {
            text = Some(shifted);
        }
    }

    if state.is_alt_gr() {
        if let Some(alt_gr) = key.alt_gr.as_deref() {
            text = Some(alt_gr);
        }
    }

    text
}

/// Resolves the label shown on a key.
///
/// Only shift and caps affect labels. Keys without a glyph have no label.
pub fn resolve_label<'a>(key: &'a KeyDefinition, state: &ModifierState) -> Option<&'a str> {
    let glyph = key.glyph.as_deref()?;

    match key.shifted.as_deref() {
        Some(shifted) if state.is_shifted() => Some(shifted),
        _ => Some(glyph),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn euro_e() -> KeyDefinition {
        KeyDefinition::new("e")
            .with_output("e")
            .with_shifted("E")
            .with_alt_gr("€")
    }

    fn shift() -> ModifierState {
        let mut state = ModifierState::new();
        state.press_shift();
        state
    }

    fn ctrl_alt() -> ModifierState {
        let mut state = ModifierState::new();
        state.press_ctrl();
        state.press_alt();
        state
    }

    #[test]
    fn test_no_modifiers_uses_output_or_glyph() {
        let none = ModifierState::new();

        assert_eq!(resolve_text(&euro_e(), &none), Some("e"));
        assert_eq!(resolve_text(&KeyDefinition::new("q"), &none), Some("q"));
        assert_eq!(
            resolve_text(&KeyDefinition::new("a").with_output("b"), &none),
            Some("b")
        );
        assert_eq!(resolve_text(&KeyDefinition::default(), &none), None);
    }

    #[test]
    fn test_shift_and_caps_use_shifted() {
        assert_eq!(resolve_text(&euro_e(), &shift()), Some("E"));

        let mut caps = ModifierState::new();
        caps.press_caps();
        assert_eq!(resolve_text(&euro_e(), &caps), Some("E"));
    }

    #[test]
    fn test_shift_without_shifted_glyph_keeps_output() {
        let key = KeyDefinition::new("1").with_output("1");
        assert_eq!(resolve_text(&key, &shift()), Some("1"));
    }

    #[test]
    fn test_ctrl_alt_uses_alt_gr() {
        assert_eq!(resolve_text(&euro_e(), &ctrl_alt()), Some("€"));

        let plain = KeyDefinition::new("a").with_output("b").with_shifted("A");
        assert_eq!(resolve_text(&plain, &ctrl_alt()), Some("b"));
    }

    /// Shift and ctrl+alt can only coexist through Alt Gr after ctrl and alt.
    #[test]
    fn test_alt_gr_wins_over_shift() {
        let mut state = ctrl_alt();
        state.press_alt_gr();
        assert!(state.shift() && state.is_alt_gr());

        assert_eq!(resolve_text(&euro_e(), &state), Some("€"));

        let no_alt_gr = KeyDefinition::new("a").with_shifted("A");
        assert_eq!(resolve_text(&no_alt_gr, &state), Some("A"));
    }

    #[test]
    fn test_labels() {
        let none = ModifierState::new();

        assert_eq!(resolve_label(&euro_e(), &none), Some("e"));
        assert_eq!(resolve_label(&euro_e(), &shift()), Some("E"));
        assert_eq!(resolve_label(&euro_e(), &ctrl_alt()), Some("e"));
        assert_eq!(resolve_label(&KeyDefinition::new("1"), &shift()), Some("1"));
        assert_eq!(resolve_label(&KeyDefinition::default().with_shifted("X"), &shift()), None);
    }
}
