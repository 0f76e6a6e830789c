// SPDX-License-Identifier: GPL-3.0-only

//! Modifier state management for keyboard input.
//!
//! Four flags are tracked: shift, caps, ctrl and alt. Shift is one-shot (it is
//! released after one printable key), the others are sticky. The combination
//! ctrl + alt is the alt-gr condition.
//!
//! Transitions follow these rules:
//!
//! | Key    | Effect                                              |
//! |--------|-----------------------------------------------------|
//! | Shift  | toggle shift; turning it on clears caps             |
//! | Caps   | toggle caps; shift mirrors caps                     |
//! | Ctrl   | toggle ctrl; turning it on clears shift and caps    |
//! | Alt    | toggle alt; turning it on clears shift and caps     |
//! | Alt Gr | shift and caps both on: clear both; else set both   |

use crate::input::activation::FunctionKind;

/// The modifier flags of a keyboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierState {
    shift: bool,
    caps: bool,
    ctrl: bool,
    alt: bool,
}

impl ModifierState {
    /// Creates a new `ModifierState` with no active modifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shift(&self) -> bool {
        self.shift
    }

    #[must_use]
    pub fn caps(&self) -> bool {
        self.caps
    }

    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.ctrl
    }

    #[must_use]
    pub fn alt(&self) -> bool {
        self.alt
    }

    /// Returns true when shifted glyphs apply (shift or caps).
    #[must_use]
    pub fn is_shifted(&self) -> bool {
        self.shift || self.caps
    }

    /// Returns true when alt-gr glyphs apply (ctrl and alt).
    #[must_use]
    pub fn is_alt_gr(&self) -> bool {
        self.ctrl && self.alt
    }

    /// Checks if any modifiers are currently active.
    #[must_use]
    pub fn has_active_modifiers(&self) -> bool {
        self.shift || self.caps || self.ctrl || self.alt
    }

    /// Toggles shift. Turning shift on clears caps.
    pub fn press_shift(&mut self) {
        self.shift = !self.shift;
        if self.shift {
            self.caps = false;
        }
    }

    /// Toggles caps, and sets shift to match.
    pub fn press_caps(&mut self) {
        self.caps = !self.caps;
        self.shift = self.caps;
    }

    /// Toggles ctrl. Turning ctrl on clears shift and caps.
    pub fn press_ctrl(&mut self) {
        self.ctrl = !self.ctrl;
        if self.ctrl {
            self.shift = false;
            self.caps = false;
        }
    }

    /// Toggles alt. Turning alt on clears shift and caps.
    pub fn press_alt(&mut self) {
        self.alt = !self.alt;
        if self.alt {
            self.shift = false;
            self.caps = false;
        }
    }

    /// Clears shift and caps when both are set, otherwise sets both.
    pub fn press_alt_gr(&mut self) {
        let both = self.caps && self.shift;
        self.caps = !both;
        self.shift = !both;
    }

    /// Applies the transition for a function key.
    ///
    /// Returns true if any flag changed. Keys without a transition leave the
    /// state untouched.
    pub fn apply(&mut self, kind: FunctionKind) -> bool {
        let before = *self;

        match kind {
            FunctionKind::Shift => self.press_shift(),
            FunctionKind::Caps => self.press_caps(),
            FunctionKind::Ctrl => self.press_ctrl(),
            FunctionKind::Alt => self.press_alt(),
            FunctionKind::AltGr => self.press_alt_gr(),
            _ => {}
        }

        *self != before
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let state = ModifierState::default();

        assert!(!state.has_active_modifiers());
        assert!(!state.is_shifted());
        assert!(!state.is_alt_gr());
    }

    /// Shift toggles and clears caps; a second press turns it off again.
    #[test]
    fn test_shift_toggle_clears_caps() {
        let mut state = ModifierState::new();
        state.press_caps();
        assert!(state.caps());

        state.press_shift();
        // caps mirrored shift on, so this press turns shift off
        assert!(!state.shift());
        assert!(state.caps());

        state.press_shift();
        assert!(state.shift());
        assert!(!state.caps());

        state.press_shift();
        assert!(!state.shift());
        assert!(!state.caps());
    }

    #[test]
    fn test_caps_mirrors_into_shift() {
        let mut state = ModifierState::new();

        state.press_caps();
        assert!(state.caps());
        assert!(state.shift());

        state.press_caps();
        assert!(!state.caps());
        assert!(!state.shift());
    }

    #[test]
    fn test_ctrl_and_alt_clear_shift_and_caps() {
        let mut state = ModifierState::new();
        state.press_caps();

        state.press_ctrl();
        assert!(state.ctrl());
        assert!(!state.shift());
        assert!(!state.caps());

        state.press_shift();
        state.press_alt();
        assert!(state.alt());
        assert!(state.is_alt_gr());
        assert!(!state.shift());
        assert!(!state.caps());
    }

    /// Turning ctrl off does not touch shift.
    #[test]
    fn test_ctrl_release_keeps_shift() {
        let mut state = ModifierState::new();
        state.press_ctrl();
        state.press_shift();

        state.press_ctrl();
        assert!(!state.ctrl());
        assert!(state.shift());
    }

    #[test]
    fn test_alt_gr_sets_then_clears_both() {
        let mut state = ModifierState::new();

        state.press_alt_gr();
        assert!(state.shift());
        assert!(state.caps());

        state.press_alt_gr();
        assert!(!state.shift());
        assert!(!state.caps());

        // Only shift set: alt gr sets both
        state.press_shift();
        state.press_alt_gr();
        assert!(state.shift());
        assert!(state.caps());
        assert!(!state.ctrl());
        assert!(!state.alt());
    }

    #[test]
    fn test_apply_reports_change() {
        let mut state = ModifierState::new();

        assert!(state.apply(FunctionKind::Shift));
        assert!(!state.apply(FunctionKind::Enter));
        assert!(!state.apply(FunctionKind::Swap));
        assert!(state.apply(FunctionKind::Ctrl));
        assert!(state.ctrl());
        assert!(!state.shift() && !state.caps() && !state.alt());
    }

    /// Whatever the starting point, ctrl then alt leaves shift and caps clear.
    #[test]
    fn test_ctrl_alt_from_every_state() {
        for bits in 0u8..4 {
            let mut state = ModifierState {
                shift: bits & 1 != 0,
                caps: bits & 2 != 0,
                ctrl: false,
                alt: false,
            };

            state.press_ctrl();
            state.press_alt();

            assert!(state.is_alt_gr(), "bits {bits:02b}");
            assert!(!state.is_shifted(), "bits {bits:02b}");
        }
    }
}
