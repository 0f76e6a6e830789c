// SPDX-License-Identifier: GPL-3.0-only

//! Activation identifiers and press payloads.
//!
//! An [`ActivationId`] names what the user clicked: a layout slot or one of
//! the fixed function keys. A [`KeyRole`] is what press observers receive.

use std::fmt;

use crate::layout::{KeyDefinition, SlotId};

/// Fixed function keys that do not depend on the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FunctionKind {
    Esc,
    Tab,
    Caps,
    Shift,
    Ctrl,
    Alt,
    AltGr,
    Space,
    Enter,
    Backspace,
    Os,
    Menu,
    Swap,
}

impl FunctionKind {
    /// All function keys.
    pub const ALL: [FunctionKind; 13] = [
        FunctionKind::Esc,
        FunctionKind::Tab,
        FunctionKind::Caps,
        FunctionKind::Shift,
        FunctionKind::Ctrl,
        FunctionKind::Alt,
        FunctionKind::AltGr,
        FunctionKind::Space,
        FunctionKind::Enter,
        FunctionKind::Backspace,
        FunctionKind::Os,
        FunctionKind::Menu,
        FunctionKind::Swap,
    ];

    /// Label drawn on the key.
    pub fn label(self) -> &'static str {
        match self {
            FunctionKind::Esc => "Esc",
            FunctionKind::Tab => "Tab",
            FunctionKind::Caps => "Caps",
            FunctionKind::Shift => "Shift",
            FunctionKind::Ctrl => "Ctrl",
            FunctionKind::Alt => "Alt",
            FunctionKind::AltGr => "Alt Gr",
            FunctionKind::Space => "Space",
            FunctionKind::Enter => "Enter",
            FunctionKind::Backspace => "Backspace",
            FunctionKind::Os => "Super",
            FunctionKind::Menu => "Menu",
            FunctionKind::Swap => "Swap",
        }
    }

    /// Returns true for keys that change modifier state.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            FunctionKind::Caps
                | FunctionKind::Shift
                | FunctionKind::Ctrl
                | FunctionKind::Alt
                | FunctionKind::AltGr
        )
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivationId {
    /// A layout slot
    Slot(SlotId),
    /// A function key
    Function(FunctionKind),
}

impl From<SlotId> for ActivationId {
    fn from(slot: SlotId) -> Self {
        ActivationId::Slot(slot)
    }
}

impl From<FunctionKind> for ActivationId {
    fn from(kind: FunctionKind) -> Self {
        ActivationId::Function(kind)
    }
}

/// Payload of a press notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyRole {
    /// A layout key, with its definition at the time of the press
    Printable(KeyDefinition),
    /// A function key
    Function(FunctionKind),
}

impl KeyRole {
    /// Returns the function kind, if this is a function key.
    pub fn function(&self) -> Option<FunctionKind> {
        match self {
            KeyRole::Function(kind) => Some(*kind),
            KeyRole::Printable(_) => None,
        }
    }

    /// Returns the key definition, if this is a layout key.
    pub fn definition(&self) -> Option<&KeyDefinition> {
        match self {
            KeyRole::Printable(key) => Some(key),
            KeyRole::Function(_) => None,
        }
    }
}
