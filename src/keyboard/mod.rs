// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard controller for Softboard.
//!
//! The controller owns the current layout and the modifier state. Every user
//! action enters through [`KeyboardController::activate`], which notifies press
//! observers, then text observers, then applies the modifier transition.
//!
//! # Activation Rules
//!
//! - **Slot keys**: press + resolved text; an active shift is then released
//!   (with its own Shift press notification)
//! - **Tab**: press + `"\t"`, no resolution
//! - **Space**: press + resolved text of the space key
//! - **Shift, Caps, Ctrl, Alt, Alt Gr**: press + modifier transition
//! - **Enter, Esc, Backspace, Super, Menu, Swap**: press only
//!
//! A slot missing from the current layout is ignored.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use softboard::input::{ActivationId, FunctionKind};
//! use softboard::keyboard::{KeyboardController, TextObserver};
//! use softboard::layout::{KeyDefinition, Layout};
//!
//! let layout = Layout::new("Demo", [(1, KeyDefinition::new("e").with_shifted("E"))]);
//! let mut keyboard = KeyboardController::new(layout);
//!
//! let printer: Arc<dyn TextObserver> = Arc::new(|text: &str| print!("{text}"));
//! keyboard.on_text(printer);
//!
//! keyboard.activate(FunctionKind::Shift.into());
//! keyboard.activate(ActivationId::Slot(1)); // prints "E"
//! ```

pub mod observer;

use std::sync::Arc;

use futures::channel::mpsc;

use crate::input::{ActivationId, FunctionKind, KeyRole, ModifierState, resolve_label, resolve_text};
use crate::layout::{KeyDefinition, Layout, SlotId};

pub use observer::{ChannelObserver, KeyboardEvent, ObserverSet, PressObserver, TextObserver};

/// Text emitted by the Tab key.
pub const TAB_TEXT: &str = "\t";

/// Text emitted by the Space key.
pub const SPACE_TEXT: &str = " ";

/// Turns activations into notifications and modifier transitions.
pub struct KeyboardController {
    layout: Layout,
    modifiers: ModifierState,
    text_observers: ObserverSet<dyn TextObserver>,
    press_observers: ObserverSet<dyn PressObserver>,
    space_key: KeyDefinition,
}

impl KeyboardController {
    /// Creates a controller showing `layout` with no modifier active.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            modifiers: ModifierState::new(),
            text_observers: ObserverSet::new(),
            press_observers: ObserverSet::new(),
            space_key: KeyDefinition::default().with_output(SPACE_TEXT),
        }
    }

    /// Replaces the current layout. Modifier state is kept.
    pub fn set_layout(&mut self, layout: Layout) {
        tracing::debug!("Switching layout '{}' -> '{}'", self.layout.name(), layout.name());
        self.layout = layout;
    }

    /// Returns the current layout.
    pub fn current_layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the current modifier state.
    pub fn modifiers(&self) -> &ModifierState {
        &self.modifiers
    }

    /// Registers a text observer. Registering the same `Arc` twice is a no-op.
    pub fn on_text(&mut self, observer: Arc<dyn TextObserver>) -> &mut Self {
        self.text_observers.insert(observer);
        self
    }

    /// Registers a press observer. Registering the same `Arc` twice is a no-op.
    pub fn on_press(&mut self, observer: Arc<dyn PressObserver>) -> &mut Self {
        self.press_observers.insert(observer);
        self
    }

    /// Label currently shown on a slot, if any.
    pub fn glyph_for(&self, slot: SlotId) -> Option<&str> {
        self.layout
            .key(slot)
            .and_then(|key| resolve_label(key, &self.modifiers))
    }

    /// Every slot of the current layout with its current label.
    pub fn labels(&self) -> impl Iterator<Item = (SlotId, Option<&str>)> + '_ {
        self.layout
            .keys()
            .iter()
            .map(|(slot, key)| (*slot, resolve_label(key, &self.modifiers)))
    }

    /// Handles one activation.
    ///
    /// Returns true if the modifier flags changed, meaning key labels may need
    /// to be redrawn.
    pub fn activate(&mut self, id: ActivationId) -> bool {
        let before = self.modifiers;

        match id {
            ActivationId::Slot(slot) => self.activate_slot(slot),
            ActivationId::Function(kind) => self.activate_function(kind),
        }

        self.modifiers != before
    }

    fn activate_slot(&mut self, slot: SlotId) {
        let Some(key) = self.layout.key(slot).cloned() else {
            tracing::debug!("Ignoring activation of unmapped slot {}", slot);
            return;
        };

        self.press(&KeyRole::Printable(key.clone()));
        self.write(&key);

        // Shift only lasts for one key
        if self.modifiers.shift() {
            self.activate_function(FunctionKind::Shift);
        }
    }

    fn activate_function(&mut self, kind: FunctionKind) {
        self.press(&KeyRole::Function(kind));

        match kind {
            FunctionKind::Tab => self.emit_text(TAB_TEXT),
            FunctionKind::Space => self.write(&self.space_key),
            _ => {
                if self.modifiers.apply(kind) {
                    tracing::debug!("{} -> {:?}", kind, self.modifiers);
                }
            }
        }
    }

    fn press(&self, key: &KeyRole) {
        for observer in self.press_observers.iter() {
            observer.on_press(key);
        }
    }

    fn write(&self, key: &KeyDefinition) {
        match resolve_text(key, &self.modifiers) {
            Some(text) => self.emit_text(text),
            None => tracing::debug!("Key {:?} produced no text", key),
        }
    }

    fn emit_text(&self, text: &str) {
        for observer in self.text_observers.iter() {
            observer.on_text(text);
        }
    }
}

/// Registers a [`ChannelObserver`] on `keyboard` for both streams and returns
/// the receiving end.
pub fn event_channel(keyboard: &mut KeyboardController) -> mpsc::UnboundedReceiver<KeyboardEvent> {
    let (observer, rx) = ChannelObserver::new();
    keyboard
        .on_text(Arc::clone(&observer) as Arc<dyn TextObserver>)
        .on_press(observer as Arc<dyn PressObserver>);
    rx
}

// ============================================================================
// Tests
// ============================================================================
