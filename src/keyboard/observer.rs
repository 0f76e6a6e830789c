// SPDX-License-Identifier: GPL-3.0-only

//! Observer sets for keyboard notifications.
//!
//! Observers are shared with `Arc` and stored at most once: adding the same
//! `Arc` twice keeps a single entry, so it is notified once per event.

use std::sync::Arc;

use futures::channel::mpsc;

use crate::input::KeyRole;

/// Receives text produced by the keyboard.
pub trait TextObserver: Send + Sync {
    fn on_text(&self, text: &str);
}

/// Receives every key press, including modifier and function keys.
pub trait PressObserver: Send + Sync {
    fn on_press(&self, key: &KeyRole);
}

impl<F> TextObserver for F
where
    F: Fn(&str) + Send + Sync,
{
    fn on_text(&self, text: &str) {
        self(text)
    }
}

impl<F> PressObserver for F
where
    F: Fn(&KeyRole) + Send + Sync,
{
    fn on_press(&self, key: &KeyRole) {
        self(key)
    }
}

/// A set of observers keyed by `Arc` identity.
pub struct ObserverSet<T: ?Sized> {
    observers: Vec<Arc<T>>,
}

impl<T: ?Sized> ObserverSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Adds an observer. Returns false if this `Arc` is already present.
    pub fn insert(&mut self, observer: Arc<T>) -> bool {
        if self.contains(&observer) {
            return false;
        }
        self.observers.push(observer);
        true
    }

    /// Returns true if this `Arc` is in the set.
    pub fn contains(&self, observer: &Arc<T>) -> bool {
        self.observers.iter().any(|o| Arc::ptr_eq(o, observer))
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        self.observers.iter()
    }
}

impl<T: ?Sized> Default for ObserverSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Channel Bridge
// ============================================================================

/// A keyboard notification, as delivered through a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardEvent {
    /// A key was pressed
    Pressed(KeyRole),
    /// Text was produced
    Text(String),
}

/// Forwards notifications into an unbounded channel.
///
/// Register the same `Arc` as both text and press observer; events arrive on
/// the receiver in the order the controller emits them.
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<KeyboardEvent>,
}

impl ChannelObserver {
    /// Creates the observer and the receiving end of its channel.
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<KeyboardEvent>) {
        let (tx, rx) = mpsc::unbounded();
        (Arc::new(Self { tx }), rx)
    }

    fn send(&self, event: KeyboardEvent) {
        if let Err(e) = self.tx.unbounded_send(event) {
            tracing::debug!("Keyboard event receiver dropped: {}", e);
        }
    }
}

impl TextObserver for ChannelObserver {
    fn on_text(&self, text: &str) {
        self.send(KeyboardEvent::Text(text.to_string()));
    }
}

impl PressObserver for ChannelObserver {
    fn on_press(&self, key: &KeyRole) {
        self.send(KeyboardEvent::Pressed(key.clone()));
    }
}
