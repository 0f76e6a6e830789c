// SPDX-License-Identifier: GPL-3.0-only

//! Registry of layouts reachable by name.
//!
//! The registry is append-only and searched in registration order, so the
//! earliest registered layout wins when several share a name.

use crate::layout::types::Layout;

/// An ordered, append-only collection of layouts.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    layouts: Vec<Layout>,
}

impl LayoutRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            layouts: Vec::new(),
        }
    }

    /// Appends a layout. Names are not deduplicated.
    pub fn register(&mut self, layout: Layout) {
        tracing::debug!(
            "Registering layout '{}' with {} keys",
            layout.name(),
            layout.len()
        );
        self.layouts.push(layout);
    }

    /// Returns the first registered layout with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.name() == name)
    }

    /// Resolves `base_name` as the base of a layout called `name`.
    ///
    /// A layout is never its own base, so a match whose name equals `name`
    /// is skipped.
    #[must_use]
    pub fn find_base(&self, base_name: &str, name: &str) -> Option<&Layout> {
        self.layouts
            .iter()
            .find(|l| l.name() == base_name && l.name() != name)
    }

    /// Returns true if a layout with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the layout registered after the first one named `name`,
    /// wrapping around to the start. Falls back to the first layout when
    /// `name` is not registered.
    #[must_use]
    pub fn next_after(&self, name: &str) -> Option<&Layout> {
        let next = match self.layouts.iter().position(|l| l.name() == name) {
            Some(index) => (index + 1) % self.layouts.len(),
            None => 0,
        };
        self.layouts.get(next)
    }

    /// Iterates layouts in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Layout> {
        self.layouts.iter()
    }

    /// Number of registered layouts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
