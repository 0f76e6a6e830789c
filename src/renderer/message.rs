// SPDX-License-Identifier: GPL-3.0-only

//! Renderer message types.

use crate::input::ActivationId;

/// Messages emitted by the keyboard renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererMessage {
    /// A key button was clicked.
    Activate(ActivationId),
}
