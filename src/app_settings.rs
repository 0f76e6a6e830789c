// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application settings and constants.

/// Application ID in RDNN (reverse domain name notation) format.
pub const APP_ID: &str = "io.github.softboard.Softboard";

/// Layout shown when the configuration names none that is registered.
pub const DEFAULT_LAYOUT: &str = "QWERTY";

/// Default window width in pixels.
pub const DEFAULT_WIDTH: f32 = 800.0;

/// Default window height in pixels.
pub const DEFAULT_HEIGHT: f32 = 300.0;

/// Minimum window width in pixels.
pub const MIN_WIDTH: f32 = 400.0;

/// Minimum window height in pixels.
pub const MIN_HEIGHT: f32 = 150.0;

/// Height reserved above the keys for the status line, in pixels.
pub const STATUS_HEIGHT: f32 = 28.0;
