// SPDX-License-Identifier: GPL-3.0-only

//! Softboard - an on-screen virtual keyboard
//!
//! Layouts map slot ids to key definitions and may derive from one another.
//! A [`keyboard::KeyboardController`] turns key activations into text and
//! press notifications while tracking shift, caps, ctrl and alt. The COSMIC
//! application draws the keys and feeds clicks back into the controller.
//!
//! # Modules
//!
//! - `app`: Main application model and COSMIC Application trait implementation
//! - `app_settings`: Centralized application constants
//! - `config`: User configuration with cosmic_config persistence
//! - `input`: Modifier state, activation ids and text resolution
//! - `keyboard`: The keyboard controller and its observers
//! - `layout`: Layout model, registry, JSON format and bundled layouts
//! - `renderer`: Key grid and widget rendering

pub mod app;
pub mod app_settings;
pub mod config;
pub mod input;
pub mod keyboard;
pub mod layout;
pub mod renderer;

// ============================================================================
// Integration Tests
// ============================================================================
