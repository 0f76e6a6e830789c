// SPDX-License-Identifier: GPL-3.0-only

//! Key rendering for the keyboard grid.
//!
//! Keys are rendered as buttons with a centered text label. Slot keys take
//! their label from the keyboard controller, so it follows shift and caps.
//! Function keys show a fixed name.

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, button, container};
use cosmic::Element;

use crate::input::{ActivationId, FunctionKind, ModifierState};
use crate::keyboard::KeyboardController;
use crate::renderer::grid::GridCell;
use crate::renderer::message::RendererMessage;
use crate::renderer::sizing::cell_pixels;

/// Renders a single grid cell as a key button.
///
/// # Arguments
///
/// * `cell` - The grid cell to render
/// * `keyboard` - The controller providing labels and modifier state
/// * `base_unit` - The calculated base unit in pixels
/// * `spacing` - Spacing between keys in pixels
pub fn render_key<'a>(
    cell: &GridCell,
    keyboard: &KeyboardController,
    base_unit: f32,
    spacing: f32,
) -> Element<'a, RendererMessage> {
    let width = cell_pixels(cell.width, base_unit, spacing);
    let height = cell_pixels(1.0, base_unit, spacing);

    let label = key_label(cell, keyboard);

    // Active modifiers use the accent color
    let button_class = if is_highlighted(cell, keyboard.modifiers()) {
        cosmic::style::Button::Suggested
    } else {
        cosmic::style::Button::Standard
    };

    button::custom(
        container(widget::text::body(label))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center),
    )
    .on_press(RendererMessage::Activate(cell.activation))
    .class(button_class)
    .width(Length::Fixed(width))
    .height(Length::Fixed(height))
    .into()
}

/// Text drawn on a cell.
///
/// Slots without a label (unmapped or non-printing) are drawn blank.
pub fn key_label(cell: &GridCell, keyboard: &KeyboardController) -> String {
    match cell.activation {
        ActivationId::Slot(slot) => keyboard.glyph_for(slot).unwrap_or_default().to_string(),
        ActivationId::Function(kind) => kind.label().to_string(),
    }
}

/// Returns true if the cell is a modifier key whose flag is set.
///
/// Alt Gr lights up while ctrl + alt is held, the state that selects alt-gr
/// glyphs. Activating the Alt Gr key itself toggles
/// shift and caps together, so it lights Shift and Caps rather than itself.
#[must_use]
pub fn is_highlighted(cell: &GridCell, modifiers: &ModifierState) -> bool {
    match cell.activation {
        ActivationId::Function(FunctionKind::Shift) => modifiers.shift(),
        ActivationId::Function(FunctionKind::Caps) => modifiers.caps(),
        ActivationId::Function(FunctionKind::Ctrl) => modifiers.ctrl(),
        ActivationId::Function(FunctionKind::Alt) => modifiers.alt(),
        ActivationId::Function(FunctionKind::AltGr) => modifiers.is_alt_gr(),
        _ => false,
    }
}

// ============================================================================
// Tests
// ============================================================================
