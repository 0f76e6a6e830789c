// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard Renderer for Softboard.
//!
//! This module draws a [`KeyGrid`] with libcosmic widgets. Labels and modifier
//! highlighting come from a [`KeyboardController`]; clicks come back as
//! [`RendererMessage::Activate`] carrying the cell's activation id.
//!
//! # Architecture
//!
//! - **grid**: Physical key arrangement (`KeyGrid`, `GridRow`, `GridCell`)
//! - **sizing**: Base unit and cell size calculations
//! - **key**: Individual key rendering, labels and highlight rules
//! - **message**: Renderer message types
//!
//! # Usage
//!
//! ```rust,ignore
//! use softboard::renderer::{render_keyboard, KeyGrid, RendererMessage};
//!
//! let grid = KeyGrid::standard();
//! let element = render_keyboard(&grid, &keyboard, 800.0, 300.0);
//!
//! // In update():
//! match message {
//!     RendererMessage::Activate(id) => {
//!         keyboard.activate(id);
//!     }
//! }
//! ```

pub mod grid;
pub mod key;
pub mod message;
pub mod sizing;

use cosmic::iced::{Length, Padding};
use cosmic::widget::{self, container};
use cosmic::Element;

use crate::keyboard::KeyboardController;

// Re-export public API
pub use grid::{GridCell, GridRow, KeyGrid};
pub use key::{is_highlighted, key_label, render_key};
pub use message::RendererMessage;
pub use sizing::{calculate_base_unit, cell_pixels, DEFAULT_PADDING, DEFAULT_SPACING};

/// Renders the whole grid as rows of key buttons.
///
/// # Arguments
///
/// * `grid` - The key arrangement
/// * `keyboard` - The controller providing labels and modifier state
/// * `surface_width` - Width of the keyboard surface in pixels
/// * `surface_height` - Height of the keyboard surface in pixels
pub fn render_keyboard<'a>(
    grid: &KeyGrid,
    keyboard: &KeyboardController,
    surface_width: f32,
    surface_height: f32,
) -> Element<'a, RendererMessage> {
    let available_width = surface_width - (DEFAULT_PADDING * 2.0);
    let available_height = surface_height - (DEFAULT_PADDING * 2.0);

    let base_unit = calculate_base_unit(
        available_width,
        available_height,
        grid.max_row_width(),
        grid.rows.len(),
    );

    let mut column = widget::column::column().spacing(DEFAULT_SPACING);

    for row in &grid.rows {
        let mut row_widget = widget::row::row().spacing(DEFAULT_SPACING);
        for cell in &row.cells {
            row_widget = row_widget.push(render_key(cell, keyboard, base_unit, DEFAULT_SPACING));
        }
        column = column.push(row_widget);
    }

    let centered_column = container(column).center_x(Length::Fill);

    container(centered_column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding::from(DEFAULT_PADDING))
        .class(cosmic::style::Container::Background)
        .into()
}
