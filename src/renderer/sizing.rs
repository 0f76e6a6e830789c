// SPDX-License-Identifier: GPL-3.0-only

//! Sizing calculations for the keyboard grid.
//!
//! Every key is sized in base units. The base unit is the largest size that
//! lets the widest row fit the surface width and all rows fit its height.

/// Default padding around the grid in pixels.
pub const DEFAULT_PADDING: f32 = 8.0;

/// Default spacing between keys and rows in pixels.
pub const DEFAULT_SPACING: f32 = 4.0;

/// Calculates the base unit size from surface dimensions.
///
/// Takes the minimum of the width-based and height-based units. Returns at
/// least 1.0 so that degenerate surfaces still produce drawable keys.
///
/// # Example
///
/// ```rust,ignore
/// // 16 units wide, 5 rows, on an 800x300 surface
/// let base_unit = calculate_base_unit(800.0, 300.0, 16.0, 5);
/// // width_unit = 800/16 = 50, height_unit = 300/5 = 60
/// // Returns min(50, 60) = 50
/// ```
pub fn calculate_base_unit(
    surface_width: f32,
    surface_height: f32,
    max_row_width: f32,
    row_count: usize,
) -> f32 {
    if max_row_width <= 0.0 || row_count == 0 || surface_width <= 0.0 || surface_height <= 0.0 {
        return 1.0;
    }

    let width_based_unit = surface_width / max_row_width;
    let height_based_unit = surface_height / row_count as f32;

    width_based_unit.min(height_based_unit).max(1.0)
}

/// Pixel width of a cell spanning `width` base units.
///
/// Each cell gives up one spacing, so rows of equal unit width line up
/// whatever their key count.
pub fn cell_pixels(width: f32, base_unit: f32, spacing: f32) -> f32 {
    let inner = (width * base_unit) - spacing;
    inner.max(1.0)
}
