// SPDX-License-Identifier: GPL-3.0-only

//! Physical arrangement of keys.
//!
//! A grid is a list of rows; each cell is either a layout slot or a function
//! key, with a width in base units. The grid is independent of the layout: the
//! same grid shows any layout, and slots the layout does not define render as
//! blank keys.

use crate::input::{ActivationId, FunctionKind};
use crate::layout::SlotId;

/// One key position in the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    /// What activating this cell does
    pub activation: ActivationId,
    /// Width in base units
    pub width: f32,
}

impl GridCell {
    /// A one-unit slot cell.
    pub fn slot(slot: SlotId) -> Self {
        Self {
            activation: ActivationId::Slot(slot),
            width: 1.0,
        }
    }

    /// A function key cell of the given width.
    pub fn function(kind: FunctionKind, width: f32) -> Self {
        Self {
            activation: ActivationId::Function(kind),
            width,
        }
    }
}

/// A row of cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridRow {
    pub cells: Vec<GridCell>,
}

impl GridRow {
    /// Total width in base units.
    pub fn width(&self) -> f32 {
        self.cells.iter().map(|c| c.width).sum()
    }
}

/// The full key arrangement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyGrid {
    pub rows: Vec<GridRow>,
}

impl KeyGrid {
    /// The standard 47-slot board.
    ///
    /// Slots are numbered row by row: 0..=12 on the number row, 13..=25 on the
    /// top letter row, 26..=36 on the home row and 37..=46 on the bottom row.
    pub fn standard() -> Self {
        use FunctionKind::*;

        let slots = |range: std::ops::RangeInclusive<SlotId>| range.map(GridCell::slot);

        let mut number_row = vec![GridCell::function(Esc, 1.0)];
        number_row.extend(slots(0..=12));
        number_row.push(GridCell::function(Backspace, 2.0));

        let mut top_row = vec![GridCell::function(Tab, 1.5)];
        top_row.extend(slots(13..=25));
        top_row.push(GridCell::function(Menu, 1.5));

        let mut home_row = vec![GridCell::function(Caps, 1.75)];
        home_row.extend(slots(26..=36));
        home_row.push(GridCell::function(Enter, 3.25));

        let mut bottom_row = vec![GridCell::function(Shift, 2.25)];
        bottom_row.extend(slots(37..=46));
        bottom_row.push(GridCell::function(Shift, 3.75));

        let space_row = vec![
            GridCell::function(Ctrl, 1.5),
            GridCell::function(Os, 1.25),
            GridCell::function(Alt, 1.25),
            GridCell::function(Space, 6.5),
            GridCell::function(AltGr, 1.25),
            GridCell::function(Swap, 1.25),
            GridCell::function(Ctrl, 3.0),
        ];

        Self {
            rows: [number_row, top_row, home_row, bottom_row, space_row]
                .into_iter()
                .map(|cells| GridRow { cells })
                .collect(),
        }
    }

    /// Width of the widest row in base units.
    pub fn max_row_width(&self) -> f32 {
        self.rows.iter().map(GridRow::width).fold(0.0, f32::max)
    }

    /// Iterates every slot id in the grid, in reading order.
    pub fn slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter_map(|cell| match cell.activation {
                ActivationId::Slot(slot) => Some(slot),
                ActivationId::Function(_) => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_grid_slots() {
        let grid = KeyGrid::standard();
        let slots: Vec<SlotId> = grid.slots().collect();

        assert_eq!(slots, (0..=46).collect::<Vec<_>>());
        assert_eq!(grid.rows.len(), 5);
    }

    /// Every row of the standard grid is 16 units wide.
    #[test]
    fn test_standard_grid_rows_align() {
        let grid = KeyGrid::standard();

        for (i, row) in grid.rows.iter().enumerate() {
            assert!((row.width() - 16.0).abs() < f32::EPSILON, "row {i} is {}", row.width());
        }
        assert!((grid.max_row_width() - 16.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_standard_grid_has_every_function_key() {
        let grid = KeyGrid::standard();
        let functions: Vec<FunctionKind> = grid
            .rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter_map(|cell| match cell.activation {
                ActivationId::Function(kind) => Some(kind),
                ActivationId::Slot(_) => None,
            })
            .collect();

        for kind in FunctionKind::ALL {
            assert!(functions.contains(&kind), "{kind} missing");
        }
    }
}
