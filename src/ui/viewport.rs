//! Mapping between the 800x600 logical screen and terminal cells.

use crate::core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::entities::Bounds;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub area: Rect,
}

impl Viewport {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// Logical point at the center of a terminal cell, if the cell is inside.
    pub fn to_logical(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        let a = self.area;
        if a.width == 0 || a.height == 0 {
            return None;
        }
        if column < a.x || row < a.y || column >= a.x + a.width || row >= a.y + a.height {
            return None;
        }
        let col = i64::from(column - a.x);
        let row = i64::from(row - a.y);
        let x = (col * 2 + 1) * i64::from(SCREEN_WIDTH) / (2 * i64::from(a.width));
        let y = (row * 2 + 1) * i64::from(SCREEN_HEIGHT) / (2 * i64::from(a.height));
        Some((x as i32, y as i32))
    }

    /// Terminal column for a logical x, clamped to the area.
    fn column_for(&self, x: i32) -> i64 {
        let x = i64::from(x.clamp(0, SCREEN_WIDTH));
        x * i64::from(self.area.width) / i64::from(SCREEN_WIDTH)
    }

    fn row_for(&self, y: i32) -> i64 {
        let y = i64::from(y.clamp(0, SCREEN_HEIGHT));
        y * i64::from(self.area.height) / i64::from(SCREEN_HEIGHT)
    }

    /// Cells covering a logical box, clipped to the screen. Every visible box
    /// gets at least one cell.
    pub fn to_cells(&self, bounds: Bounds) -> Option<Rect> {
        let a = self.area;
        if a.width == 0 || a.height == 0 {
            return None;
        }
        let right = bounds.x + bounds.width;
        let bottom = bounds.y + bounds.height;
        if right <= 0 || bottom <= 0 || bounds.x >= SCREEN_WIDTH || bounds.y >= SCREEN_HEIGHT {
            return None;
        }

        let left_col = self.column_for(bounds.x).min(i64::from(a.width) - 1);
        let top_row = self.row_for(bounds.y).min(i64::from(a.height) - 1);
        let right_col = self.column_for(right).max(left_col + 1);
        let bottom_row = self.row_for(bottom).max(top_row + 1);

        Some(Rect::new(
            a.x + left_col as u16,
            a.y + top_row as u16,
            (right_col - left_col) as u16,
            (bottom_row - top_row) as u16,
        ))
    }
}
