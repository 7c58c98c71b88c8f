//! Dot-grid layout for the year progress calendar.
//!
//! [`GridLayout`] packs `total_days` square cells into a bounding rectangle
//! using a fixed column count.  Every cell is split 75/25 between the dot
//! and the gap that follows it, and the occupied block is centred in the
//! rectangle.
//!
//! Cells are numbered in row-major order from index `0`; index `i` holds
//! day `i + 1`:
//!
//! ```text
//! col →   0   1   2  …  31
//! row 0   1   2   3  …  32
//! row 1  33  34  35  …  64
//! …
//! ```

use crate::display::Rect;

/// Share of each cell taken by the dot itself.
pub const DOT_RATIO: f64 = 0.75;
/// Share of each cell left as the gap after the dot.
pub const GAP_RATIO: f64 = 0.25;

/// Rejected layout inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("grid needs at least one column")]
    ZeroColumns,
    #[error("grid needs at least one day")]
    ZeroDays,
    #[error("bounding rectangle must be positive, got {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },
}

/// Positions of every dot in the year grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub total_days: u32,
    pub columns: u32,
    /// Always `total_days / columns + 1`, so a day count that is an exact
    /// multiple of `columns` gets one empty trailing row.
    pub rows: u32,
    pub cell_size: f64,
    pub dot_size: f64,
    pub gap: f64,
    /// Top-left corner of the occupied block.
    pub origin_x: f64,
    pub origin_y: f64,
}

/// Lay out `total_days` dots in a `width × height` rectangle at the origin.
pub fn compute_grid_layout(
    total_days: u32,
    columns: u32,
    width: f64,
    height: f64,
) -> Result<GridLayout, LayoutError> {
    GridLayout::fit(total_days, columns, Rect::sized(width, height))
}

impl GridLayout {
    /// Lay out `total_days` dots centred inside `area`.
    pub fn fit(total_days: u32, columns: u32, area: Rect) -> Result<Self, LayoutError> {
        if columns == 0 {
            return Err(LayoutError::ZeroColumns);
        }
        if total_days == 0 {
            return Err(LayoutError::ZeroDays);
        }
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(area.width) || !positive(area.height) {
            return Err(LayoutError::InvalidBounds {
                width: area.width,
                height: area.height,
            });
        }

        let rows = total_days / columns + 1;
        let cell_size = (area.width / f64::from(columns)).min(area.height / f64::from(rows));
        let dot_size = cell_size * DOT_RATIO;
        let gap = cell_size * GAP_RATIO;

        let mut layout = Self {
            total_days,
            columns,
            rows,
            cell_size,
            dot_size,
            gap,
            origin_x: 0.0,
            origin_y: 0.0,
        };
        layout.origin_x = area.x + (area.width - layout.actual_width()) / 2.0;
        layout.origin_y = area.y + (area.height - layout.actual_height()) / 2.0;
        Ok(layout)
    }

    /// Distance between the top-left corners of neighbouring dots.
    pub fn pitch(&self) -> f64 {
        self.dot_size + self.gap
    }

    /// Width of the occupied block (no trailing gap).
    pub fn actual_width(&self) -> f64 {
        f64::from(self.columns) * self.pitch() - self.gap
    }

    /// Height of the occupied block (no trailing gap).
    pub fn actual_height(&self) -> f64 {
        f64::from(self.rows) * self.pitch() - self.gap
    }

    /// `(col, row)` of cell `index`.
    pub fn position(&self, index: u32) -> (u32, u32) {
        (index % self.columns, index / self.columns)
    }

    /// Square occupied by the dot at `index`, or `None` past the last day.
    pub fn dot_rect(&self, index: u32) -> Option<Rect> {
        if index >= self.total_days {
            return None;
        }
        let (col, row) = self.position(index);
        Some(Rect::new(
            self.origin_x + f64::from(col) * self.pitch(),
            self.origin_y + f64::from(row) * self.pitch(),
            self.dot_size,
            self.dot_size,
        ))
    }

    /// Every dot as `(day_number, rect)`, day numbers starting at 1.
    pub fn dots(&self) -> impl Iterator<Item = (u32, Rect)> + '_ {
        (0..self.total_days).filter_map(move |i| self.dot_rect(i).map(|r| (i + 1, r)))
    }
}

//  Tests
