use super::loc::{Loc, GRID_LEN};

/// Pixel geometry of the board as the presentation shell draws it.
/// The core only needs `loc_at` to resolve raw click coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub left: i32,
    pub top: i32,
    pub cell_size: i32,
}

impl BoardLayout {
    pub fn new(left: i32, top: i32, cell_size: i32) -> Self {
        Self { left, top, cell_size }
    }

    pub fn board_size(&self) -> i32 {
        self.cell_size * GRID_LEN as i32
    }

    /// Hit-test a click; `None` when the point is off the board
    pub fn loc_at(&self, x: i32, y: i32) -> Option<Loc> {
        if x < self.left || x >= self.left + self.board_size() ||
           y < self.top || y >= self.top + self.board_size() {
            return None;
        }

        Some(Loc {
            row: (y - self.top) / self.cell_size,
            col: (x - self.left) / self.cell_size,
        })
    }

    /// Top-left pixel corner of a cell, for the shell to draw at
    pub fn origin(&self, loc: Loc) -> (i32, i32) {
        (
            self.left + loc.col * self.cell_size,
            self.top + loc.row * self.cell_size,
        )
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            left: 50,
            top: 50,
            cell_size: 120,
        }
    }
}
