use std::{fmt::Display, str::FromStr};
use anyhow::Context;

pub const GRID_LEN: usize = 4;
pub const NUM_CELLS: usize = GRID_LEN * GRID_LEN;

const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (1, 0), (-1, 0), (0, -1)];
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// A location on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Loc {
    pub row: i32,
    pub col: i32,
}

impl Loc {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn in_bounds(&self) -> bool {
        self.row >= 0 && self.row < GRID_LEN as i32 &&
        self.col >= 0 && self.col < GRID_LEN as i32
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            row: (index / GRID_LEN) as i32,
            col: (index % GRID_LEN) as i32,
        }
    }

    pub fn index(&self) -> usize {
        (self.row as usize) * GRID_LEN + (self.col as usize)
    }

    pub fn offset(&self, drow: i32, dcol: i32) -> Loc {
        Loc {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// In-bounds rook-adjacent neighbors; the only legal destinations
    pub fn orthogonal_neighbors(&self) -> impl Iterator<Item = Loc> + '_ {
        ORTHOGONAL.iter()
            .map(|&(r, c)| self.offset(r, c))
            .filter(|loc| loc.in_bounds())
    }

    /// In-bounds diagonal neighbors, together with the two orthogonal
    /// cells that block the diagonal. Used only by the evaluator.
    pub fn diagonal_neighbors(&self) -> impl Iterator<Item = (Loc, Loc, Loc)> + '_ {
        DIAGONAL.iter()
            .map(|&(r, c)| (self.offset(r, c), self.offset(r, 0), self.offset(0, c)))
            .filter(|(loc, _, _)| loc.in_bounds())
    }

    pub fn is_orthogonal_neighbor(&self, other: &Loc) -> bool {
        ORTHOGONAL.iter()
            .any(|&(r, c)| self.offset(r, c) == *other)
    }
}

impl From<(i32, i32)> for Loc {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl FromStr for Loc {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s.split_once(',')
            .context("Invalid loc")?;

        Ok(Loc {
            row: row.trim().parse()?,
            col: col.trim().parse()?,
        })
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
