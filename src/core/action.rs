use std::{fmt, str::FromStr};
use anyhow::{bail, Context};

use super::loc::Loc;

/// A legal move for the side to turn: flip a hidden piece, or shift a
/// revealed piece one orthogonal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Reveal(Loc),
    Shift { from: Loc, to: Loc },
}

impl Move {
    pub fn is_reveal(&self) -> bool {
        matches!(self, Move::Reveal(_))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Reveal(loc) => write!(f, "reveal {}", loc),
            Move::Shift { from, to } => write!(f, "move {} {}", from, to),
        }
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();

        match parts.next() {
            Some("reveal") => {
                let loc = parts.next().context("reveal requires a location")?.parse()?;
                Ok(Move::Reveal(loc))
            }
            Some("move") => {
                let from = parts.next().context("move requires a start")?.parse()?;
                let to = parts.next().context("move requires a destination")?.parse()?;
                Ok(Move::Shift { from, to })
            }
            _ => bail!("Invalid move: {}", s),
        }
    }
}
