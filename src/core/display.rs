use std::fmt;
use colored::Colorize;

use super::{
    board::{Board, Outcome},
    loc::{Loc, GRID_LEN},
    piece::{Animal, Piece},
    side::Side,
};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..GRID_LEN {
            write!(f, " {} ", col)?;
        }
        writeln!(f)?;

        for row in 0..GRID_LEN {
            write!(f, "{:2} ", row)?;
            for col in 0..GRID_LEN {
                let loc = Loc::new(row as i32, col as i32);
                let cell = self.cell(loc);
                if !cell.visible() {
                    write!(f, " ? ")?;
                } else if let Some(piece) = cell.piece() {
                    if self.selection() == Some(loc) {
                        write!(f, "[{}]", piece)?;
                    } else {
                        write!(f, " {} ", piece)?;
                    }
                } else {
                    write!(f, " · ")?;
                }
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "Turn: {}", self.turn())?;
        writeln!(f, "Quiet moves: {}", self.quiet_moves())?;
        Ok(())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.animal.to_char().to_string();

        let colored_symbol = match self.side {
            Side::Red => symbol.bright_red(),
            Side::Blue => symbol.bright_blue(),
        };

        write!(f, "{}", colored_symbol)
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "{}", "Red".bright_red()),
            Side::Blue => write!(f, "{}", "Blue".bright_blue()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(side) => write!(f, "{} wins", side),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
