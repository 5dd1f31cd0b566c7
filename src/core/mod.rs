//! Core game representations and rules

pub mod action;
pub mod board;
pub mod cell;
pub mod config;
pub mod convert;
pub mod display;
pub mod layout;
pub mod loc;
pub mod piece;
pub mod side;

pub use action::Move;
pub use board::{Board, CellView, Outcome};
pub use cell::Cell;
pub use config::GameConfig;
pub use convert::{FromIndex, ToIndex};
pub use layout::BoardLayout;
pub use loc::{Loc, GRID_LEN, NUM_CELLS};
pub use piece::{Animal, Piece, NUM_ANIMALS};
pub use side::{Side, SideArray};
