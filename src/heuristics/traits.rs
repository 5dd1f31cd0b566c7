use anyhow::Result;
use rand::rngs::StdRng;

use crate::core::{Board, Move};

/// Picks one move from the legal set for the side to turn. Strategies
/// never mutate the live board; anything they try out runs on a clone.
pub trait Strategy {
    fn name(&self) -> &'static str;

    /// Errors only when `moves` is empty, which cannot happen while
    /// the game is still running
    fn choose(&self, board: &Board, moves: &[Move], rng: &mut StdRng) -> Result<Move>;
}
