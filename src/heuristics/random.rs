use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::core::{Board, Move};
use super::traits::Strategy;

/// Uniform choice over the legal moves
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&self, _board: &Board, moves: &[Move], rng: &mut StdRng) -> Result<Move> {
        moves
            .choose(rng)
            .copied()
            .context("No legal moves to choose from")
    }
}
