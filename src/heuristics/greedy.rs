use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::core::{Board, Move};
use super::traits::Strategy;

/// Takes the first capture it finds, otherwise moves at random
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose(&self, board: &Board, moves: &[Move], rng: &mut StdRng) -> Result<Move> {
        let mut moves = moves.to_vec();
        moves.shuffle(rng);

        for &mv in &moves {
            if let Move::Shift { from, to } = mv {
                if board.cell(from).meets_prey(board.cell(to)) {
                    return Ok(mv);
                }
            }
        }

        moves
            .choose(rng)
            .copied()
            .context("No legal moves to choose from")
    }
}
