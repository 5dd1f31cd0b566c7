use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::core::{Board, GameConfig, Move};
use super::eval::{move_gain, side_score};
use super::traits::Strategy;

/// The shipped one-ply evaluator: score every shift as immediate gain
/// plus the acting side's positional score after simulating it on a
/// copy, and keep the best. A result under the confidence threshold is
/// not worth preferring over flipping a fresh piece.
pub struct LookaheadStrategy {
    config: GameConfig,
}

impl LookaheadStrategy {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl Strategy for LookaheadStrategy {
    fn name(&self) -> &'static str {
        "lookahead"
    }

    fn choose(&self, board: &Board, moves: &[Move], rng: &mut StdRng) -> Result<Move> {
        let acting = board.turn();

        let mut moves = moves.to_vec();
        moves.shuffle(rng);

        let mut reveals = Vec::new();
        let mut best: Option<Move> = None;
        let mut best_score = f32::NEG_INFINITY;

        for &mv in &moves {
            let Move::Shift { from, to } = mv else {
                reveals.push(mv);
                continue;
            };

            let mut simulated = board.clone();
            let gain = move_gain(board, from, to);
            simulated.play(mv)?;

            let score = gain + side_score(&simulated, acting);
            if score > best_score {
                best_score = score;
                best = Some(mv);
            }
        }

        if best_score >= self.config.confidence_threshold || reveals.is_empty() {
            best.or_else(|| reveals.choose(rng).copied())
                .context("No legal moves to choose from")
        } else {
            reveals
                .choose(rng)
                .copied()
                .context("No reveal moves left")
        }
    }
}
