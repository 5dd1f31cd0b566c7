use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::core::{Board, Move};
use super::eval::{move_gain, side_score};
use super::traits::Strategy;

/// Variant evaluator: compare the score margin (own minus opponent)
/// after each simulated move against the margin of standing still, and
/// keep the biggest improvement. Reveals are simulated too. A move
/// that wipes out the opponent is taken on the spot.
pub struct MarginStrategy;

impl Strategy for MarginStrategy {
    fn name(&self) -> &'static str {
        "margin"
    }

    fn choose(&self, board: &Board, moves: &[Move], rng: &mut StdRng) -> Result<Move> {
        let acting = board.turn();
        let opponent = !acting;

        let mut moves = moves.to_vec();
        moves.shuffle(rng);

        let mut best_diff = side_score(board, acting) - side_score(board, opponent);
        let mut best: Option<Move> = None;

        for &mv in &moves {
            let gain = match mv {
                Move::Shift { from, to } => move_gain(board, from, to),
                Move::Reveal(_) => 0.0,
            };

            let mut simulated = board.clone();
            simulated.play(mv)?;

            if simulated.side_count(opponent) == 0 && simulated.side_count(acting) > 0 {
                return Ok(mv);
            }

            let diff =
                side_score(&simulated, acting) - side_score(&simulated, opponent) + gain;
            if diff > best_diff {
                best_diff = diff;
                best = Some(mv);
            }
        }

        match best {
            Some(mv) => Ok(mv),
            None => moves
                .choose(rng)
                .copied()
                .context("No legal moves to choose from"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Animal, GameConfig, Loc, Piece, Side};
    use crate::utils::rng::make_seeded_rng;

    fn piece(animal: Animal, side: Side) -> Piece {
        Piece::new(animal, side, &GameConfig::default())
    }

    #[test]
    fn test_finishing_move_taken_immediately() {
        let config = GameConfig::default();
        let mut board = Board::empty(config, Side::Blue);
        board.place(Loc::new(1, 1), piece(Animal::Lion, Side::Blue));
        board.place(Loc::new(3, 3), piece(Animal::Wolf, Side::Blue));
        board.place(Loc::new(1, 2), piece(Animal::Dog, Side::Red));

        let moves = board.legal_moves();
        let mut rng = make_seeded_rng(17);

        for _ in 0..10 {
            let mv = MarginStrategy.choose(&board, &moves, &mut rng).unwrap();
            assert_eq!(mv, Move::Shift { from: Loc::new(1, 1), to: Loc::new(1, 2) });
        }
    }

    #[test]
    fn test_falls_back_when_nothing_improves() {
        let config = GameConfig::default();
        let mut board = Board::empty(config, Side::Blue);
        board.place(Loc::new(0, 0), piece(Animal::Cat, Side::Blue));
        board.place(Loc::new(3, 3), piece(Animal::Elephant, Side::Red));
        board.place(Loc::new(3, 2), piece(Animal::Lion, Side::Red));

        let moves = board.legal_moves();
        let mut rng = make_seeded_rng(17);

        let mv = MarginStrategy.choose(&board, &moves, &mut rng).unwrap();
        assert!(moves.contains(&mv));
    }
}
