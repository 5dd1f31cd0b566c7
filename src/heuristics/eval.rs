//! Shared position scoring for the lookahead strategies

use crate::core::{Board, Loc, Side, NUM_CELLS};

/// Immediate payoff of shifting `from` onto `to`: +2x the prey's score
/// for a capture, -2x the mover's score for a suicide, +0.25x the
/// mover's score for mutual destruction, 0 for a quiet step.
pub fn move_gain(board: &Board, from: Loc, to: Loc) -> f32 {
    let Some(mover) = board.cell(from).piece() else {
        return 0.0;
    };
    let Some(target) = board.cell(to).piece() else {
        return 0.0;
    };

    if target.animal.preys_on(mover.animal) {
        -2.0 * mover.score
    } else if mover.animal.preys_on(target.animal) {
        2.0 * target.score
    } else if target.animal == mover.animal {
        0.25 * mover.score
    } else {
        0.0
    }
}

/// One-ply threat/opportunity heuristic for an occupied cell: what the
/// eight surrounding cells promise or threaten next turn.
pub fn environment_score(board: &Board, loc: Loc) -> f32 {
    let cell = board.cell(loc);
    let Some(piece) = cell.piece() else {
        return 0.0;
    };

    let mut score = 0.0;

    for neighbor in loc.orthogonal_neighbors() {
        let neighbor_cell = board.cell(neighbor);
        if !neighbor_cell.visible() {
            continue;
        }
        let Some(other) = neighbor_cell.piece() else {
            continue;
        };
        if other.side == piece.side {
            continue;
        }

        if other.animal.preys_on(piece.animal) {
            score -= 1.5 * piece.score;
        } else if piece.animal.preys_on(other.animal) {
            score += other.score / 2.0;
        } else if other.animal == piece.animal {
            score -= 0.5 * piece.score;
        }
    }

    for (neighbor, block1, block2) in loc.diagonal_neighbors() {
        let neighbor_cell = board.cell(neighbor);
        if !neighbor_cell.visible() {
            continue;
        }
        let Some(other) = neighbor_cell.piece() else {
            continue;
        };
        if other.side == piece.side {
            continue;
        }

        let block1 = board.cell(block1);
        let block2 = board.cell(block2);

        if other.animal.preys_on(piece.animal) {
            // the predator can slip through an open or capturable block
            if block1.is_empty() || block2.is_empty()
                || neighbor_cell.meets_prey(block1) || neighbor_cell.meets_prey(block2)
            {
                score -= piece.score / 2.0;
            }
        } else if piece.animal.preys_on(other.animal) {
            if block1.is_empty() || block2.is_empty()
                || cell.meets_prey(block1) || cell.meets_prey(block2)
            {
                score += other.score;
            }
        } else if other.animal == piece.animal {
            if block1.is_empty() || block2.is_empty()
                || cell.meets_prey(block1) || cell.meets_prey(block2)
            {
                score += 0.25 * piece.score;
            }
        }
    }

    score
}

/// Positional value of a whole side: every revealed piece contributes
/// its own score plus its environment
pub fn side_score(board: &Board, side: Side) -> f32 {
    let mut score = 0.0;

    for index in 0..NUM_CELLS {
        let loc = Loc::from_index(index);
        let cell = board.cell(loc);
        if !cell.visible() {
            continue;
        }
        if let Some(piece) = cell.piece() {
            if piece.side == side {
                score += piece.score;
                score += environment_score(board, loc);
            }
        }
    }

    score
}
