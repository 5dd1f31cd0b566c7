use anyhow::{ensure, Result};
use rand::prelude::*;
use rand::rngs::StdRng;

use super::{
    action::Move,
    cell::Cell,
    config::GameConfig,
    layout::BoardLayout,
    loc::{Loc, NUM_CELLS},
    piece::{Animal, Piece},
    side::{Side, SideArray},
};

/// Read-only projection of one cell for the presentation shell.
/// Hidden cells expose no occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub visible: bool,
    pub animal: Option<Animal>,
    pub side: Option<Side>,
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Side),
    Draw,
}

/// The 4x4 grid, turn tracker and move rules. A plain value type:
/// `Clone` yields a fully independent copy, which is what the
/// strategies simulate on.
#[derive(Debug, Clone)]
pub struct Board {
    config: GameConfig,
    layout: BoardLayout,
    cells: [Cell; NUM_CELLS],
    turn: Side,
    selection: Option<Loc>,
    quiet_moves: u32,
}

impl Board {
    /// Fresh game: both armies shuffled face-down over the 16 cells,
    /// random side to start
    pub fn new(config: GameConfig, layout: BoardLayout, rng: &mut StdRng) -> Self {
        let mut pieces = Vec::with_capacity(NUM_CELLS);
        for side in Side::all() {
            for animal in Animal::all() {
                pieces.push(Piece::new(animal, side, &config));
            }
        }
        pieces.shuffle(rng);

        let mut cells = [Cell::open(None); NUM_CELLS];
        for (cell, piece) in cells.iter_mut().zip(pieces) {
            *cell = Cell::hidden(piece);
        }

        let turn = if rng.random_bool(0.5) { Side::Red } else { Side::Blue };

        Self {
            config,
            layout,
            cells,
            turn,
            selection: None,
            quiet_moves: 0,
        }
    }

    /// All cells vacant and revealed; test positions are built on top
    /// of this with `place` / `place_hidden`
    pub fn empty(config: GameConfig, turn: Side) -> Self {
        Self {
            config,
            layout: BoardLayout::default(),
            cells: [Cell::open(None); NUM_CELLS],
            turn,
            selection: None,
            quiet_moves: 0,
        }
    }

    pub fn place(&mut self, loc: Loc, piece: Piece) {
        self.cells[loc.index()] = Cell::open(Some(piece));
    }

    pub fn place_hidden(&mut self, loc: Loc, piece: Piece) {
        self.cells[loc.index()] = Cell::hidden(piece);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn cell(&self, loc: Loc) -> &Cell {
        &self.cells[loc.index()]
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn selection(&self) -> Option<Loc> {
        self.selection
    }

    pub fn quiet_moves(&self) -> u32 {
        self.quiet_moves
    }

    pub fn cell_view(&self, loc: Loc) -> CellView {
        let cell = self.cell(loc);
        let occupant = if cell.visible() { cell.piece() } else { None };
        CellView {
            visible: cell.visible(),
            animal: occupant.map(|p| p.animal),
            side: occupant.map(|p| p.side),
        }
    }

    /// Two-click interaction driven by raw shell coordinates. Clicks
    /// off the board, on the opponent's pieces or on empty cells while
    /// idle are silently ignored; a bad second click only drops the
    /// selection.
    pub fn handle_click(&mut self, x: i32, y: i32) {
        let Some(loc) = self.layout.loc_at(x, y) else {
            return;
        };

        match self.selection {
            None => {
                let cell = self.cell(loc);
                if !cell.visible() {
                    // revealing consumes the whole turn
                    self.cells[loc.index()].reveal();
                    self.quiet_moves += 1;
                    self.pass_turn();
                } else if cell.piece().is_some_and(|p| p.side == self.turn) {
                    self.selection = Some(loc);
                }
            }
            Some(from) => {
                if self.is_destination(from, loc) {
                    self.resolve_move(from, loc);
                    self.pass_turn();
                }
                self.selection = None;
            }
        }
    }

    /// Every legal move for the side to turn: one reveal per hidden
    /// cell, one shift per revealed friendly piece and valid neighbor
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();

        for index in 0..NUM_CELLS {
            let loc = Loc::from_index(index);
            let cell = &self.cells[index];

            if !cell.visible() {
                moves.push(Move::Reveal(loc));
                continue;
            }

            if cell.piece().map_or(true, |p| p.side != self.turn) {
                continue;
            }

            for to in loc.orthogonal_neighbors() {
                if self.is_destination(loc, to) {
                    moves.push(Move::Shift { from: loc, to });
                }
            }
        }

        moves
    }

    /// Validate and execute a move, then pass the turn. This is how
    /// the computer driver replays an evaluated move.
    pub fn play(&mut self, mv: Move) -> Result<()> {
        match mv {
            Move::Reveal(loc) => {
                ensure!(loc.in_bounds(), "Location {} is off the board", loc);
                ensure!(!self.cell(loc).visible(), "Cell {} is already revealed", loc);

                self.cells[loc.index()].reveal();
                self.quiet_moves += 1;
            }
            Move::Shift { from, to } => {
                ensure!(from.in_bounds(), "Location {} is off the board", from);
                ensure!(to.in_bounds(), "Location {} is off the board", to);

                let start = self.cell(from);
                ensure!(start.visible(), "Cannot move a hidden piece at {}", from);
                ensure!(
                    start.piece().is_some_and(|p| p.side == self.turn),
                    "No friendly piece at {}",
                    from
                );
                ensure!(
                    from.is_orthogonal_neighbor(&to),
                    "{} is not a neighbor of {}",
                    to,
                    from
                );
                ensure!(self.is_destination(from, to), "Cannot move to {}", to);

                self.resolve_move(from, to);
            }
        }

        self.selection = None;
        self.pass_turn();
        Ok(())
    }

    pub fn is_draw_by_attrition(&self) -> bool {
        self.quiet_moves >= self.config.draw_threshold
    }

    /// One side has no pieces left anywhere, hidden pieces included
    pub fn is_over(&self) -> bool {
        Side::all().into_iter().any(|side| self.side_count(side) == 0)
    }

    pub fn side_count(&self, side: Side) -> u32 {
        self.cells
            .iter()
            .filter(|cell| cell.piece().is_some_and(|p| p.side == side))
            .count() as u32
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_draw_by_attrition() {
            return Some(Outcome::Draw);
        }

        let red = self.side_count(Side::Red);
        let blue = self.side_count(Side::Blue);
        match (red, blue) {
            (0, 0) => Some(Outcome::Draw),
            (0, _) => Some(Outcome::Win(Side::Blue)),
            (_, 0) => Some(Outcome::Win(Side::Red)),
            _ => None,
        }
    }

    /// Remaining piece count per side; an attrition draw scores (0, 0)
    pub fn final_score(&self) -> SideArray<u32> {
        if self.is_draw_by_attrition() {
            return SideArray::new(0, 0);
        }
        SideArray::new(self.side_count(Side::Red), self.side_count(Side::Blue))
    }

    fn pass_turn(&mut self) {
        self.turn = !self.turn;
    }

    /// Revealed and empty or enemy-occupied, one orthogonal step away
    fn is_destination(&self, from: Loc, to: Loc) -> bool {
        let dest = self.cell(to);
        from.is_orthogonal_neighbor(&to)
            && dest.visible()
            && dest.piece().map_or(true, |p| p.side != self.turn)
    }

    /// The capture rule. Exactly one case applies when both cells are
    /// occupied, because kind equality and strict dominance are
    /// mutually exclusive.
    fn resolve_move(&mut self, from: Loc, to: Loc) {
        let Some(mut mover) = self.cells[from.index()].take_piece() else {
            return;
        };

        match self.cells[to.index()].piece().copied() {
            None => {
                self.cells[to.index()].set_piece(Some(mover));
                self.quiet_moves += 1;
            }
            Some(target) if target.animal == mover.animal => {
                // mutual destruction; clashing elephants weaken every
                // mouse still on the board
                self.cells[to.index()].set_piece(None);
                if mover.animal == Animal::Elephant {
                    self.devalue_mice();
                }
                self.quiet_moves = 0;
            }
            Some(target) if target.animal.preys_on(mover.animal) => {
                // suicide into a predator; a mouse that survives an
                // elephant's charge is weakened
                if target.animal == Animal::Mouse {
                    if let Some(survivor) = self.cells[to.index()].piece_mut() {
                        survivor.devalue(self.config.devalued_score);
                    }
                }
                self.quiet_moves = 0;
            }
            Some(_) => {
                // capture; a mouse that felled an elephant is weakened
                if mover.animal == Animal::Mouse {
                    mover.devalue(self.config.devalued_score);
                }
                self.cells[to.index()].set_piece(Some(mover));
                self.quiet_moves = 0;
            }
        }
    }

    fn devalue_mice(&mut self) {
        let score = self.config.devalued_score;
        for cell in self.cells.iter_mut() {
            if let Some(piece) = cell.piece_mut() {
                if piece.animal == Animal::Mouse {
                    piece.devalue(score);
                }
            }
        }
    }
}
