use anyhow::Result;
use rand::rngs::StdRng;

use crate::core::{Board, BoardLayout, GameConfig, Move, Outcome, Side, SideArray};
use crate::heuristics::{
    greedy::GreedyStrategy, lookahead::LookaheadStrategy, margin::MarginStrategy,
    random::RandomStrategy, Strategy,
};
use crate::utils::rng::{make_rng, make_seeded_rng};

use super::options::{EngineOptions, StrategyKind};

/// Engine owns the live board and drives the computer's turns. The
/// presentation shell talks to it and never touches the board rules
/// directly.
pub struct Engine {
    pub config: GameConfig,
    pub board: Board,
    pub options: EngineOptions,
    rng: StdRng,
}

impl Engine {
    pub fn new(config: GameConfig) -> Self {
        let mut rng = make_rng();
        let board = Board::new(config, BoardLayout::default(), &mut rng);
        Self {
            config,
            board,
            options: EngineOptions::default(),
            rng,
        }
    }

    /// Discard the current game and deal a fresh shuffled board.
    /// A seed makes the deal reproducible.
    pub fn new_game(&mut self, seed: Option<u64>) {
        if let Some(seed) = seed {
            self.rng = make_seeded_rng(seed);
        }
        self.board = Board::new(self.config, BoardLayout::default(), &mut self.rng);
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        self.options.set_option(name, value)
    }

    /// Forward a raw shell click to the board
    pub fn click(&mut self, x: i32, y: i32) {
        self.board.handle_click(x, y);
    }

    /// Replay an already-chosen move
    pub fn play(&mut self, mv: Move) -> Result<()> {
        self.board.play(mv)
    }

    /// One computer turn: enumerate, choose with the configured
    /// strategy, play, and report the move
    pub fn go(&mut self) -> Result<Move> {
        let moves = self.board.legal_moves();
        let mv = self.strategy().choose(&self.board, &moves, &mut self.rng)?;
        self.board.play(mv)?;
        Ok(mv)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome()
    }

    pub fn final_score(&self) -> SideArray<u32> {
        self.board.final_score()
    }

    pub fn turn(&self) -> Side {
        self.board.turn()
    }

    pub fn display(&self) {
        println!("{}", self.board);
    }

    fn strategy(&self) -> Box<dyn Strategy> {
        match self.options.strategy {
            StrategyKind::Random => Box::new(RandomStrategy),
            StrategyKind::Greedy => Box::new(GreedyStrategy),
            StrategyKind::Lookahead => Box::new(LookaheadStrategy::new(self.config)),
            StrategyKind::Margin => Box::new(MarginStrategy),
        }
    }
}
