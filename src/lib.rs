//! Junglr - Engine for the Jungle Chess (Dou Shou Qi) board game

pub mod core;
pub mod engine;
pub mod heuristics;
pub mod utils;

// Re-export commonly used items
pub use crate::core::board::Board;
pub use crate::engine::Engine;
