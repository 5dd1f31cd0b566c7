//! Move selection for the computer player

pub mod eval;
pub mod greedy;
pub mod lookahead;
pub mod margin;
pub mod random;

mod traits;
pub use traits::*;
