use super::piece::{Animal, NUM_ANIMALS};

/// Static game configuration: base strength table and the rule
/// constants. Passed to `Board` and the strategies at construction,
/// never read as ambient global state.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Base score per animal, indexed by strength rank
    pub base_scores: [f32; NUM_ANIMALS],
    /// Score forced onto a mouse after an elephant clash
    pub devalued_score: f32,
    /// Consecutive captureless moves before an attrition draw
    pub draw_threshold: u32,
    /// Minimum lookahead score worth preferring over a fresh reveal
    pub confidence_threshold: f32,
}

impl GameConfig {
    pub fn base_score(&self, animal: Animal) -> f32 {
        self.base_scores[animal.rank()]
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // elephant, lion, tiger, leopard, wolf, dog, cat, mouse
            base_scores: [8.0, 7.0, 5.0, 4.0, 3.0, 2.0, 1.0, 6.0],
            devalued_score: 0.5,
            draw_threshold: 20,
            confidence_threshold: 10.0,
        }
    }
}
