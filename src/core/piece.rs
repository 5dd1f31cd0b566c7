use anyhow::{anyhow, Result};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

use super::config::GameConfig;
use super::convert::{FromIndex, ToIndex};
use super::side::Side;

pub const NUM_ANIMALS: usize = 8;

/// Animal kinds, strongest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Animal {
    Elephant,
    Lion,
    Tiger,
    Leopard,
    Wolf,
    Dog,
    Cat,
    Mouse,
}

impl Animal {
    pub fn all() -> [Animal; NUM_ANIMALS] {
        [
            Animal::Elephant,
            Animal::Lion,
            Animal::Tiger,
            Animal::Leopard,
            Animal::Wolf,
            Animal::Dog,
            Animal::Cat,
            Animal::Mouse,
        ]
    }

    /// Position in the strength order (0 = strongest)
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Whether this animal captures `other`. Total for every distinct
    /// pair: strict rank order, except that the mouse captures the
    /// elephant and not the other way around.
    pub fn preys_on(self, other: Animal) -> bool {
        match (self, other) {
            (Animal::Elephant, Animal::Mouse) => false,
            (Animal::Mouse, Animal::Elephant) => true,
            (Animal::Mouse, _) => false,
            (_, _) => self.rank() < other.rank(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Animal::Elephant => "elephant",
            Animal::Lion => "lion",
            Animal::Tiger => "tiger",
            Animal::Leopard => "leopard",
            Animal::Wolf => "wolf",
            Animal::Dog => "dog",
            Animal::Cat => "cat",
            Animal::Mouse => "mouse",
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Animal::Elephant => 'E',
            Animal::Lion => 'L',
            Animal::Tiger => 'T',
            Animal::Leopard => 'P',
            Animal::Wolf => 'W',
            Animal::Dog => 'D',
            Animal::Cat => 'C',
            Animal::Mouse => 'M',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'E' => Some(Animal::Elephant),
            'L' => Some(Animal::Lion),
            'T' => Some(Animal::Tiger),
            'P' => Some(Animal::Leopard),
            'W' => Some(Animal::Wolf),
            'D' => Some(Animal::Dog),
            'C' => Some(Animal::Cat),
            'M' => Some(Animal::Mouse),
            _ => None,
        }
    }
}

impl FromIndex for Animal {
    fn from_index(idx: usize) -> Result<Self> {
        FromPrimitive::from_usize(idx)
            .ok_or_else(|| anyhow!("Invalid animal index: {}", idx))
    }
}

impl ToIndex for Animal {
    fn to_index(&self) -> Result<usize> {
        ToPrimitive::to_usize(self)
            .ok_or_else(|| anyhow!("Invalid animal value"))
    }
}

/// A piece on the board. The score starts at the configured base value
/// and only ever changes through devaluation after an elephant-related
/// clash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub animal: Animal,
    pub side: Side,
    pub score: f32,
}

impl Piece {
    pub fn new(animal: Animal, side: Side, config: &GameConfig) -> Self {
        Self {
            animal,
            side,
            score: config.base_score(animal),
        }
    }

    pub fn devalue(&mut self, score: f32) {
        self.score = score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_totality() {
        // For every distinct pair exactly one capture direction holds.
        for x in Animal::all() {
            for y in Animal::all() {
                if x == y {
                    assert!(!x.preys_on(y));
                } else {
                    assert_ne!(x.preys_on(y), y.preys_on(x), "{:?} vs {:?}", x, y);
                }
            }
        }
    }

    #[test]
    fn test_elephant_mouse_inversion() {
        assert!(Animal::Mouse.preys_on(Animal::Elephant));
        assert!(!Animal::Elephant.preys_on(Animal::Mouse));
        assert!(Animal::Lion.preys_on(Animal::Mouse));
        assert!(!Animal::Mouse.preys_on(Animal::Cat));
    }

    #[test]
    fn test_base_scores() {
        let config = GameConfig::default();
        let dog = Piece::new(Animal::Dog, Side::Red, &config);
        assert_eq!(dog.score, 2.0);
        let mouse = Piece::new(Animal::Mouse, Side::Blue, &config);
        assert_eq!(mouse.score, 6.0);
    }

    #[test]
    fn test_char_roundtrip() {
        for animal in Animal::all() {
            assert_eq!(Animal::from_char(animal.to_char()), Some(animal));
        }
        assert_eq!(Animal::from_char('x'), None);
    }
}
