//! Configuration options for the engine

use anyhow::{bail, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Random,
    Greedy,
    Lookahead,
    Margin,
}

impl FromStr for StrategyKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(StrategyKind::Random),
            "greedy" => Ok(StrategyKind::Greedy),
            "lookahead" => Ok(StrategyKind::Lookahead),
            "margin" => Ok(StrategyKind::Margin),
            _ => bail!("Unknown strategy: {}", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// The move-selection strategy for the computer side
    pub strategy: StrategyKind,
    /// Whether protocol errors abort the process
    pub strict_mode: bool,
}

impl EngineOptions {
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "strategy" => self.strategy = value.parse()?,
            "strictmode" => self.strict_mode = value.parse()?,
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Lookahead,
            strict_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!("margin".parse::<StrategyKind>().unwrap(), StrategyKind::Margin);
        assert!("minimax".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_set_option() {
        let mut options = EngineOptions::default();
        options.set_option("strategy", "random").unwrap();
        assert_eq!(options.strategy, StrategyKind::Random);
        options.set_option("strictmode", "true").unwrap();
        assert!(options.strict_mode);
        assert!(options.set_option("depth", "3").is_err());
    }
}
