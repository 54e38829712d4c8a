#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use assembler::*;
pub use board::*;
pub use clue::*;
pub use error::*;
pub use sampler::*;
pub use session::*;
pub use source::*;
pub use types::*;

mod assembler;
mod board;
mod clue;
mod error;
mod sampler;
mod session;
mod source;
mod types;

/// Categories on a standard board.
pub const NUM_CATEGORIES: usize = 6;

/// Clues per category on a standard board.
pub const NUM_QUESTIONS: usize = 5;

/// How many candidate categories are requested to pick the board from.
pub const CATEGORY_POOL_SIZE: u32 = 100;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub categories: usize,
    pub questions: usize,
    pub pool_size: u32,
}

impl BoardConfig {
    pub const fn new_unchecked(categories: usize, questions: usize, pool_size: u32) -> Self {
        Self {
            categories,
            questions,
            pool_size,
        }
    }

    pub fn new(categories: usize, questions: usize, pool_size: u32) -> Self {
        let max = usize::from(Coord::MAX);
        let categories = categories.clamp(1, max);
        let questions = questions.clamp(1, max);
        let pool_size = pool_size.max(categories as u32);
        Self::new_unchecked(categories, questions, pool_size)
    }

    pub const fn total_clues(&self) -> usize {
        self.categories * self.questions
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(NUM_CATEGORIES, NUM_QUESTIONS, CATEGORY_POOL_SIZE)
    }
}

/// What a click on a clue changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reveal<'a> {
    Unchanged,
    Question(&'a str),
    Answer(&'a str),
}

impl Reveal<'_> {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    pub const fn showing(self) -> Option<Showing> {
        match self {
            Self::Unchanged => None,
            Self::Question(_) => Some(Showing::Question),
            Self::Answer(_) => Some(Showing::Answer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_to_usable_values() {
        let config = BoardConfig::new(0, 1000, 3);

        assert_eq!(config.categories, 1);
        assert_eq!(config.questions, usize::from(Coord::MAX));
        assert_eq!(config.pool_size, 3);
        assert_eq!(BoardConfig::new(6, 5, 2).pool_size, 6);
    }

    #[test]
    fn default_config_is_six_by_five() {
        let config = BoardConfig::default();

        assert_eq!(config.total_clues(), 30);
        assert_eq!(config.pool_size, CATEGORY_POOL_SIZE);
    }
}
