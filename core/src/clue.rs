use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// What a clue cell currently shows. Only ever advances towards `Answer`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Showing {
    Hidden,
    Question,
    Answer,
}

impl Showing {
    pub const fn next(self) -> Self {
        match self {
            Self::Hidden => Self::Question,
            Self::Question | Self::Answer => Self::Answer,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

impl Default for Showing {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    pub(crate) showing: Showing,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: Showing::Hidden,
        }
    }

    pub const fn showing(&self) -> Showing {
        self.showing
    }

    pub fn content(&self) -> CellContent<'_> {
        match self.showing {
            Showing::Hidden => CellContent::Hidden,
            Showing::Question => CellContent::Question(&self.question),
            Showing::Answer => CellContent::Answer(&self.answer),
        }
    }
}

/// Text a cell displays for its current state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellContent<'a> {
    Hidden,
    Question(&'a str),
    Answer(&'a str),
}

impl<'a> CellContent<'a> {
    pub const fn text(self) -> Option<&'a str> {
        match self {
            Self::Hidden => None,
            Self::Question(text) | Self::Answer(text) => Some(text),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub clues: Vec<Clue>,
}
