use alloc::string::String;
use thiserror::Error;
use trivia_protocol::CategoryId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Trivia source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("Malformed record from trivia source: {0}")]
    MalformedRecord(String),
    #[error("Category pool too small, requested {requested} but only {available} available")]
    InsufficientPool { requested: usize, available: usize },
    #[error("Category {category} has {available} clues, {requested} required")]
    InsufficientClues {
        category: CategoryId,
        requested: usize,
        available: usize,
    },
    #[error("Invalid coordinates")]
    InvalidCoordinate,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

impl TriviaError {
    /// Whether the error came from talking to the trivia source, as opposed to a
    /// caller addressing the board wrongly.
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable(_)
                | Self::MalformedRecord(_)
                | Self::InsufficientPool { .. }
                | Self::InsufficientClues { .. }
        )
    }
}

pub type Result<T> = core::result::Result<T, TriviaError>;
