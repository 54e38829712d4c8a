use alloc::vec::Vec;
use core::future::Future;
use trivia_protocol::{CategoryId, CategoryRecord, ClueRecord};

use crate::Result;

/// Where categories and clues come from.
///
/// Implementations report transport problems as
/// [`TriviaError::SourceUnavailable`](crate::TriviaError::SourceUnavailable) and
/// undecodable bodies as
/// [`TriviaError::MalformedRecord`](crate::TriviaError::MalformedRecord).
pub trait TriviaSource {
    fn list_categories(&self, count: u32) -> impl Future<Output = Result<Vec<CategoryRecord>>>;

    fn list_clues(&self, category: CategoryId) -> impl Future<Output = Result<Vec<ClueRecord>>>;
}
