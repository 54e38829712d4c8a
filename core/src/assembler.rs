use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use futures_util::future::try_join_all;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use trivia_protocol::CategoryId;

use crate::*;

/// Asks the source for `config.pool_size` categories and draws
/// `config.categories` distinct ids out of them.
pub async fn select_categories<S: TriviaSource, R: Rng>(
    source: &S,
    config: &BoardConfig,
    rng: &mut R,
) -> Result<Vec<CategoryId>> {
    let records = source.list_categories(config.pool_size).await?;

    let mut seen = BTreeSet::new();
    let pool: Vec<CategoryId> = records
        .into_iter()
        .map(|record| record.id)
        .filter(|&id| seen.insert(id))
        .collect();
    let available = pool.len();
    log::debug!("category pool has {} candidates", available);

    sample_distinct(pool, config.categories, rng).ok_or(TriviaError::InsufficientPool {
        requested: config.categories,
        available,
    })
}

/// Fetches the clues of one category and draws `config.questions` distinct ones.
///
/// Only the clues of `category` are considered, nothing carries over between calls.
pub async fn build_category<S: TriviaSource, R: Rng>(
    source: &S,
    config: &BoardConfig,
    category: CategoryId,
    rng: &mut R,
) -> Result<Category> {
    let mut records = source.list_clues(category).await?;

    let mut seen = BTreeSet::new();
    records.retain(|record| seen.insert((record.question.clone(), record.answer.clone())));
    let available = records.len();

    let title = records
        .first()
        .map(|record| record.category.title.clone())
        .unwrap_or_default();
    let picked = sample_distinct(records, config.questions, rng).ok_or(
        TriviaError::InsufficientClues {
            category,
            requested: config.questions,
            available,
        },
    )?;
    log::debug!("category {} ({:?}): picked {} of {} clues", category, title, picked.len(), available);

    Ok(Category {
        title: String::from(title.trim()),
        clues: picked
            .into_iter()
            .map(|record| Clue::new(record.question, record.answer))
            .collect(),
    })
}

/// Builds a whole board. Category fetches run concurrently, each with its own
/// generator derived from `seed`, and the first failure fails the board.
pub async fn assemble_board<S: TriviaSource>(
    source: &S,
    config: &BoardConfig,
    seed: u64,
) -> Result<Board> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let ids = select_categories(source, config, &mut rng).await?;
    log::debug!("selected categories: {:?}", ids);

    let builds = ids.into_iter().map(|id| {
        let mut category_rng = SmallRng::seed_from_u64(rng.random());
        async move { build_category(source, config, id, &mut category_rng).await }
    });
    let categories = try_join_all(builds).await?;

    Board::from_categories(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::MemorySource;
    use futures_util::FutureExt;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(2024)
    }

    #[test]
    fn picks_six_distinct_ids_out_of_a_hundred() {
        let source = MemorySource::uniform(100, 5);

        let ids = select_categories(&source, &BoardConfig::default(), &mut rng())
            .now_or_never()
            .unwrap()
            .unwrap();

        assert_eq!(ids.len(), NUM_CATEGORIES);
        let unique: BTreeSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), NUM_CATEGORIES);
        assert!(ids.iter().all(|id| (1..=100).contains(&id.0)));
    }

    #[test]
    fn duplicate_pool_entries_do_not_count_twice() {
        let mut source = MemorySource::uniform(4, 5);
        let repeats = source.categories.clone();
        source.categories.extend(repeats);

        let err = select_categories(&source, &BoardConfig::default(), &mut rng())
            .now_or_never()
            .unwrap()
            .unwrap_err();

        assert_eq!(
            err,
            TriviaError::InsufficientPool {
                requested: NUM_CATEGORIES,
                available: 4
            }
        );
    }

    #[test]
    fn short_category_is_an_error_not_a_short_list() {
        let mut source = MemorySource::default();
        source.add_category(9, 3);

        let err = build_category(&source, &BoardConfig::default(), CategoryId(9), &mut rng())
            .now_or_never()
            .unwrap()
            .unwrap_err();

        assert_eq!(
            err,
            TriviaError::InsufficientClues {
                category: CategoryId(9),
                requested: NUM_QUESTIONS,
                available: 3
            }
        );
    }

    #[test]
    fn category_clues_are_distinct_and_hidden() {
        let mut source = MemorySource::default();
        source.add_category(3, 40);

        let category = build_category(&source, &BoardConfig::default(), CategoryId(3), &mut rng())
            .now_or_never()
            .unwrap()
            .unwrap();

        assert_eq!(category.title, "category 3");
        assert_eq!(category.clues.len(), NUM_QUESTIONS);
        let questions: BTreeSet<_> = category.clues.iter().map(|clue| &clue.question).collect();
        assert_eq!(questions.len(), NUM_QUESTIONS);
        assert!(category.clues.iter().all(|clue| clue.showing() == Showing::Hidden));
    }

    #[test]
    fn repeated_clue_records_are_collapsed_before_sampling() {
        let mut source = MemorySource::default();
        source.add_category(5, 1);
        let clue = source.clues[&CategoryId(5)][0].clone();
        source
            .clues
            .get_mut(&CategoryId(5))
            .unwrap()
            .extend(core::iter::repeat_n(clue, 6));

        let err = build_category(&source, &BoardConfig::default(), CategoryId(5), &mut rng())
            .now_or_never()
            .unwrap()
            .unwrap_err();

        assert!(matches!(err, TriviaError::InsufficientClues { available: 1, .. }));
    }

    #[test]
    fn assembled_board_is_uniform_and_rows_use_their_own_clues() {
        let source = MemorySource::uniform(100, 8);

        let board = assemble_board(&source, &BoardConfig::default(), 11)
            .now_or_never()
            .unwrap()
            .unwrap();

        assert_eq!(board.size(), (NUM_CATEGORIES as Coord, NUM_QUESTIONS as Coord));
        for category in 0..NUM_CATEGORIES as Coord {
            let title = board.category_title(category).unwrap();
            let id = title.trim_start_matches("category ");
            let prefix = alloc::format!("q{id}-");
            let clues = board.category_clues(category).unwrap();
            assert_eq!(clues.len(), NUM_QUESTIONS);
            assert!(clues.iter().all(|clue| clue.question.starts_with(&prefix)));
        }
        assert_eq!(source.clue_requests.get(), NUM_CATEGORIES);
    }

    #[test]
    fn one_short_category_fails_the_whole_board() {
        let mut source = MemorySource::uniform(6, 5);
        source.clues.get_mut(&CategoryId(4)).unwrap().truncate(2);

        let err = assemble_board(&source, &BoardConfig::default(), 11)
            .now_or_never()
            .unwrap()
            .unwrap_err();

        assert!(matches!(
            err,
            TriviaError::InsufficientClues {
                category: CategoryId(4),
                ..
            }
        ));
    }

    #[test]
    fn unreachable_source_surfaces_as_source_unavailable() {
        let source = MemorySource {
            offline: true,
            ..MemorySource::uniform(10, 5)
        };

        let err = assemble_board(&source, &BoardConfig::default(), 0)
            .now_or_never()
            .unwrap()
            .unwrap_err();

        assert!(matches!(err, TriviaError::SourceUnavailable(_)));
        assert!(err.is_fetch_failure());
    }

    #[test]
    fn undecodable_clue_list_fails_the_whole_board() {
        let source = MemorySource {
            malformed: Some(CategoryId(3)),
            ..MemorySource::uniform(6, 5)
        };

        let err = assemble_board(&source, &BoardConfig::default(), 8)
            .now_or_never()
            .unwrap()
            .unwrap_err();

        assert!(matches!(err, TriviaError::MalformedRecord(_)));
        assert!(err.is_fetch_failure());
    }

    #[test]
    fn same_seed_builds_the_same_board() {
        let source = MemorySource::uniform(30, 10);
        let config = BoardConfig::default();

        let a = assemble_board(&source, &config, 5).now_or_never().unwrap().unwrap();
        let b = assemble_board(&source, &config, 5).now_or_never().unwrap().unwrap();

        assert_eq!(a, b);
    }
}
