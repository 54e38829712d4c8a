use alloc::vec::Vec;
use rand::Rng;

/// Picks `count` items out of `pool` uniformly at random without replacement.
///
/// Runs a partial Fisher-Yates shuffle, so the result order is random as well.
/// Returns `None` instead of a shortened list when the pool is too small.
pub fn sample_distinct<T, R: Rng>(mut pool: Vec<T>, count: usize, rng: &mut R) -> Option<Vec<T>> {
    let len = pool.len();
    if count > len {
        return None;
    }

    for i in 0..count {
        let j = rng.random_range(i..len);
        pool.swap(i, j);
    }
    pool.truncate(count);
    Some(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use rand::{SeedableRng, rngs::SmallRng};

    #[test]
    fn takes_distinct_items_from_pool() {
        let mut rng = SmallRng::seed_from_u64(7);
        let pool: Vec<u32> = (0..100).collect();

        let picked = sample_distinct(pool, 6, &mut rng).unwrap();

        assert_eq!(picked.len(), 6);
        let unique: BTreeSet<_> = picked.iter().copied().collect();
        assert_eq!(unique.len(), 6);
        assert!(picked.iter().all(|&item| item < 100));
    }

    #[test]
    fn refuses_to_truncate_short_pool() {
        let mut rng = SmallRng::seed_from_u64(7);

        assert_eq!(sample_distinct(alloc::vec![1, 2, 3], 5, &mut rng), None);
    }

    #[test]
    fn whole_pool_is_a_permutation() {
        let mut rng = SmallRng::seed_from_u64(99);

        let mut picked = sample_distinct(alloc::vec![4, 8, 15, 16, 23], 5, &mut rng).unwrap();
        picked.sort();

        assert_eq!(picked, alloc::vec![4, 8, 15, 16, 23]);
    }

    #[test]
    fn every_item_gets_picked_eventually() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut seen = BTreeSet::new();

        for _ in 0..200 {
            let picked = sample_distinct((0..10).collect::<Vec<u8>>(), 1, &mut rng).unwrap();
            seen.extend(picked);
        }

        assert_eq!(seen.len(), 10);
    }
}
