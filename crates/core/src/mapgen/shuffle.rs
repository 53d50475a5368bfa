//! In-place uniform shuffling over an injectable random source.

use rand_chacha::rand_core::RngCore;

use super::sample::uniform_below;

/// Fisher-Yates permutation. Generic over the random source so tests
/// can pin a seed.
pub(super) fn shuffle<T>(items: &mut [T], rng: &mut impl RngCore) {
    for index in 0..items.len().saturating_sub(1) {
        let other = index + uniform_below(rng, items.len() - index);
        items.swap(index, other);
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn shuffle_preserves_the_element_multiset() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut items: Vec<usize> = (0..50).collect();
        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let mut left: Vec<usize> = (0..20).collect();
        let mut right: Vec<usize> = (0..20).collect();

        let mut rng_left = ChaCha8Rng::seed_from_u64(9);
        let mut rng_right = ChaCha8Rng::seed_from_u64(9);
        shuffle(&mut left, &mut rng_left);
        shuffle(&mut right, &mut rng_right);

        assert_eq!(left, right);
    }

    #[test]
    fn shuffle_of_short_sequences_is_a_no_op() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![7_u8];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![7]);
    }
}
