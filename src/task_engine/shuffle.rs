use rand::Rng;

/// Uniform random permutation of `0..n` (Fisher-Yates).
///
/// Used to decouple presentation order from canonical order so a learner
/// cannot read the answer off item positions.
pub fn shuffled_indices<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }
    order
}

/// A shuffled copy of `items`; the input is left untouched.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    shuffled_indices(items.len(), rng)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_permutation(order: &[usize], n: usize) -> bool {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn output_is_always_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 0..12 {
            for _ in 0..50 {
                let order = shuffled_indices(n, &mut rng);
                assert!(is_permutation(&order, n), "not a permutation of 0..{n}: {order:?}");
            }
        }
    }

    #[test]
    fn every_index_lands_in_every_position_uniformly() {
        const N: usize = 4;
        const RUNS: usize = 40_000;
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [[0usize; N]; N];
        for _ in 0..RUNS {
            for (pos, idx) in shuffled_indices(N, &mut rng).into_iter().enumerate() {
                counts[idx][pos] += 1;
            }
        }
        // Expected 10_000 per cell; allow 5% either way.
        let expected = RUNS / N;
        for (idx, row) in counts.iter().enumerate() {
            for (pos, &c) in row.iter().enumerate() {
                let diff = c.abs_diff(expected);
                assert!(
                    diff < expected / 20,
                    "index {idx} at position {pos}: {c} hits, expected ~{expected}"
                );
            }
        }
    }

    #[test]
    fn all_permutations_of_three_are_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(shuffled_indices(3, &mut rng));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn shuffled_does_not_mutate_input() {
        let items = vec!["eins", "zwei", "drei", "vier"];
        let before = items.clone();
        let mut rng = StdRng::seed_from_u64(99);
        let out = shuffled(&items, &mut rng);
        assert_eq!(items, before);
        let mut sorted_out = out.clone();
        sorted_out.sort_unstable();
        let mut sorted_in = items.clone();
        sorted_in.sort_unstable();
        assert_eq!(sorted_out, sorted_in);
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let make = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            shuffled_indices(10, &mut rng)
        };
        assert_eq!(make(5), make(5));
        assert_ne!(make(5), make(6));
    }
}
