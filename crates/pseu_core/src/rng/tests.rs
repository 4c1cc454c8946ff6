//! Unit tests for the random source.
//!
//! This module contains tests verifying:
//! - Seed reproducibility across every operation
//! - Closed-interval bounds of `uniform`
//! - Sampling and shuffling preserve the population
//! - Error cases for oversized samples and empty choices
//! - The same properties for arbitrary seeds via property-based testing

use super::*;
use crate::seed::{Seed, SeedValue};
use crate::types::PseuError;
use std::collections::HashSet;

/// Verifies that the same seed produces identical sequences.
#[test]
fn test_seed_reproducibility() {
    let mut rng1 = PseuRng::from_seed(12345);
    let mut rng2 = PseuRng::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(rng1.uniform(0, 1_000_000), rng2.uniform(0, 1_000_000));
    }

    let items: Vec<u32> = (0..50).collect();
    assert_eq!(
        rng1.sample_without_replacement(&items, 10).unwrap(),
        rng2.sample_without_replacement(&items, 10).unwrap()
    );
    assert_eq!(rng1.shuffle(items.clone()), rng2.shuffle(items.clone()));
    assert_eq!(rng1.choice(&items).unwrap(), rng2.choice(&items).unwrap());
}

/// Different seeds should not produce the same long sequence.
#[test]
fn test_different_seeds_diverge() {
    let mut rng1 = PseuRng::from_seed(1);
    let mut rng2 = PseuRng::from_seed(2);

    let a: Vec<u64> = (0..32).map(|_| rng1.uniform(0, u64::MAX)).collect();
    let b: Vec<u64> = (0..32).map(|_| rng2.uniform(0, u64::MAX)).collect();
    assert_ne!(a, b);
}

#[test]
fn test_seed_is_recorded() {
    assert_eq!(PseuRng::from_seed(7).seed(), Some(SeedValue::from(7)));
    assert_eq!(PseuRng::from_optional_seed(None).seed(), None);
}

/// Seeds wider than 64 bits must key distinct streams.
#[test]
fn test_wide_seeds_give_distinct_streams() {
    let a: Seed = "AliceSecret0123456789".parse().unwrap();
    let b: Seed = "BobsPassword0123456789".parse().unwrap();
    let mut rng_a = PseuRng::from_optional_seed(Some(&a));
    let mut rng_b = PseuRng::from_optional_seed(Some(&b));

    let xs: Vec<u64> = (0..20).map(|_| rng_a.uniform(1, 100)).collect();
    let ys: Vec<u64> = (0..20).map(|_| rng_b.uniform(1, 100)).collect();
    assert_ne!(xs, ys);
}

#[test]
fn test_small_seed_matches_widened_value() {
    let mut a = PseuRng::from_seed(4095);
    let mut b = PseuRng::from_optional_seed(Some(&"//".parse::<Seed>().unwrap()));
    assert_eq!(a.uniform(0, u64::MAX), b.uniform(0, u64::MAX));
}

/// Verifies that both bounds are reachable.
#[test]
fn test_uniform_inclusive_bounds() {
    let mut rng = PseuRng::from_seed(42);
    let mut seen = HashSet::new();

    for _ in 0..1_000 {
        let v = rng.uniform(1, 6);
        assert!((1..=6).contains(&v), "value {} out of [1, 6]", v);
        seen.insert(v);
    }

    assert_eq!(seen.len(), 6, "all faces of a d6 should appear");
}

#[test]
fn test_uniform_degenerate_interval() {
    let mut rng = PseuRng::from_seed(42);
    for _ in 0..10 {
        assert_eq!(rng.uniform(9, 9), 9);
    }
}

#[test]
fn test_uniform_full_width() {
    let mut rng = PseuRng::from_seed(42);
    // Must not panic on the widest possible interval.
    let _ = rng.uniform(0, u64::MAX);
}

#[test]
fn test_sample_all_is_permutation() {
    let mut rng = PseuRng::from_seed(42);
    let items = vec!["a", "b", "c", "d"];

    let mut sample = rng.sample_without_replacement(&items, items.len()).unwrap();
    sample.sort();
    assert_eq!(sample, items);
}

#[test]
fn test_sample_zero() {
    let mut rng = PseuRng::from_seed(42);
    let items = vec![1, 2, 3];
    assert!(rng.sample_without_replacement(&items, 0).unwrap().is_empty());

    let empty: Vec<i32> = Vec::new();
    assert!(rng.sample_without_replacement(&empty, 0).unwrap().is_empty());
}

#[test]
fn test_sample_too_many() {
    let mut rng = PseuRng::from_seed(42);
    let items = vec![1, 2, 3];

    assert_eq!(
        rng.sample_without_replacement(&items, 4),
        Err(PseuError::InsufficientPopulation {
            requested: 4,
            available: 3
        })
    );
}

/// A failed sample must not advance the generator.
#[test]
fn test_failed_sample_consumes_nothing() {
    let mut rng1 = PseuRng::from_seed(99);
    let mut rng2 = PseuRng::from_seed(99);
    let items = vec![1, 2, 3];

    assert!(rng1.sample_without_replacement(&items, 10).is_err());
    assert_eq!(rng1.uniform(0, 1000), rng2.uniform(0, 1000));
}

#[test]
fn test_shuffle_empty() {
    let mut rng = PseuRng::from_seed(42);
    let empty: Vec<String> = Vec::new();
    assert!(rng.shuffle(empty).is_empty());
}

#[test]
fn test_choice_empty() {
    let mut rng = PseuRng::from_seed(42);
    let empty: [u8; 0] = [];
    assert_eq!(rng.choice(&empty), Err(PseuError::EmptyPopulation));
}

#[test]
fn test_choice_single() {
    let mut rng = PseuRng::from_seed(42);
    assert_eq!(rng.choice(&["only"]).unwrap(), "only");
}

#[test]
fn test_entropy_source_in_bounds() {
    let mut rng = PseuRng::from_entropy();
    for _ in 0..100 {
        let v = rng.uniform(10, 20);
        assert!((10..=20).contains(&v));
    }
}

// ============================================================================
// Property-based tests
// ============================================================================

use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property test: uniform values stay within [lower, upper] for any seed.
    #[test]
    fn prop_uniform_in_range(seed in any::<u64>(), lower in 0u64..1_000, width in 0u64..1_000) {
        let upper = lower + width;
        let mut rng = PseuRng::from_seed(seed);
        for _ in 0..100 {
            let v = rng.uniform(lower, upper);
            prop_assert!(
                lower <= v && v <= upper,
                "value {} out of [{}, {}] (seed={})",
                v, lower, upper, seed
            );
        }
    }

    /// Property test: a sample holds exactly n distinct positions of the input.
    #[test]
    fn prop_sample_distinct(seed in any::<u64>(), len in 0usize..200, frac in 0.0f64..=1.0) {
        let n = ((len as f64) * frac) as usize;
        let items: Vec<usize> = (0..len).collect();
        let mut rng = PseuRng::from_seed(seed);

        let sample = rng.sample_without_replacement(&items, n).unwrap();
        prop_assert_eq!(sample.len(), n);

        let unique: HashSet<_> = sample.iter().copied().collect();
        prop_assert_eq!(unique.len(), n);
        prop_assert!(sample.iter().all(|v| *v < len));
    }

    /// Property test: sampling more than the population always fails.
    #[test]
    fn prop_sample_oversized_fails(seed in any::<u64>(), len in 0usize..50, extra in 1usize..10) {
        let items: Vec<usize> = (0..len).collect();
        let mut rng = PseuRng::from_seed(seed);
        prop_assert!(rng.sample_without_replacement(&items, len + extra).is_err());
    }

    /// Property test: shuffle is a permutation of its input.
    #[test]
    fn prop_shuffle_permutation(
        seed in any::<u64>(),
        items in proptest::collection::vec(0u8..10, 0..100)
    ) {
        let mut rng = PseuRng::from_seed(seed);
        let mut shuffled = rng.shuffle(items.clone());
        let mut original = items;
        shuffled.sort_unstable();
        original.sort_unstable();
        prop_assert_eq!(shuffled, original);
    }

    /// Property test: two sources with the same seed agree on every operation.
    #[test]
    fn prop_same_seed_same_output(seed in any::<u64>()) {
        let items: Vec<u32> = (0..20).collect();
        let mut a = PseuRng::from_seed(seed);
        let mut b = PseuRng::from_seed(seed);

        prop_assert_eq!(a.uniform(0, 100), b.uniform(0, 100));
        prop_assert_eq!(
            a.sample_without_replacement(&items, 5).unwrap(),
            b.sample_without_replacement(&items, 5).unwrap()
        );
        prop_assert_eq!(a.shuffle(items.clone()), b.shuffle(items.clone()));
        prop_assert_eq!(a.choice(&items).unwrap(), b.choice(&items).unwrap());
    }
}
