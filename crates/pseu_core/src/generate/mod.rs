//! # Generators
//!
//! Each generator is a function of a random source, a parsed request and
//! (for numeric draws) a statistics flag, returning a [`ResultSet`].
//!
//! | Generator   | Input                       | Output                         |
//! |-------------|-----------------------------|--------------------------------|
//! | [`roll`]    | dice request                | draws, optional sum/min/max/avg|
//! | [`rand`]    | range request               | draws, optional sum/min/max    |
//! | [`pick`]    | items and a count `n`       | `n` distinct items             |
//! | [`shuffle`] | items                       | all items in random order      |
//!
//! Input validation happens before the source is touched, so a failed call
//! leaves a seeded source in the same state as before.

mod stats;

pub use stats::Stats;

use crate::rng::PseuRng;
use crate::types::{GenerationRequest, PseuError, Result};

/// Ordered results of one generation call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResultSet<T> {
    /// Values in the order they were drawn
    pub values: Vec<T>,
    /// Aggregates, present only when requested
    pub stats: Option<Stats>,
}

impl<T> ResultSet<T> {
    fn plain(values: Vec<T>) -> Self {
        Self {
            values,
            stats: None,
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values were produced.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Draws every range of `request` in order.
fn draw(rng: &mut PseuRng, request: &GenerationRequest) -> Vec<u64> {
    let capacity = usize::try_from(request.total_draws()).unwrap_or(usize::MAX);
    let mut values = Vec::with_capacity(capacity.min(1 << 16));
    for range in request.ranges() {
        for _ in 0..range.times() {
            values.push(rng.uniform(range.lower(), range.upper()));
        }
    }
    values
}

fn missing_draws() -> PseuError {
    PseuError::Internal("no values drawn for a non-empty request".to_string())
}

/// Rolls dice: `times` draws from `[1, sides]` per range, in request order.
///
/// With `want_stats` the result carries sum, min, max and the average.
///
/// # Examples
///
/// ```
/// use pseu_core::generate::roll;
/// use pseu_core::rng::PseuRng;
/// use pseu_core::GenerationRequest;
///
/// let mut rng = PseuRng::from_seed(1);
/// let request = GenerationRequest::dice(&["2d6", "1d20"]).unwrap();
/// let result = roll(&mut rng, &request, true).unwrap();
///
/// assert_eq!(result.len(), 3);
/// assert!(result.stats.unwrap().mean.is_some());
/// ```
pub fn roll(
    rng: &mut PseuRng,
    request: &GenerationRequest,
    want_stats: bool,
) -> Result<ResultSet<u64>> {
    let values = draw(rng, request);
    let stats = if want_stats {
        Some(Stats::with_mean(&values).ok_or_else(missing_draws)?)
    } else {
        None
    };
    Ok(ResultSet { values, stats })
}

/// Draws random integers: `times` draws from `[lower, upper]` per range.
///
/// With `want_stats` the result carries sum, min and max.
pub fn rand(
    rng: &mut PseuRng,
    request: &GenerationRequest,
    want_stats: bool,
) -> Result<ResultSet<u64>> {
    let values = draw(rng, request);
    let stats = if want_stats {
        Some(Stats::from_values(&values).ok_or_else(missing_draws)?)
    } else {
        None
    };
    Ok(ResultSet { values, stats })
}

/// Picks `n` items at distinct positions of `items`.
///
/// A single pick is a uniform choice; larger picks sample without
/// replacement and come back in random order.
///
/// # Errors
///
/// - [`PseuError::EmptyPopulation`] when `items` is empty
/// - [`PseuError::InvalidSampleSize`] when `n > items.len()`
pub fn pick<T: Clone>(rng: &mut PseuRng, items: &[T], n: usize) -> Result<ResultSet<T>> {
    if items.is_empty() {
        return Err(PseuError::EmptyPopulation);
    }
    if n == 1 {
        return Ok(ResultSet::plain(vec![rng.choice(items)?]));
    }
    let values = rng
        .sample_without_replacement(items, n)
        .map_err(|err| match err {
            PseuError::InsufficientPopulation {
                requested,
                available,
            } => PseuError::InvalidSampleSize {
                requested,
                available,
            },
            other => other,
        })?;
    Ok(ResultSet::plain(values))
}

/// Returns all of `items` in uniformly random order.
///
/// An empty input gives an empty result.
pub fn shuffle<T>(rng: &mut PseuRng, items: Vec<T>) -> ResultSet<T> {
    ResultSet::plain(rng.shuffle(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Range;

    #[test]
    fn test_roll_two_d6_with_stats() {
        let mut rng = PseuRng::from_seed(2024);
        let request = GenerationRequest::dice(&["2d6"]).unwrap();
        let result = roll(&mut rng, &request, true).unwrap();

        assert_eq!(result.values.len(), 2);
        assert!(result.values.iter().all(|v| (1..=6).contains(v)));

        let stats = result.stats.unwrap();
        let (a, b) = (result.values[0], result.values[1]);
        assert_eq!(stats.sum, (a + b) as u128);
        assert_eq!(stats.min, a.min(b));
        assert_eq!(stats.max, a.max(b));
    }

    #[test]
    fn test_roll_without_stats() {
        let mut rng = PseuRng::from_seed(1);
        let request = GenerationRequest::dice::<&str>(&[]).unwrap();
        let result = roll(&mut rng, &request, false).unwrap();

        assert_eq!(result.len(), 1);
        assert!(result.stats.is_none());
    }

    #[test]
    fn test_rand_stats_have_no_mean() {
        let mut rng = PseuRng::from_seed(1);
        let request = GenerationRequest::rand(&["0-4x5"]).unwrap();
        let result = rand(&mut rng, &request, true).unwrap();

        assert_eq!(result.len(), 5);
        assert!(result.stats.unwrap().mean.is_none());
    }

    #[test]
    fn test_draw_order_follows_request() {
        let request = GenerationRequest::from_ranges(vec![
            Range::new(2, 100, 100).unwrap(),
            Range::new(1, 7, 7).unwrap(),
            Range::new(3, 0, 0).unwrap(),
        ])
        .unwrap();
        let mut rng = PseuRng::from_seed(5);
        let result = rand(&mut rng, &request, false).unwrap();

        assert_eq!(result.values, vec![100, 100, 7, 0, 0, 0]);
    }

    #[test]
    fn test_pick_single() {
        let mut rng = PseuRng::from_seed(3);
        let items = ["red", "green", "blue"];
        let result = pick(&mut rng, &items, 1).unwrap();

        assert_eq!(result.len(), 1);
        assert!(items.contains(&result.values[0]));
    }

    #[test]
    fn test_pick_many_distinct() {
        let mut rng = PseuRng::from_seed(3);
        let items: Vec<String> = (0..10).map(|i| format!("item{}", i)).collect();
        let mut result = pick(&mut rng, &items, 4).unwrap().values;

        result.sort();
        result.dedup();
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_pick_zero() {
        let mut rng = PseuRng::from_seed(3);
        assert!(pick(&mut rng, &["a"], 0).unwrap().is_empty());
    }

    #[test]
    fn test_pick_too_many_is_invalid_sample_size() {
        let mut rng = PseuRng::from_seed(3);
        assert_eq!(
            pick(&mut rng, &["a", "b"], 3),
            Err(PseuError::InvalidSampleSize {
                requested: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_pick_empty_population() {
        let mut rng = PseuRng::from_seed(3);
        let empty: [&str; 0] = [];
        assert_eq!(pick(&mut rng, &empty, 1), Err(PseuError::EmptyPopulation));
    }

    #[test]
    fn test_shuffle_empty() {
        let mut rng = PseuRng::from_seed(3);
        assert!(shuffle(&mut rng, Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_shuffle_keeps_items() {
        let mut rng = PseuRng::from_seed(3);
        let mut result = shuffle(&mut rng, vec![3, 1, 2]).values;
        result.sort();
        assert_eq!(result, vec![1, 2, 3]);
    }
}
