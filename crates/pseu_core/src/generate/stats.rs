//! Aggregate statistics over drawn values.

/// Sum, extremes and (for dice) the average of a draw sequence.
///
/// The sum is kept as `u128` so that it cannot overflow for any realistic
/// number of `u64` draws.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Stats {
    /// Sum of all values
    pub sum: u128,
    /// Smallest value
    pub min: u64,
    /// Largest value
    pub max: u64,
    /// Arithmetic mean; only reported for dice
    pub mean: Option<f64>,
}

impl Stats {
    /// Computes sum, min and max. Returns `None` for an empty slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use pseu_core::generate::Stats;
    ///
    /// let stats = Stats::from_values(&[3, 1, 4]).unwrap();
    /// assert_eq!((stats.sum, stats.min, stats.max), (8, 1, 4));
    /// assert!(stats.mean.is_none());
    /// assert!(Stats::from_values(&[]).is_none());
    /// ```
    pub fn from_values(values: &[u64]) -> Option<Self> {
        let (&first, rest) = values.split_first()?;
        let (sum, min, max) = rest.iter().fold(
            (first as u128, first, first),
            |(sum, min, max), &v| (sum + v as u128, min.min(v), max.max(v)),
        );
        Some(Self {
            sum,
            min,
            max,
            mean: None,
        })
    }

    /// Same as [`Stats::from_values`], also filling in the mean.
    pub fn with_mean(values: &[u64]) -> Option<Self> {
        let mut stats = Self::from_values(values)?;
        stats.mean = Some(stats.sum as f64 / values.len() as f64);
        Some(stats)
    }
}
