//! Frequency tables for categorical samples
//!
//! A [`FrequencyTable`] maps every distinct value of a sample to the number of
//! times it occurs. It is built once per call and discarded afterwards; all
//! entropy measures in the workspace are computed from one.

use crate::{Error, Result};
use std::collections::hash_map::{self, HashMap};
use std::hash::Hash;
use tracing::trace;

/// Occurrence counts per distinct value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K: Hash + Eq> {
    counts: HashMap<K, usize>,
    total: usize,
}

impl<K: Hash + Eq> FrequencyTable<K> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }

    /// Count the values of a slice
    pub fn from_values(values: &[K]) -> Self
    where
        K: Clone,
    {
        values.iter().cloned().collect()
    }

    /// Build a table from precomputed counts, ignoring zero entries
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (K, usize)>,
    {
        let mut table = Self::new();
        for (key, count) in counts {
            if count > 0 {
                *table.counts.entry(key).or_insert(0) += count;
                table.total += count;
            }
        }
        table
    }

    /// Record one occurrence of `value`
    pub fn insert(&mut self, value: K) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.total += 1;
    }

    /// Total number of observations
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct values
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Check if no observation has been recorded
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Occurrences of `value` (zero when never seen)
    pub fn count(&self, value: &K) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Iterate over `(value, count)` pairs in arbitrary order
    pub fn iter(&self) -> hash_map::Iter<'_, K, usize> {
        self.counts.iter()
    }

    /// Relative frequency of each distinct value
    pub fn probabilities(&self) -> Vec<(&K, f64)> {
        let n = self.total as f64;
        self.counts
            .iter()
            .map(|(k, &c)| (k, c as f64 / n))
            .collect()
    }

    /// Shannon entropy in bits: `H = -Σ p_i log2(p_i)`
    pub fn entropy(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::empty_input("entropy"));
        }
        if self.distinct() == 1 {
            return Ok(0.0);
        }

        let n = self.total as f64;
        let h = self.counts.values().fold(0.0_f64, |acc, &c| {
            let p = c as f64 / n;
            acc - p * p.log2()
        });
        trace!(
            total = self.total,
            distinct = self.distinct(),
            entropy = h,
            "frequency table entropy"
        );
        Ok(h)
    }

    /// Shannon entropy with an arbitrary logarithm base
    ///
    /// `base` must be positive and different from one. Base 2 gives bits,
    /// `e` gives nats.
    pub fn entropy_with_base(&self, base: f64) -> Result<f64> {
        if !(base.is_finite() && base > 0.0 && base != 1.0) {
            return Err(Error::InvalidParameter(format!(
                "Logarithm base must be positive and not 1, got {base}"
            )));
        }
        Ok(self.entropy()? / base.log2())
    }

    /// Upper bound `log2(k)` for `k` distinct values
    pub fn max_entropy(&self) -> f64 {
        match self.distinct() {
            0 | 1 => 0.0,
            k => (k as f64).log2(),
        }
    }

    /// Entropy divided by its upper bound, in `[0, 1]`
    ///
    /// Zero when every sample shares one value.
    pub fn normalized_entropy(&self) -> Result<f64> {
        let h = self.entropy()?;
        let max = self.max_entropy();
        if max == 0.0 {
            Ok(0.0)
        } else {
            Ok(h / max)
        }
    }
}

impl<K: Hash + Eq> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for value in iter {
            table.insert(value);
        }
        table
    }
}

impl<K: Hash + Eq> Extend<K> for FrequencyTable<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
