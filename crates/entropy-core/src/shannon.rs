//! Shannon entropy of categorical samples

use crate::{FrequencyTable, Result};
use ordered_float::OrderedFloat;
use std::hash::Hash;
use tracing::debug;

/// Shannon entropy (bits) of a slice of categorical values
///
/// Order of the values is irrelevant. Fails with
/// [`Error::InvalidInput`](crate::Error::InvalidInput) on an empty slice.
///
/// ```rust
/// use entropy_core::entropy;
///
/// assert_eq!(entropy(&[1, 1, 2, 2]).unwrap(), 1.0);
/// assert_eq!(entropy(&["a", "a", "a"]).unwrap(), 0.0);
/// ```
pub fn entropy<K: Hash + Eq>(values: &[K]) -> Result<f64> {
    entropy_iter(values.iter())
}

/// Shannon entropy (bits) of any stream of categorical values
pub fn entropy_iter<I>(values: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    let table: FrequencyTable<I::Item> = values.into_iter().collect();
    let h = table.entropy()?;
    debug!(n = table.total(), distinct = table.distinct(), entropy = h, "computed entropy");
    Ok(h)
}

/// Shannon entropy (bits) of floats treated as categories
///
/// Values compare by their exact bit pattern after normalisation by
/// [`OrderedFloat`], so every NaN lands in the same category.
pub fn float_entropy(values: &[f64]) -> Result<f64> {
    entropy_iter(values.iter().copied().map(OrderedFloat))
}
