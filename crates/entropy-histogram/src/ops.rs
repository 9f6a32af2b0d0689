//! Information measures over histograms

use crate::types::Histogram;
use entropy_core::{FrequencyTable, Result};

/// Operations that can be performed on histograms
pub trait HistogramOps {
    /// Shannon entropy (bits) of the bin occupancy, empty bins ignored
    fn entropy(&self) -> Result<f64>;

    /// Entropy divided by `log2` of the number of occupied bins
    fn normalized_entropy(&self) -> Result<f64>;
}

impl HistogramOps for Histogram {
    fn entropy(&self) -> Result<f64> {
        occupancy(self).entropy()
    }

    fn normalized_entropy(&self) -> Result<f64> {
        occupancy(self).normalized_entropy()
    }
}

fn occupancy(hist: &Histogram) -> FrequencyTable<usize> {
    FrequencyTable::from_counts(hist.bins().iter().map(|b| b.count).enumerate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HistogramBin;
    use approx::assert_relative_eq;

    #[test]
    fn test_entropy_ignores_empty_bins() {
        let bins = vec![
            HistogramBin::new(0.0, 1.0, 2, 4),
            HistogramBin::new(1.0, 2.0, 0, 4),
            HistogramBin::new(2.0, 3.0, 2, 4),
        ];
        let hist = Histogram::new(bins, 4, 0.0, 3.0);
        assert_relative_eq!(hist.entropy().unwrap(), 1.0);
        assert_relative_eq!(hist.normalized_entropy().unwrap(), 1.0);
    }

    #[test]
    fn test_empty_histogram() {
        let hist = Histogram::new(vec![], 0, 0.0, 0.0);
        assert!(hist.entropy().is_err());
    }
}
