//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-9;

/// Sample with `k` distinct categories, each repeated `repeat` times
pub fn uniform_categories(k: usize, repeat: usize) -> Vec<usize> {
    (0..k).flat_map(|v| std::iter::repeat(v).take(repeat)).collect()
}
