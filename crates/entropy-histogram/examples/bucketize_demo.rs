//! Demonstrates how the bucket count changes the entropy of a continuous sample

use entropy_core::entropy;
use entropy_histogram::{bucketize, equal_width_histogram, HistogramOps};

fn main() {
    // Skewed sample: dense near zero, sparse tail
    let data: Vec<f64> = (0..1000)
        .map(|i| {
            let x = i as f64 / 200.0;
            x * (-x).exp() * 10.0
        })
        .collect();

    println!("=== Entropy by bucket count ===");
    for n in [2, 5, 10, 20, 50] {
        let buckets = bucketize(&data, n).unwrap();
        let h = entropy(&buckets).unwrap();
        println!("{n:>3} buckets: H = {h:.4} bits (max {:.4})", (n as f64).log2());
    }

    println!("\n=== Histogram with 5 bins ===");
    let hist = equal_width_histogram(&data, 5).unwrap();
    println!("{hist}");
    for bin in hist.bins() {
        println!("  {bin}");
    }
    println!("Normalized entropy: {:.4}", hist.normalized_entropy().unwrap());
}
