//! Summary statistics over per-game samples.

use serde::{Deserialize, Serialize};

/// Mean, spread and percentiles of one sampled quantity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleStats {
    pub mean: f64,

    /// Population standard deviation.
    pub stdev: f64,

    pub p50: u32,
    pub p90: u32,
}

impl SampleStats {
    /// Summarize a sample. An empty sample is all zeros.
    #[must_use]
    pub fn from_samples(samples: &[u32]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let mean = mean(samples);
        let variance = samples
            .iter()
            .map(|&x| {
                let d = f64::from(x) - mean;
                d * d
            })
            .sum::<f64>()
            / samples.len() as f64;

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();

        Self {
            mean,
            stdev: variance.sqrt(),
            p50: percentile(&sorted, 0.5),
            p90: percentile(&sorted, 0.9),
        }
    }
}

/// Arithmetic mean, 0 for an empty sample.
#[must_use]
pub fn mean(samples: &[u32]) -> f64 {
    if samples.is_empty() {
        0.0
    } else {
        samples.iter().map(|&x| f64::from(x)).sum::<f64>() / samples.len() as f64
    }
}

/// Element at `floor(len * p)` of an already sorted sample, clamped to the
/// last element.
#[must_use]
pub fn percentile(sorted: &[u32], p: f64) -> u32 {
    if sorted.is_empty() {
        return 0;
    }
    let index = ((sorted.len() as f64) * p).floor() as usize;
    sorted[index.min(sorted.len() - 1)]
}
