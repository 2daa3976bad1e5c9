//! Text histograms of journey samples.

use std::fmt;

/// Width of the longest bar, in characters.
const BAR_WIDTH: usize = 50;

/// Counts of sample values in consecutive equal-width bins.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    min: f64,
    width: f64,
    counts: Vec<usize>,
}

impl Histogram {
    /// Spread `values` over `bins` equal-width bins between their minimum
    /// and maximum. Non-finite values are ignored.
    ///
    /// Returns `None` if there is nothing to bin.
    pub fn from_samples(values: impl IntoIterator<Item = f64>, bins: usize) -> Option<Self> {
        let values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        if values.is_empty() || bins == 0 {
            return None;
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let width = if max > min {
            (max - min) / bins as f64
        } else {
            1.0
        };

        let mut counts = vec![0; bins];
        for value in values {
            // The maximum lands on the upper edge of the last bin
            let bin = (((value - min) / width) as usize).min(bins - 1);
            counts[bin] += 1;
        }

        Some(Self { min, width, counts })
    }

    /// One bin per integer from the smallest to the largest value.
    pub fn unit_bins(values: impl IntoIterator<Item = usize>) -> Option<Self> {
        let values: Vec<usize> = values.into_iter().collect();
        let min = *values.iter().min()?;
        let max = *values.iter().max()?;

        let mut counts = vec![0; max - min + 1];
        for value in values {
            counts[value - min] += 1;
        }

        Some(Self {
            min: min as f64,
            width: 1.0,
            counts,
        })
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Total number of binned samples.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Lower and upper edge of bin `index`.
    pub fn bin_range(&self, index: usize) -> (f64, f64) {
        let lower = self.min + self.width * index as f64;
        (lower, lower + self.width)
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let peak = self.counts.iter().copied().max().unwrap_or(0).max(1);

        for (i, &count) in self.counts.iter().enumerate() {
            let (lower, upper) = self.bin_range(i);
            let bar = "#".repeat(count * BAR_WIDTH / peak);
            writeln!(f, "{lower:>8.1} - {upper:<8.1} | {bar} {count}")?;
        }
        Ok(())
    }
}
