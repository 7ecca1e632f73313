use std::fmt;

use super::model::TimingDataset;

/// Descriptive statistics of the time column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSummary {
    pub count: usize,
    pub mean: f64,
    /// Population variance (divided by `count`).
    pub variance: f64,
    pub min: f64,
    pub max: f64,
}

impl TimingSummary {
    /// `None` for an empty dataset.
    pub fn from_dataset(dataset: &TimingDataset) -> Option<Self> {
        let times: Vec<f64> = dataset.samples.iter().map(|s| s.time_ms).collect();
        Self::from_times(&times)
    }

    pub fn from_times(times: &[f64]) -> Option<Self> {
        if times.is_empty() {
            return None;
        }
        let n = times.len() as f64;
        let mean = times.iter().sum::<f64>() / n;
        let variance = times.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / n;
        let min = times.iter().copied().fold(f64::INFINITY, f64::min);
        let max = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(TimingSummary {
            count: times.len(),
            mean,
            variance,
            min,
            max,
        })
    }
}

impl fmt::Display for TimingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} samples, mean {:.4} ms, variance {:.4} ms², range {:.4}..{:.4} ms",
            self.count, self.mean, self.variance, self.min, self.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_population_variance() {
        let s = TimingSummary::from_times(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(s.count, 8);
        assert!((s.mean - 5.0).abs() < 1e-12);
        assert!((s.variance - 4.0).abs() < 1e-12);
        assert_eq!(s.min, 2.0);
        assert_eq!(s.max, 9.0);
    }

    #[test]
    fn single_sample_has_zero_variance() {
        let s = TimingSummary::from_times(&[3.25]).unwrap();
        assert_eq!(s.mean, 3.25);
        assert_eq!(s.variance, 0.0);
    }

    #[test]
    fn empty_has_no_summary() {
        assert!(TimingSummary::from_dataset(&TimingDataset::default()).is_none());
    }

    #[test]
    fn display_is_readable() {
        let s = TimingSummary::from_times(&[1.0, 3.0]).unwrap();
        assert_eq!(
            s.to_string(),
            "2 samples, mean 2.0000 ms, variance 1.0000 ms², range 1.0000..3.0000 ms"
        );
    }
}
