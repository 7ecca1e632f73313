// ---------------------------------------------------------------------------
// Sample – one row of the timing file
// ---------------------------------------------------------------------------

/// A single `(frame, time_ms)` measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Frame index (first field).
    pub frame: f64,
    /// Elapsed time in milliseconds (second field).
    pub time_ms: f64,
}

// ---------------------------------------------------------------------------
// TimingDataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All samples of a timing file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingDataset {
    pub samples: Vec<Sample>,
}

impl TimingDataset {
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        TimingDataset { samples }
    }

    /// Split into the frame column (`x`) and the time column (`y`).
    /// Both keep row order and have one element per row.
    pub fn columns(&self) -> (Vec<f64>, Vec<f64>) {
        self.samples.iter().map(|s| (s.frame, s.time_ms)).unzip()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
