use crate::color::PlotColors;
use crate::data::model::TimingDataset;
use crate::data::summary::TimingSummary;
use crate::ui::plot::ScatterPlot;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Points, labels and title of the scatter plot.
    pub scatter: ScatterPlot,

    /// Statistics of the time column (None for an empty file).
    pub summary: Option<TimingSummary>,

    /// Whether the mean reference line is drawn.
    pub show_mean: bool,

    pub colors: PlotColors,
}

impl AppState {
    /// Build the viewer state from a loaded dataset.
    pub fn from_dataset(dataset: &TimingDataset) -> Self {
        let (x, y) = dataset.columns();
        Self {
            scatter: ScatterPlot::from_columns(&x, &y),
            summary: TimingSummary::from_dataset(dataset),
            show_mean: false,
            colors: PlotColors::default(),
        }
    }

    /// Mean to draw, if the line is enabled and defined.
    pub fn mean_line(&self) -> Option<f64> {
        if self.show_mean {
            self.summary.map(|s| s.mean)
        } else {
            None
        }
    }

    pub fn toggle_mean(&mut self) {
        self.show_mean = !self.show_mean;
    }
}
