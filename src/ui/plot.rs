use eframe::egui::Ui;
use egui_plot::{HLine, Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::color::PlotColors;

pub const TITLE: &str = "Execution time by frame";
pub const X_LABEL: &str = "Frame";
pub const Y_LABEL: &str = "Time (ms)";

// ---------------------------------------------------------------------------
// Scatter plot model
// ---------------------------------------------------------------------------

/// Everything needed to draw the timing scatter plot, independent of egui.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// One `[x, y]` point per row, in row order.
    pub points: Vec<[f64; 2]>,
}

impl ScatterPlot {
    /// Pair `x[i]` with `y[i]`. Both slices come from the same dataset and
    /// have equal length.
    pub fn from_columns(x: &[f64], y: &[f64]) -> Self {
        debug_assert_eq!(x.len(), y.len());
        ScatterPlot {
            title: TITLE.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            points: x.iter().zip(y).map(|(&xi, &yi)| [xi, yi]).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Rendering (central panel)
// ---------------------------------------------------------------------------

/// Render the scatter plot, optionally with a horizontal line at `mean`.
pub fn timing_plot(ui: &mut Ui, scatter: &ScatterPlot, mean: Option<f64>, colors: &PlotColors) {
    Plot::new("timing_plot")
        .legend(Legend::default())
        .x_axis_label(scatter.x_label.as_str())
        .y_axis_label(scatter.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let series: PlotPoints = scatter.points.iter().copied().collect();
            let points = Points::new(series)
                .name("time_ms")
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(3.0)
                .color(colors.points);
            plot_ui.points(points);

            if let Some(mean) = mean {
                plot_ui.hline(
                    HLine::new(mean)
                        .name(format!("mean {mean:.4} ms"))
                        .color(colors.mean_line)
                        .width(1.5),
                );
            }
        });
}
