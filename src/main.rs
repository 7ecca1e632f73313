mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use app::TimingViewerApp;
use eframe::egui;
use data::model::TimingDataset;
use state::AppState;

/// Load failures surface once, as the `Error:` report of `main`.
fn load_input(path: &Path) -> Result<TimingDataset> {
    data::loader::load_file(path).with_context(|| format!("loading {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();

    let path = Path::new(config::INPUT_CSV);
    let dataset = load_input(path)?;
    log::info!("Loaded {} samples from {}", dataset.len(), path.display());

    let (x, y) = dataset.columns();
    data::echo::echo_columns(std::io::stdout().lock(), &x, &y).context("writing to stdout")?;

    let state = AppState::from_dataset(&dataset);
    if state.scatter.is_empty() {
        log::warn!("{} has no samples, the plot will be empty", path.display());
    }
    if let Some(summary) = &state.summary {
        log::info!("{summary}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    // Blocks until the window is closed.
    eframe::run_native(
        ui::plot::TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(TimingViewerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failure_is_one_error_chain() {
        let err = load_input(Path::new("no/such/timings.csv")).unwrap_err();
        let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0], "loading no/such/timings.csv");
        assert_eq!(chain[1], "cannot read no/such/timings.csv");
    }
}
