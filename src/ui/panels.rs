use eframe::egui::{self, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title and the toolbar above the plot.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new(&state.scatter.title).strong());
    });

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!("{} points", state.scatter.len()));

        ui.separator();

        match &state.summary {
            Some(summary) => {
                ui.label(format!(
                    "mean {:.4} ms, variance {:.4} ms²",
                    summary.mean, summary.variance
                ));
            }
            None => {
                ui.label(RichText::new("no samples").weak());
            }
        }

        ui.separator();

        if ui
            .add_enabled(
                state.summary.is_some(),
                egui::SelectableLabel::new(state.show_mean, "Mean line"),
            )
            .clicked()
        {
            state.toggle_mean();
        }
    });
}
