// CourseLens - ui/panels/message.rs
//
// Message region: load errors, skipped-entry notices, view update failures.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the current message, if any, with a dismiss button.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(message) = &state.message else {
        return;
    };

    let mut dismiss = false;
    ui.horizontal(|ui| {
        ui.colored_label(
            theme::message_colour(message.kind, state.dark_mode),
            message.text.as_str(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("\u{2715}").on_hover_text("Dismiss").clicked() {
                dismiss = true;
            }
        });
    });

    if dismiss {
        state.message = None;
    }
}
