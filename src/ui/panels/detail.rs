// CourseLens - ui/panels/detail.rs
//
// Detail pane for the selected course.

use crate::app::state::AppState;
use crate::util::constants;

/// Render the detail pane (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let copied = {
        let Some(course) = state.selected_course() else {
            ui.centered_and_justified(|ui| {
                ui.label(constants::MSG_NO_SELECTION);
            });
            return;
        };

        let mut copy_clicked = false;
        ui.horizontal(|ui| {
            ui.heading(course.id.as_str());
            if ui.small_button("Copy Details").clicked() {
                copy_clicked = true;
            }
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("detail_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                egui::Grid::new("detail_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .striped(true)
                    .show(ui, |ui| {
                        for (label, value) in course.detail_fields() {
                            ui.label(egui::RichText::new(format!("{label}:")).strong());
                            ui.add(egui::Label::new(value).wrap());
                            ui.end_row();
                        }
                    });
            });

        copy_clicked.then(|| course.detail_report())
    };

    if let Some(report) = copied {
        ui.ctx().copy_text(report);
        state.status_message = "Copied course details to clipboard.".to_string();
    }
}
