// CourseLens - ui/panels/course_list.rs
//
// Virtual-scrolling course list. One row per visible course, labelled by id;
// rows carrying the selected id are highlighted. A click only changes the
// selection; the view is not recomputed.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the course list panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Courses");
    ui.separator();

    let count = state.view.len();
    if count == 0 {
        ui.centered_and_justified(|ui| {
            ui.label(constants::MSG_EMPTY_LIST);
        });
        return;
    }

    // Applied after show_rows so `state` is not mutably borrowed while rows
    // still hold references into `state.courses`.
    let mut clicked: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("course_list")
        .auto_shrink([false; 2])
        .show_rows(ui, theme::ROW_HEIGHT, count, |ui, row_range| {
            for display_idx in row_range {
                let Some(course) = state
                    .view
                    .get(display_idx)
                    .and_then(|&idx| state.courses.get(idx))
                else {
                    continue;
                };

                let response = ui
                    .selectable_label(state.is_selected(course), course.id.as_str())
                    .on_hover_text(course.summary());
                if response.clicked() {
                    clicked = Some(course.id.clone());
                }
            }
        });

    if let Some(id) = clicked {
        state.select(&id);
    }
}
