// CourseLens - ui/panels/filters.rs
//
// Facet selectors and sort selector (left sidebar).
// Facet controls are disabled while no courses are loaded; the sort
// selector is always available.

use crate::app::state::AppState;
use crate::core::facets::Facet;
use crate::core::sort::SortMode;
use crate::ui::theme;
use crate::util::constants::FACET_ALL_LABEL;

/// Render the filter and sort controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let has_courses = !state.courses.is_empty();
    ui.add_enabled_ui(has_courses, |ui| {
        for facet in Facet::all() {
            facet_selector(ui, state, *facet);
            ui.add_space(4.0);
        }
        if ui.button("Clear Filters").clicked() {
            state.clear_filters();
        }
    });

    ui.separator();

    ui.label("Sort by:");
    let mut mode = state.sort_mode;
    egui::ComboBox::from_id_salt("sort_mode")
        .selected_text(mode.label())
        .width(theme::COMBO_WIDTH)
        .show_ui(ui, |ui| {
            for m in SortMode::all() {
                ui.selectable_value(&mut mode, *m, m.label());
            }
        });
    if mode != state.sort_mode {
        state.set_sort(mode);
    }
}

fn facet_selector(ui: &mut egui::Ui, state: &mut AppState, facet: Facet) {
    ui.label(format!("{}:", facet.label()));

    let current = state.filter_state.get(facet).unwrap_or_default().to_string();
    let mut chosen = current.clone();
    let selected_text = if current.is_empty() {
        FACET_ALL_LABEL
    } else {
        current.as_str()
    };

    egui::ComboBox::from_id_salt(("facet", facet.label()))
        .selected_text(selected_text)
        .width(theme::COMBO_WIDTH)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut chosen, String::new(), FACET_ALL_LABEL);
            for option in state.facet_options.get(facet) {
                ui.selectable_value(&mut chosen, option.clone(), option.as_str());
            }
        });

    if chosen != current {
        state.set_filter(facet, &chosen);
    }
}
