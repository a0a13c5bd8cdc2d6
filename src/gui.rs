// CourseLens - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and manages the load lifecycle.

use crate::app::loader::LoadManager;
use crate::app::state::AppState;
use crate::ui;
use crate::util::constants;
use crate::util::error::{CourseLensError, Result};
use std::path::Path;

/// Export formats offered by File > Export.
#[derive(Debug, Clone, Copy)]
enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// The CourseLens application.
pub struct CourseLensApp {
    pub state: AppState,
    pub load_manager: LoadManager,
    style_applied: bool,
}

impl CourseLensApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            load_manager: LoadManager::new(),
            style_applied: false,
        }
    }

    /// Hand a chosen path to the state; start a background read if accepted.
    fn open(&mut self, path: Option<std::path::PathBuf>) {
        if let Some(request) = self.state.begin_load(path) {
            self.load_manager
                .start_load(request, self.state.max_file_size);
        }
    }

    fn export(&mut self, format: ExportFormat) {
        let file_name = format!("courses.{}", format.extension());
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(format.label(), &[format.extension()])
            .set_file_name(file_name)
            .save_file()
        else {
            return;
        };

        self.state.status_message = match self.write_export(format, &dest) {
            Ok(n) => {
                tracing::info!(file = %dest.display(), courses = n, "Export complete");
                format!("Exported {n} course(s) to {}.", format.label())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Export failed");
                format!("{} export failed: {e}", format.label())
            }
        };
    }

    fn write_export(&self, format: ExportFormat, dest: &Path) -> Result<usize> {
        let file = std::fs::File::create(dest).map_err(|e| CourseLensError::Io {
            path: dest.to_path_buf(),
            operation: "create export file",
            source: e,
        })?;
        let visible = self.state.visible_courses();
        let written = match format {
            ExportFormat::Csv => crate::core::export::export_csv(&visible, file, dest)?,
            ExportFormat::Json => crate::core::export::export_json(&visible, file, dest)?,
        };
        Ok(written)
    }
}

impl eframe::App for CourseLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_applied {
            ui::theme::apply(ctx, self.state.dark_mode, self.state.font_size);
            self.style_applied = true;
        }

        // Path supplied on the command line (or queued by a previous frame).
        if let Some(path) = self.state.pending_load.take() {
            self.open(Some(path));
        }

        // Apply finished loads. Bounded per frame so a burst cannot stall
        // the UI thread.
        for completion in self
            .load_manager
            .poll_completions(constants::MAX_LOAD_MESSAGES_PER_FRAME)
        {
            self.state.finish_load(completion);
        }
        if self.state.loads_in_flight > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Course File\u{2026}").clicked() {
                        let picked = rfd::FileDialog::new()
                            .add_filter("Course files", &[constants::COURSE_FILE_EXTENSION])
                            .add_filter("All files", &["*"])
                            .pick_file();
                        self.open(picked);
                        ui.close_menu();
                    }
                    ui.separator();
                    // Export sub-menu -- enabled only when courses are visible
                    let has_view = !self.state.view.is_empty();
                    ui.add_enabled_ui(has_view, |ui| {
                        ui.menu_button("Export", |ui| {
                            if ui.button("Export CSV...").clicked() {
                                self.export(ExportFormat::Csv);
                                ui.close_menu();
                            }
                            if ui.button("Export JSON...").clicked() {
                                self.export(ExportFormat::Json);
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    let has_selection = self.state.selected_course().is_some();
                    ui.add_enabled_ui(has_selection, |ui| {
                        if ui.button("Copy Details").clicked() {
                            if let Some(course) = self.state.selected_course() {
                                ctx.copy_text(course.detail_report());
                                self.state.status_message =
                                    "Copied course details to clipboard.".to_string();
                            }
                            ui.close_menu();
                        }
                    });
                    let has_filters = !self.state.filter_state.is_empty();
                    ui.add_enabled_ui(has_filters, |ui| {
                        if ui.button("Clear Filters").clicked() {
                            self.state.clear_filters();
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.checkbox(&mut self.state.dark_mode, "Dark mode").changed() {
                        self.style_applied = false;
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.loads_in_flight > 0 {
                    ui.spinner();
                }
                ui.label(&self.state.status_message);
                if self.state.debug_mode {
                    ui.separator();
                    ui.label(egui::RichText::new("DEBUG").small().weak());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(at) = self.state.loaded_at {
                        ui.label(format!("Loaded {}", at.format("%H:%M:%S")));
                        ui.separator();
                    }
                    let total = self.state.courses.len();
                    if total > 0 {
                        let visible = self.state.view.len();
                        ui.label(format!("{visible}/{total} courses"));
                    }
                });
            });
        });

        // Message region
        if self.state.message.is_some() {
            egui::TopBottomPanel::top("message_region").show(ctx, |ui| {
                ui::panels::message::render(ui, &mut self.state);
            });
        }

        // Left sidebar: current file plus filter and sort controls.
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                let file_label = self
                    .state
                    .file_name
                    .as_deref()
                    .unwrap_or("No file loaded");
                ui.label(egui::RichText::new(file_label).strong())
                    .on_hover_text("Current course file");
                if ui.button("Open Course File\u{2026}").clicked() {
                    let picked = rfd::FileDialog::new()
                        .add_filter("Course files", &[constants::COURSE_FILE_EXTENSION])
                        .add_filter("All files", &["*"])
                        .pick_file();
                    self.open(picked);
                }
                ui.separator();

                egui::ScrollArea::vertical()
                    .id_salt("sidebar_filters")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui::panels::filters::render(ui, &mut self.state);
                    });
            });

        // Course list
        egui::SidePanel::left("course_list_panel")
            .default_width(ui::theme::LIST_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui::panels::course_list::render(ui, &mut self.state);
            });

        // Central panel (detail)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::detail::render(ui, &mut self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);
    }
}
