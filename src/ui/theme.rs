// CourseLens - ui/theme.rs
//
// Colour scheme, message colour mapping, and layout constants.
// No dependencies on business logic beyond the message kind.

use crate::app::state::MessageKind;
use egui::Color32;

/// Foreground colour for the message region.
pub fn message_colour(kind: MessageKind, dark_mode: bool) -> Color32 {
    match (kind, dark_mode) {
        (MessageKind::Error, true) => Color32::from_rgb(248, 113, 113), // Red 400
        (MessageKind::Error, false) => Color32::from_rgb(185, 28, 28),  // Red 700
        (MessageKind::Info, true) => Color32::from_rgb(147, 197, 253),  // Blue 300
        (MessageKind::Info, false) => Color32::from_rgb(29, 78, 216),   // Blue 700
    }
}

/// Apply the visual theme and body font size to the context.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(font_size),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::proportional(font_size),
        );
    });
}

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 240.0;
pub const LIST_WIDTH: f32 = 220.0;
pub const ROW_HEIGHT: f32 = 22.0;
pub const COMBO_WIDTH: f32 = 200.0;
