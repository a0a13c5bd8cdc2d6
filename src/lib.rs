// CourseLens - lib.rs
//
// Library entry point. Everything except the eframe wiring in `gui.rs`
// lives here so integration tests can drive loading, filtering and
// sorting without a window.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
