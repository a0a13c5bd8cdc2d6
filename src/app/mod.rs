// CourseLens - app/mod.rs
//
// Application layer: orchestration, state management, course loading.
// Dependencies: core, platform, util.
// Must NOT depend on: ui.

pub mod loader;
pub mod state;
