// CourseLens - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, directories, toml, util, core::sort (mode keys).
// Must NOT depend on: app, ui.

pub mod config;
pub mod fs;
