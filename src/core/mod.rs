// CourseLens - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, serde, serde_json, csv.
// Must NOT depend on: ui, platform, app, or any filesystem access.

pub mod collate;
pub mod export;
pub mod facets;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod semester;
pub mod sort;
pub mod validate;
