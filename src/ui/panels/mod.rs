// CourseLens - ui/panels/mod.rs

pub mod about;
pub mod course_list;
pub mod detail;
pub mod filters;
pub mod message;
