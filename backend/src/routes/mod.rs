pub mod analytics;
pub mod catalog;
pub mod courses;
pub mod tasks;
pub mod timetable;
