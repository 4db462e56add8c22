pub mod api;
pub mod catalog;
pub mod error;
pub mod grading;
pub mod model;
