//! Course browsing core: a saved-course list with explicit ordering, rating
//! aggregation and grading pie-chart geometry over an in-memory catalog.

pub mod cli;
pub mod comments;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod rating;
pub mod report;
pub mod saved;
