//! Turns vendor payloads into detail rows.

pub mod cloud;
pub mod green;

pub use cloud::{PatternOccurrence, extract_cloud_patterns};
pub use green::extract_green_rows;
