pub mod lenient;
pub mod raw;
pub mod row;

/// Sentinel for text fields the vendor payload leaves out.
pub const NOT_AVAILABLE: &str = "N/A";
