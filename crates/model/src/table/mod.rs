pub mod report;
pub mod schema;

pub use report::{Footer, ReportTable};
pub use schema::{Column, ColumnKind};
