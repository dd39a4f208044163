pub mod emitter;
pub mod error;
pub mod layout;
pub mod naming;
pub mod xlsx;

pub use emitter::{EmittedReport, ReportEmitter};
pub use error::ReportError;
pub use layout::SheetLayout;
pub use naming::{OutputTarget, ReportCategory};
