pub mod aggregate;
pub mod error;
pub mod extract;
pub mod filter;

pub use error::ExtractError;
