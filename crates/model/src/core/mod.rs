pub mod cell;
pub mod effort;
pub mod value;
