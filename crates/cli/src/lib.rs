pub mod commands;
pub mod error;
pub mod output;
pub mod pipeline;
