//! CLI commands

pub mod migrate;
pub mod serve;

pub use serve::ServeArgs;
