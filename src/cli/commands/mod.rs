//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a
//! specific CLI command.

pub mod build;
pub mod config;
pub mod delete;
pub mod search;
pub mod show;

// Re-export argument types for use in mod.rs
pub use build::BuildArgs;
pub use config::ConfigArgs;
pub use delete::DeleteArgs;
pub use search::SearchArgs;
pub use show::ShowArgs;
