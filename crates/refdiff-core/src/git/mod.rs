//! Git operations module

pub mod diff;
pub mod runner;

pub use runner::GitRunner;
