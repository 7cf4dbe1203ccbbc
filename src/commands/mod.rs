//! Command implementations

pub mod simple;

pub use simple::{SimpleConfig, run_simple};
