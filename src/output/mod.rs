//! Terminal output formatting

pub mod formatters;

pub use formatters::{colored_tiles, keyboard_lines, row_to_emoji};
