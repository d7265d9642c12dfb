//! Library components of the sheetshift CLI.

pub mod logging;
pub mod render;
