//! Application layer: the terminal UI loop, the view renderers and the
//! display formatting shared by the viewer and the CLI.

pub mod format;
pub mod ui;
pub mod views;
