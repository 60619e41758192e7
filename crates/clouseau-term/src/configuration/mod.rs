//! Configuration management for the viewer and the CLI.
//!
//! Values are layered: built-in defaults, then the TOML config file, then
//! command-line arguments (which also carry environment variables through
//! clap).

mod config;

pub use config::*;
