//! The `clou` command-line shell.
//!
//! `clou chat` opens the terminal viewer from `clouseau-term`. The `session`,
//! `search` and `config` subcommands print plain-text panels so they can be
//! piped and scripted.

pub mod cli;
pub mod commands;
pub mod panels;
