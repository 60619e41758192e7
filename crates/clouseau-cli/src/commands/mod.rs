//! One module per `clou` subcommand.

pub mod chat;
pub mod config;
pub mod search;
pub mod session;
