//! Terminal viewer for stored LLM sessions.
//!
//! This crate renders the session browser and chat view of Clouseau on top of
//! ratatui. State lives in [`domain::services::AppState`], network calls run in
//! a background worker and come back as tagged events, so a slow response can
//! never overwrite the result of a newer selection.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, Event, FetchRequest, Focus};
pub use domain::services::{AppState, AppStateProps, Resource, Selection};
pub use infrastructure::clients::ApiClientManager;
