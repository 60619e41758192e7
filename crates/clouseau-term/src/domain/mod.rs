//! Core domain logic for the viewer.
//!
//! This module contains the state machines and data models that drive the
//! terminal UI, independent of the terminal backend and the HTTP transport.

pub mod models;
pub mod services;
