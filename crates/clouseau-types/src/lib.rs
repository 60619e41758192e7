//! Type definitions shared by the Clouseau viewer and CLI.
//!
//! The session API speaks a wire format with snake_case fields, integer ids and
//! nullable optionals. Everything above the client works on view-model records
//! with string ids, absent optionals and parsed timestamps. The [`transforms`]
//! module is the only place where one becomes the other.
//!
//! ## Example
//!
//! ```rust
//! use clouseau_types::{transform_session, ApiSession};
//!
//! let wire: ApiSession = serde_json::from_str(
//!     r#"{"id": 7, "name": "debug", "description": null,
//!         "created_at": "2024-01-15T10:30:00Z", "updated_at": "2024-01-15T10:30:00Z"}"#,
//! )
//! .unwrap();
//!
//! let session = transform_session(wire);
//! assert_eq!(session.id, "7");
//! assert!(session.description.is_none());
//! ```

pub mod api;
pub mod models;
pub mod transforms;

pub use api::*;
pub use models::*;
pub use transforms::*;
