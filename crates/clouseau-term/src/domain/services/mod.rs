//! Domain services of the viewer.
//!
//! [`AppState`] owns the selection and the three resources. The
//! [`actions::ActionsService`] worker performs the network calls and the
//! [`events::EventsService`] merges terminal input with worker results.

pub mod actions;
pub mod events;
mod app_state;
mod resource;
mod selection;
#[cfg(test)]
pub(crate) mod test_support;

pub use app_state::*;
pub use resource::*;
pub use selection::*;
