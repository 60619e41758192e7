mod action;
mod event;
mod fetch;
mod focus;

pub use action::*;
pub use event::*;
pub use fetch::*;
pub use focus::*;
