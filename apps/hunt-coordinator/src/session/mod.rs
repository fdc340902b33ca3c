//! The session state machine and everything it hands out to callers.

pub mod actions;
pub mod controller;
pub mod updates;

pub use actions::{Action, MutatingAction};
pub use controller::SessionController;
pub use updates::{SyncPayload, SyncUpdate, UpdateEffect};
