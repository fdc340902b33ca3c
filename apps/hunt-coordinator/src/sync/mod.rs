//! Background synchronisation with the game service.

pub mod polling;
pub mod task;

pub use polling::{spawn_poller, PollerHandle};
pub use task::spawn_named_task;
