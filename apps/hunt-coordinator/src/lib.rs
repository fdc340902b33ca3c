#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod service;
pub mod session;
pub mod sync;
pub mod telemetry;

// Re-exports for public API
pub use config::{PollIntervals, ServiceConfig};
pub use error::{AppError, ErrorKind};
pub use errors::ErrorCode;
pub use service::{GameService, HttpGameService};
pub use session::{Action, MutatingAction, SessionController, UpdateEffect};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    hunt_test_support::logging::init();
}
