pub mod service;

pub use service::{PollIntervals, ServiceConfig};
