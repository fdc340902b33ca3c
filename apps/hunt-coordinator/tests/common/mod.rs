#![allow(dead_code)]

// tests/common/mod.rs
use std::time::Duration;

use hunt_coordinator::PollIntervals;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    hunt_test_support::logging::init();
}

/// Poll intervals far enough apart that the two pollers never tick together.
pub fn test_intervals() -> PollIntervals {
    PollIntervals {
        status: Duration::from_millis(100),
        game_over: Duration::from_millis(150),
    }
}

/// Pollers that never fire within a test.
pub fn quiet_intervals() -> PollIntervals {
    PollIntervals {
        status: Duration::from_secs(3600),
        game_over: Duration::from_secs(3600),
    }
}
