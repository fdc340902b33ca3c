//! Shared test utilities for the hunt coordinator workspace.
//!
//! Holds the one-time test logging initializer and the proptest
//! configuration knob used by property suites.

pub mod logging;
pub mod proptest_cfg;
