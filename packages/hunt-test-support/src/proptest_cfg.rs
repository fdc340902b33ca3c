//! Case count for property suites.
//!
//! Increase locally with `PROPTEST_CASES=1000 cargo test`.

/// Number of cases a property suite should run.
///
/// Reads `PROPTEST_CASES`, falling back to a low default that keeps CI fast.
pub fn cases() -> u32 {
    std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64)
}
