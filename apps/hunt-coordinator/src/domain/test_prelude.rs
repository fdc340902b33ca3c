use proptest::prelude::ProptestConfig;

/// Shared proptest configuration for domain property suites.
pub fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: hunt_test_support::proptest_cfg::cases(),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}
