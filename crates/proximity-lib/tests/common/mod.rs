//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use proximity_lib::{NoopSink, ProximityFilter, ReferenceConfig};

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to a named fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Filter around the default reference location that discards diagnostics.
#[allow(dead_code)]
pub fn office_filter() -> ProximityFilter<NoopSink> {
    ReferenceConfig::default()
        .into_filter(NoopSink)
        .expect("default configuration is valid")
}

/// User ids expected within 100 km of the office in `customers.txt`.
#[allow(dead_code)]
pub const NEARBY_FIXTURE_IDS: [i64; 16] = [
    4, 5, 6, 8, 11, 12, 13, 15, 17, 23, 24, 26, 29, 30, 31, 39,
];
