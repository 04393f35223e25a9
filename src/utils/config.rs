//! Configuration and constants for the CLI.

/// Binary name as typed by users
pub const CLI_NAME: &str = "websketch";

/// Package name stamped into bundles (`<name>@<version>`)
pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// Package version from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current bundle schema version
pub const BUNDLE_SCHEMA_VERSION: &str = "0.1";

/// Capture schema versions this build can read
pub const SUPPORTED_CAPTURE_VERSIONS: &[&str] = &["0.1"];

/// Deepest array/object nesting accepted in a capture file
pub const MAX_JSON_NESTING: usize = 512;

// Render grid defaults and clamps
pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 24;
pub const LLM_WIDTH: usize = 100;
pub const LLM_HEIGHT: usize = 40;
pub const MIN_GRID_WIDTH: usize = 4;
pub const MAX_GRID_WIDTH: usize = 1000;
pub const MIN_GRID_HEIGHT: usize = 2;
pub const MAX_GRID_HEIGHT: usize = 500;

/// Minimum similarity for two nodes to be paired across captures
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.5;

/// Geometry deltas at or below this (in viewport units) are not reported
pub const GEOMETRY_EPSILON: f64 = 0.001;

/// Bbox quantisation used by fingerprints (1/100 of the viewport)
pub const FINGERPRINT_QUANTUM: f64 = 100.0;

/// Tool stamp written into bundles
pub fn tool_stamp() -> String {
    format!("{}@{}", TOOL_NAME, VERSION)
}
