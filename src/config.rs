//! Environment-driven tuning knobs, parsed once per process.

use std::path::PathBuf;
use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static PARALLEL_MIN_UNITS: OnceLock<usize> = OnceLock::new();

/// Storage size (in units) from which the census runs on the rayon pool.
///
/// `GRID_PARALLEL_MIN_UNITS`, default 65536. A value of 0 is treated as 1.
pub fn parallel_min_units() -> usize {
    *PARALLEL_MIN_UNITS.get_or_init(|| parse_env_usize("GRID_PARALLEL_MIN_UNITS", 1 << 16).max(1))
}

/// Default input directory for batch runs (`GRID_INPUT_ROOT`, default `data`)
pub fn input_root_from_env() -> PathBuf {
    std::env::var("GRID_INPUT_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

/// Batch file limit from `GRID_BATCH_LIMIT`.
///
/// Returns `None` (every file) when unset, unparsable or `0`.
pub fn batch_limit_from_env() -> Option<usize> {
    match parse_env_usize("GRID_BATCH_LIMIT", 0) {
        0 => None,
        v => Some(v),
    }
}
