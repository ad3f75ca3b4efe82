//! Configuration constants and input validation.
//!
//! These are the defaults and bounds the front ends use for array sizes,
//! animation pacing and the benchmark selection policy.

use crate::error::{Error, Result};

/// Smallest array the visualizer accepts
pub const VISUAL_MIN_SIZE: usize = 10;

/// Largest array the visualizer accepts
pub const VISUAL_MAX_SIZE: usize = 200;

/// Default visualizer array size
pub const VISUAL_DEFAULT_SIZE: usize = 50;

/// Smallest array the benchmark accepts
pub const BENCHMARK_MIN_SIZE: usize = 10;

/// Largest array the benchmark accepts
pub const BENCHMARK_MAX_SIZE: usize = 10_000;

/// Default benchmark array size
pub const BENCHMARK_DEFAULT_SIZE: usize = 100;

/// Minimum delay between rendered steps, in seconds
pub const MIN_DELAY_SECS: f64 = 0.01;

/// Maximum delay between rendered steps, in seconds
pub const MAX_DELAY_SECS: f64 = 0.5;

/// Default delay between rendered steps, in seconds
pub const DEFAULT_DELAY_SECS: f64 = 0.05;

/// Sizes strictly above this skip the quadratic algorithms in benchmarks
pub const DEFAULT_QUADRATIC_THRESHOLD: usize = 1000;

/// Lowest generated element value
pub const DEFAULT_VALUE_LOW: u32 = 1;

/// Highest generated element value (inclusive)
pub const DEFAULT_VALUE_HIGH: u32 = 100;

/// Default file name for exported CSV reports
pub const DEFAULT_CSV_FILE: &str = "sorting_analysis.csv";

/// Check a visualizer array size against [`VISUAL_MIN_SIZE`]..=[`VISUAL_MAX_SIZE`].
pub fn validate_visual_size(size: usize) -> Result<usize> {
    check_size(size, VISUAL_MIN_SIZE, VISUAL_MAX_SIZE)
}

/// Check a benchmark array size against [`BENCHMARK_MIN_SIZE`]..=[`BENCHMARK_MAX_SIZE`].
pub fn validate_benchmark_size(size: usize) -> Result<usize> {
    check_size(size, BENCHMARK_MIN_SIZE, BENCHMARK_MAX_SIZE)
}

/// Check an animation delay, in seconds.
pub fn validate_delay(delay: f64) -> Result<f64> {
    // NaN fails both comparisons and is rejected too
    if (MIN_DELAY_SECS..=MAX_DELAY_SECS).contains(&delay) {
        Ok(delay)
    } else {
        Err(Error::DelayOutOfRange {
            delay,
            min: MIN_DELAY_SECS,
            max: MAX_DELAY_SECS,
        })
    }
}

fn check_size(size: usize, min: usize, max: usize) -> Result<usize> {
    if (min..=max).contains(&size) {
        Ok(size)
    } else {
        Err(Error::SizeOutOfRange { size, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_size_bounds() {
        assert_eq!(validate_visual_size(10).unwrap(), 10);
        assert_eq!(validate_visual_size(200).unwrap(), 200);
        assert!(validate_visual_size(9).is_err());
        assert!(validate_visual_size(201).is_err());
    }

    #[test]
    fn test_benchmark_size_bounds() {
        assert_eq!(validate_benchmark_size(10_000).unwrap(), 10_000);
        assert!(matches!(
            validate_benchmark_size(10_001),
            Err(Error::SizeOutOfRange { size: 10_001, min: 10, max: 10_000 })
        ));
    }

    #[test]
    fn test_delay_bounds() {
        assert!(validate_delay(DEFAULT_DELAY_SECS).is_ok());
        assert!(validate_delay(0.01).is_ok());
        assert!(validate_delay(0.5).is_ok());
        assert!(validate_delay(0.0).is_err());
        assert!(validate_delay(0.6).is_err());
        assert!(validate_delay(f64::NAN).is_err());
    }
}
