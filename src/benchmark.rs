//! Benchmark runner: times each algorithm on random data and ranks them.
//!
//! Every algorithm is timed on its own freshly generated array, so two
//! results are never measured on identical input. Individual times are only
//! meaningful in aggregate; a single run says little about the pairwise
//! ordering of two algorithms with similar cost.
//!
//! Large arrays skip the quadratic algorithms (see [`select_algorithms`]).
//! Runs are strictly sequential so they do not compete for the CPU.

use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::algorithm::Algorithm;
use crate::config::{DEFAULT_QUADRATIC_THRESHOLD, DEFAULT_VALUE_HIGH, DEFAULT_VALUE_LOW};
use crate::error::{Error, Result};
use crate::report::BenchmarkReport;
use crate::session::run_steps;
use crate::stepper::is_sorted;

/// Benchmark settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    /// Sizes strictly above this skip the quadratic algorithms
    pub threshold: usize,
    /// Range random element values are drawn from
    pub value_range: RangeInclusive<u32>,
    /// Fixed RNG seed for reproducible inputs; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_QUADRATIC_THRESHOLD,
            value_range: DEFAULT_VALUE_LOW..=DEFAULT_VALUE_HIGH,
            seed: None,
        }
    }
}

impl BenchmarkConfig {
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_value_range(mut self, low: u32, high: u32) -> Result<Self> {
        if low > high {
            return Err(Error::EmptyValueRange { low, high });
        }
        self.value_range = low..=high;
        Ok(self)
    }
}

/// Timing of one algorithm on one array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    pub elapsed: Duration,
    /// Checkpoints the algorithm passed while sorting
    pub steps: usize,
    /// Whether the output was checked to be sorted
    pub verified: bool,
}

impl BenchmarkResult {
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Keep the algorithms worth running at `size`, in declaration order.
///
/// Above `threshold` the quadratic algorithms (bubble and insertion) are
/// dropped to keep run time bounded. Duplicates are removed.
pub fn select_algorithms(requested: &[Algorithm], size: usize, threshold: usize) -> Vec<Algorithm> {
    let mut selected: Vec<Algorithm> = requested
        .iter()
        .copied()
        .filter(|a| size <= threshold || !a.is_quadratic())
        .collect();
    selected.sort();
    selected.dedup();
    selected
}

/// Order results fastest first; equal times keep declaration order.
pub fn rank(results: &mut [BenchmarkResult]) {
    results.sort_by(|a, b| {
        a.elapsed
            .cmp(&b.elapsed)
            .then_with(|| a.algorithm.cmp(&b.algorithm))
    });
}

/// Runs benchmarks with its own random number generator.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    rng: StdRng,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        let (low, high) = (*config.value_range.start(), *config.value_range.end());
        if low > high {
            return Err(Error::EmptyValueRange { low, high });
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Generate a fresh random array of `size` elements.
    pub fn random_array(&mut self, size: usize) -> Vec<u32> {
        let range = self.config.value_range.clone();
        (0..size).map(|_| self.rng.gen_range(range.clone())).collect()
    }

    /// Time one algorithm on a fresh random array.
    pub fn run_one(&mut self, algorithm: Algorithm, size: usize) -> BenchmarkResult {
        let data = self.random_array(size);

        let start = Instant::now();
        let mut session = run_steps(algorithm, data);
        let steps = session.drain();
        let elapsed = start.elapsed();

        let verified = is_sorted(session.data());
        if !verified {
            warn!(algorithm = %algorithm, size, "benchmark output failed verification");
        }
        info!(
            algorithm = %algorithm,
            size,
            steps,
            elapsed_us = elapsed.as_micros() as u64,
            "benchmark run complete"
        );

        BenchmarkResult {
            algorithm,
            elapsed,
            steps,
            verified,
        }
    }

    /// Time every selected algorithm at `size` and rank the results.
    pub fn run(&mut self, algorithms: &[Algorithm], size: usize) -> Vec<BenchmarkResult> {
        let selected = select_algorithms(algorithms, size, self.config.threshold);
        let skipped: Vec<&str> = algorithms
            .iter()
            .filter(|a| !selected.contains(a))
            .map(|a| a.name())
            .collect();
        if !skipped.is_empty() {
            info!(
                size,
                threshold = self.config.threshold,
                skipped = ?skipped,
                "skipping quadratic algorithms for large array"
            );
        }

        let mut results: Vec<BenchmarkResult> = selected
            .into_iter()
            .map(|algorithm| self.run_one(algorithm, size))
            .collect();
        rank(&mut results);
        results
    }

    /// Run the benchmark and wrap the ranked results in a report.
    pub fn report(&mut self, algorithms: &[Algorithm], size: usize) -> BenchmarkReport {
        let mut report = BenchmarkReport::new(size, self.config.threshold);
        for result in self.run(algorithms, size) {
            report.add_result(result);
        }
        report
    }
}

/// Time `algorithms` on arrays of `size` elements, fastest first.
pub fn benchmark(
    algorithms: &[Algorithm],
    size: usize,
    config: &BenchmarkConfig,
) -> Result<Vec<BenchmarkResult>> {
    Ok(BenchmarkRunner::new(config.clone())?.run(algorithms, size))
}
