//! Benchmark Report Generator
//!
//! Renders ranked benchmark results as CSV, Markdown or JSON.
//!
//! The CSV export is a two-column table in rank order:
//!
//! ```text
//! Algorithm,Time (s)
//! Merge Sort,0.000412
//! Heap Sort,0.000530
//! ```
//!
//! Times are in seconds rounded to 6 decimal places. [`parse_csv`] reads the
//! same format back, which is what the `csv2md` tool uses.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::benchmark::BenchmarkResult;
use crate::error::{Error, Result};

/// Header line of the CSV export
pub const CSV_HEADER: &str = "Algorithm,Time (s)";

/// Host information recorded with each report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub cpu_cores: usize,
}

impl Default for SystemInfo {
    fn default() -> Self {
        SystemInfo {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpu_cores: std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1),
        }
    }
}

/// Ranked results of one benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// When the report was created (RFC 3339)
    pub timestamp: String,
    /// Elements per generated array
    pub array_size: usize,
    /// Quadratic algorithms were skipped above this size
    pub threshold: usize,
    pub system_info: SystemInfo,
    /// Results, fastest first
    pub results: Vec<BenchmarkResult>,
}

/// One row of a CSV export
#[derive(Debug, Clone, PartialEq)]
pub struct TimingRow {
    pub algorithm: String,
    pub seconds: f64,
}

impl BenchmarkReport {
    /// Create an empty report
    pub fn new(array_size: usize, threshold: usize) -> Self {
        BenchmarkReport {
            timestamp: chrono::Utc::now().to_rfc3339(),
            array_size,
            threshold,
            system_info: SystemInfo::default(),
            results: Vec::new(),
        }
    }

    /// Add a result; results are expected to arrive in rank order
    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    pub fn fastest(&self) -> Option<&BenchmarkResult> {
        self.results.first()
    }

    pub fn timing_rows(&self) -> Vec<TimingRow> {
        self.results
            .iter()
            .map(|r| TimingRow {
                algorithm: r.name().to_string(),
                seconds: r.seconds(),
            })
            .collect()
    }

    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        writeln!(output, "{}", CSV_HEADER).unwrap();
        for row in self.timing_rows() {
            writeln!(output, "{},{:.6}", row.algorithm, row.seconds).unwrap();
        }
        output
    }

    pub fn save_csv(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_csv())?;
        Ok(())
    }

    /// Generate a markdown report with a ranked results table
    pub fn to_markdown_table(&self) -> String {
        let mut output = String::new();

        writeln!(output, "# Sorting Algorithm Time Comparison").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Timestamp:** {}", self.timestamp).unwrap();
        writeln!(output, "**Array size:** {}", self.array_size).unwrap();
        writeln!(
            output,
            "**System:** {} / {} ({} cores)",
            self.system_info.os, self.system_info.arch, self.system_info.cpu_cores
        )
        .unwrap();
        writeln!(output).unwrap();

        writeln!(output, "| Rank | Algorithm | Time (s) | Time (ms) | Steps | Verified |").unwrap();
        writeln!(output, "|------|-----------|----------|-----------|-------|----------|").unwrap();
        for (rank, result) in self.results.iter().enumerate() {
            writeln!(
                output,
                "| {} | {} | {:.6} | {:.3} | {} | {} |",
                rank + 1,
                result.name(),
                result.seconds(),
                result.seconds() * 1000.0,
                result.steps,
                if result.verified { "yes" } else { "NO" }
            )
            .unwrap();
        }

        if self.array_size > self.threshold {
            writeln!(output).unwrap();
            writeln!(
                output,
                "*Bubble Sort and Insertion Sort skipped for arrays above {} elements.*",
                self.threshold
            )
            .unwrap();
        }

        output
    }

    pub fn save_markdown(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_markdown_table())?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Parse a CSV export back into timing rows.
pub fn parse_csv(content: &str) -> Result<Vec<TimingRow>> {
    let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());

    match lines.next() {
        Some(CSV_HEADER) => {}
        Some(other) => {
            return Err(Error::InvalidReport(format!(
                "expected header '{}', found '{}'",
                CSV_HEADER, other
            )))
        }
        None => return Err(Error::InvalidReport("empty report".to_string())),
    }

    lines
        .map(|line| {
            let (algorithm, seconds) = line
                .rsplit_once(',')
                .ok_or_else(|| Error::InvalidReport(format!("missing time column: '{}'", line)))?;
            let seconds = seconds
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::InvalidReport(format!("invalid time: '{}'", seconds)))?;
            Ok(TimingRow {
                algorithm: algorithm.trim().to_string(),
                seconds,
            })
        })
        .collect()
}

/// Render parsed timing rows as a markdown table
pub fn timings_to_markdown(rows: &[TimingRow]) -> String {
    let mut output = String::new();

    writeln!(output, "| Rank | Algorithm | Time (s) | Time (ms) |").unwrap();
    writeln!(output, "|------|-----------|----------|-----------|").unwrap();
    for (rank, row) in rows.iter().enumerate() {
        writeln!(
            output,
            "| {} | {} | {:.6} | {:.3} |",
            rank + 1,
            row.algorithm,
            row.seconds,
            row.seconds * 1000.0
        )
        .unwrap();
    }

    output
}
