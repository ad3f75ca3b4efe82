//! Step-by-step sorting engine
//!
//! Classic comparison sorts implemented as resumable state machines: instead
//! of only producing a sorted array, each algorithm suspends after every
//! committed mutation so a caller can observe (render, record, or ignore)
//! every intermediate state.
//!
//! - **Bubble Sort**: O(n²), emits after each adjacent swap
//! - **Insertion Sort**: O(n²), emits after each shift and each key placement
//! - **Selection Sort**: O(n²), emits once per pass
//! - **Heap Sort**: O(n log n), emits after each heap swap
//! - **Merge Sort**: O(n log n), emits after each element written by a merge
//!
//! [`run_steps`] yields the states lazily, [`sort_with`] pushes them to a
//! callback, and [`benchmark`] times the algorithms on random data.

pub mod algorithm;
pub mod benchmark;
pub mod bubble_sort;
pub mod config;
pub mod error;
pub mod heap_sort;
pub mod insertion_sort;
pub mod logging;
pub mod merge_sort;
pub mod report;
pub mod selection_sort;
pub mod session;
pub mod stepper;

pub use algorithm::Algorithm;
pub use benchmark::{benchmark, BenchmarkConfig, BenchmarkResult, BenchmarkRunner};
pub use error::{Error, Result};
pub use report::BenchmarkReport;
pub use session::{run_steps, sort_with, SortSession};
pub use stepper::{is_sorted, Stepper};
