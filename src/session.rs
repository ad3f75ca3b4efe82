//! Sort sessions: lazy, step-by-step sorting of an owned array.
//!
//! A [`SortSession`] pairs an algorithm with the array it is sorting and the
//! algorithm's resumable state. Pulling a step runs the algorithm up to its
//! next checkpoint and then suspends it:
//!
//! ```
//! use step_sort::{run_steps, Algorithm};
//!
//! let mut session = run_steps(Algorithm::Bubble, vec![5, 3, 8, 1]);
//! assert_eq!(session.next_step(), Some(&[3, 5, 8, 1][..]));
//! assert_eq!(session.next_step(), Some(&[3, 5, 1, 8][..]));
//! session.drain();
//! assert_eq!(session.into_inner(), vec![1, 3, 5, 8]);
//! ```
//!
//! Abandoning a session early is just dropping it (or taking the partially
//! sorted array back with [`SortSession::into_inner`]).

use std::iter::FusedIterator;

use tracing::debug;

use crate::algorithm::Algorithm;
use crate::bubble_sort::BubbleSort;
use crate::heap_sort::HeapSort;
use crate::insertion_sort::InsertionSort;
use crate::merge_sort::MergeSort;
use crate::selection_sort::SelectionSort;
use crate::stepper::Stepper;

/// A stepper for any of the supported algorithms.
#[derive(Debug, Clone)]
pub enum Engine<T> {
    Bubble(BubbleSort),
    Insertion(InsertionSort<T>),
    Selection(SelectionSort),
    Heap(HeapSort),
    Merge(MergeSort<T>),
}

impl<T> Engine<T> {
    /// Create the stepper for `algorithm` over a slice of `len` elements.
    pub fn new(algorithm: Algorithm, len: usize) -> Self {
        match algorithm {
            Algorithm::Bubble => Self::Bubble(BubbleSort::new()),
            Algorithm::Insertion => Self::Insertion(InsertionSort::new()),
            Algorithm::Selection => Self::Selection(SelectionSort::new()),
            Algorithm::Heap => Self::Heap(HeapSort::new(len)),
            Algorithm::Merge => Self::Merge(MergeSort::new(len)),
        }
    }
}

impl<T: PartialOrd + Clone> Stepper<T> for Engine<T> {
    #[inline]
    fn step(&mut self, data: &mut [T]) -> bool {
        match self {
            Self::Bubble(s) => s.step(data),
            Self::Insertion(s) => s.step(data),
            Self::Selection(s) => s.step(data),
            Self::Heap(s) => s.step(data),
            Self::Merge(s) => s.step(data),
        }
    }
}

/// An in-progress sort of an owned array.
///
/// The session is not restartable: once exhausted it yields nothing more.
#[derive(Debug, Clone)]
pub struct SortSession<T> {
    algorithm: Algorithm,
    data: Vec<T>,
    engine: Engine<T>,
    steps: usize,
    finished: bool,
}

/// Start a step-by-step sort of `data` with `algorithm`.
pub fn run_steps<T: PartialOrd + Clone>(algorithm: Algorithm, data: Vec<T>) -> SortSession<T> {
    SortSession::new(algorithm, data)
}

impl<T: PartialOrd + Clone> SortSession<T> {
    pub fn new(algorithm: Algorithm, data: Vec<T>) -> Self {
        debug!(algorithm = %algorithm, len = data.len(), "sort session created");
        let engine = Engine::new(algorithm, data.len());
        Self {
            algorithm,
            data,
            engine,
            steps: 0,
            finished: false,
        }
    }

    /// Advance to the next checkpoint and borrow the array state there.
    ///
    /// The returned slice is valid until the session is advanced again.
    /// Returns `None` once the array is sorted.
    pub fn next_step(&mut self) -> Option<&[T]> {
        if self.finished {
            return None;
        }
        if self.engine.step(&mut self.data) {
            self.steps += 1;
            Some(&self.data)
        } else {
            self.finish();
            None
        }
    }

    /// Run to completion without observing steps.
    ///
    /// Returns the number of steps passed by this call.
    pub fn drain(&mut self) -> usize {
        if self.finished {
            return 0;
        }
        let drained = self.engine.run(&mut self.data);
        self.steps += drained;
        self.finish();
        drained
    }

    fn finish(&mut self) {
        self.finished = true;
        debug!(algorithm = %self.algorithm, steps = self.steps, "sort session finished");
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Steps emitted so far.
    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current array state.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Give the array back, sorted or not.
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

/// Yields an owned snapshot of the array at every step.
impl<T: PartialOrd + Clone> Iterator for SortSession<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_step().map(<[T]>::to_vec)
    }
}

impl<T: PartialOrd + Clone> FusedIterator for SortSession<T> {}

/// Sort `data` in place, calling `on_step` with the array after every step.
///
/// Returns the number of steps emitted.
pub fn sort_with<T, F>(algorithm: Algorithm, data: &mut [T], mut on_step: F) -> usize
where
    T: PartialOrd + Clone,
    F: FnMut(&[T]),
{
    let mut engine = Engine::new(algorithm, data.len());
    let mut steps = 0;
    while engine.step(data) {
        steps += 1;
        on_step(&*data);
    }
    steps
}
