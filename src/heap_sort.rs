//! Heap Sort Implementation
//!
//! Builds a max-heap in place, then repeatedly swaps the root to the end of
//! the shrinking heap and restores the heap property.
//!
//! Restoring the heap is a recursive sift-down: swap a node with its larger
//! child, emit a checkpoint, then continue into the child's subtree. The
//! recursive call is the last thing the procedure does, so the pending
//! recursion is held as a single [`Sift`] cursor instead of a call stack.
//! Checkpoints are emitted after every sift swap (build and extraction
//! phases) and after every root-to-end swap.
//!
//! Complexity: O(n log n) comparisons, O(1) extra space. Not stable.

use crate::stepper::Stepper;

/// Pending sift-down of `node` within the first `len` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sift {
    len: usize,
    node: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Heapifying internal nodes from `next - 1` down to the root
    Build { next: usize },
    /// The heap occupies `..end`; everything after is sorted
    Extract { end: usize },
    Done,
}

/// Resumable heap sort.
#[derive(Debug, Clone)]
pub struct HeapSort {
    phase: Phase,
    sift: Option<Sift>,
}

impl HeapSort {
    /// Create a heap sort for a slice of `len` elements.
    pub fn new(len: usize) -> Self {
        Self {
            phase: Phase::Build { next: len / 2 },
            sift: None,
        }
    }
}

/// Index of the largest among `node` and its children inside the heap.
fn largest_of<T: PartialOrd>(data: &[T], len: usize, node: usize) -> usize {
    let left = 2 * node + 1;
    let right = left + 1;
    let mut largest = node;
    if left < len && data[largest] < data[left] {
        largest = left;
    }
    if right < len && data[largest] < data[right] {
        largest = right;
    }
    largest
}

impl<T: PartialOrd> Stepper<T> for HeapSort {
    fn step(&mut self, data: &mut [T]) -> bool {
        loop {
            if let Some(Sift { len, node }) = self.sift.take() {
                let largest = largest_of(data, len, node);
                if largest != node {
                    data.swap(node, largest);
                    self.sift = Some(Sift { len, node: largest });
                    return true;
                }
            }

            match self.phase {
                Phase::Build { next: 0 } => {
                    self.phase = Phase::Extract { end: data.len() };
                }
                Phase::Build { next } => {
                    self.phase = Phase::Build { next: next - 1 };
                    self.sift = Some(Sift {
                        len: data.len(),
                        node: next - 1,
                    });
                }
                Phase::Extract { end } if end > 1 => {
                    let last = end - 1;
                    data.swap(0, last);
                    self.phase = Phase::Extract { end: last };
                    self.sift = Some(Sift { len: last, node: 0 });
                    return true;
                }
                Phase::Extract { .. } => {
                    self.phase = Phase::Done;
                    return false;
                }
                Phase::Done => return false,
            }
        }
    }
}

/// Sort a slice in-place using heap sort.
pub fn sort<T: PartialOrd>(data: &mut [T]) {
    HeapSort::new(data.len()).run(data);
}
