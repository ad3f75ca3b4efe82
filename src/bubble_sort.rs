//! Bubble Sort Implementation
//!
//! Repeatedly walks the unsorted prefix and swaps adjacent elements that are
//! out of order, so the largest remaining element bubbles to the end of the
//! prefix on every pass. A checkpoint is emitted after each adjacent swap;
//! comparisons that leave the array unchanged emit nothing.
//!
//! Complexity: O(n²) comparisons, O(1) extra space

use crate::stepper::Stepper;

/// Resumable bubble sort.
#[derive(Debug, Clone, Default)]
pub struct BubbleSort {
    /// Completed passes; the last `pass` elements are in final position
    pass: usize,
    /// Left index of the next adjacent pair to compare
    index: usize,
}

impl BubbleSort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: PartialOrd> Stepper<T> for BubbleSort {
    fn step(&mut self, data: &mut [T]) -> bool {
        let n = data.len();
        while self.pass < n {
            while self.index + 1 < n - self.pass {
                let j = self.index;
                self.index += 1;
                if data[j + 1] < data[j] {
                    data.swap(j, j + 1);
                    return true;
                }
            }
            self.pass += 1;
            self.index = 0;
        }
        false
    }
}

/// Sort a slice in-place using bubble sort.
pub fn sort<T: PartialOrd>(data: &mut [T]) {
    BubbleSort::new().run(data);
}
