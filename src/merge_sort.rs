//! Merge Sort Implementation
//!
//! Top-down merge sort. The recursion over `[lo, hi]` ranges is flattened
//! into an explicit work stack of [`Frame`]s, so deep inputs cannot overflow
//! the call stack and the sort can suspend in the middle of any merge.
//!
//! Each merge copies both halves into scratch buffers and writes them back
//! one element per checkpoint, in three phases: the dual-pointer merge while
//! both halves have elements, then the rest of the left half, then the rest
//! of the right half. The right element is taken only when it is strictly
//! less than the left one, which keeps the sort stable.
//!
//! Complexity: O(n log n) comparisons, O(n) extra space for merge buffers

use crate::stepper::Stepper;

/// Pending work on an inclusive index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Split { lo: usize, hi: usize },
    Merge { lo: usize, mid: usize, hi: usize },
}

/// Read positions in the scratch halves and the next write slot.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    out: usize,
    left: usize,
    right: usize,
}

/// Resumable merge sort.
#[derive(Debug, Clone)]
pub struct MergeSort<T> {
    stack: Vec<Frame>,
    left: Vec<T>,
    right: Vec<T>,
    cursor: Option<Cursor>,
}

impl<T> MergeSort<T> {
    /// Create a merge sort for a slice of `len` elements.
    pub fn new(len: usize) -> Self {
        let mut stack = Vec::new();
        if len > 1 {
            stack.push(Frame::Split { lo: 0, hi: len - 1 });
        }
        Self {
            stack,
            left: Vec::new(),
            right: Vec::new(),
            cursor: None,
        }
    }
}

impl<T: PartialOrd + Clone> MergeSort<T> {
    /// Write the next merged element, if the active merge has one left.
    fn write_next(&mut self, data: &mut [T]) -> bool {
        let Some(cursor) = self.cursor.as_mut() else {
            return false;
        };
        let left_rest = cursor.left < self.left.len();
        let right_rest = cursor.right < self.right.len();

        let take_right = match (left_rest, right_rest) {
            (true, true) => self.right[cursor.right] < self.left[cursor.left],
            (true, false) => false,
            (false, true) => true,
            (false, false) => {
                self.cursor = None;
                return false;
            }
        };

        if take_right {
            data[cursor.out] = self.right[cursor.right].clone();
            cursor.right += 1;
        } else {
            data[cursor.out] = self.left[cursor.left].clone();
            cursor.left += 1;
        }
        cursor.out += 1;
        true
    }
}

impl<T: PartialOrd + Clone> Stepper<T> for MergeSort<T> {
    fn step(&mut self, data: &mut [T]) -> bool {
        loop {
            if self.write_next(data) {
                return true;
            }

            match self.stack.pop() {
                None => return false,
                Some(Frame::Split { lo, hi }) => {
                    if lo < hi {
                        let mid = lo + (hi - lo) / 2;
                        // Pushed in reverse so the left half is sorted first
                        self.stack.push(Frame::Merge { lo, mid, hi });
                        self.stack.push(Frame::Split { lo: mid + 1, hi });
                        self.stack.push(Frame::Split { lo, hi: mid });
                    }
                }
                Some(Frame::Merge { lo, mid, hi }) => {
                    self.left.clear();
                    self.left.extend_from_slice(&data[lo..=mid]);
                    self.right.clear();
                    self.right.extend_from_slice(&data[mid + 1..=hi]);
                    self.cursor = Some(Cursor {
                        out: lo,
                        left: 0,
                        right: 0,
                    });
                }
            }
        }
    }
}

/// Sort a slice in-place using merge sort.
pub fn sort<T: PartialOrd + Clone>(data: &mut [T]) {
    MergeSort::new(data.len()).run(data);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::is_sorted;
    use rand::Rng;

    #[derive(Debug, Clone)]
    struct Keyed(u32, char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }

    #[test]
    fn test_stability_with_duplicates() {
        let mut data = vec![Keyed(4, 'a'), Keyed(2, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
        sort(&mut data);
        let keys: Vec<u32> = data.iter().map(|k| k.0).collect();
        let tags: String = data.iter().map(|k| k.1).collect();
        assert_eq!(keys, vec![1, 2, 2, 4]);
        assert_eq!(tags, "dbca");
    }

    #[test]
    fn test_one_checkpoint_per_write() {
        // n = 4: two merges of 2 writes each, then one merge of 4 writes
        let mut data = vec![4u32, 3, 2, 1];
        let mut sorter = MergeSort::new(data.len());
        let mut steps = Vec::new();
        while sorter.step(&mut data) {
            steps.push(data.clone());
        }
        assert_eq!(
            steps,
            vec![
                vec![3, 3, 2, 1],
                vec![3, 4, 2, 1],
                vec![3, 4, 1, 1],
                vec![3, 4, 1, 2],
                vec![1, 4, 1, 2],
                vec![1, 2, 1, 2],
                vec![1, 2, 3, 2],
                vec![1, 2, 3, 4],
            ]
        );
    }

    #[test]
    fn test_writes_per_level() {
        // Every element is written once per level of the recursion
        let mut data: Vec<u32> = (0..16).rev().collect();
        let steps = MergeSort::new(data.len()).run(&mut data);
        assert_eq!(steps, 16 * 4);
        assert!(is_sorted(&data));
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty: Vec<u32> = vec![];
        assert_eq!(MergeSort::new(0).run(&mut empty), 0);

        let mut single = vec![7u32];
        assert_eq!(MergeSort::new(1).run(&mut single), 0);
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<u32> = (0..5000).map(|_| rng.gen_range(1..=100)).collect();
        let mut expected = data.clone();
        expected.sort();

        sort(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }
}
