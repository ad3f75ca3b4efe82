//! Selection Sort Implementation
//!
//! Each pass scans the unsorted suffix for its minimum and swaps it into the
//! front of the suffix. One checkpoint is emitted per pass, including passes
//! where the minimum is already in place.
//!
//! Complexity: O(n²) comparisons, at most n swaps

use crate::stepper::Stepper;

/// Resumable selection sort.
#[derive(Debug, Clone, Default)]
pub struct SelectionSort {
    pass: usize,
}

impl SelectionSort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: PartialOrd> Stepper<T> for SelectionSort {
    fn step(&mut self, data: &mut [T]) -> bool {
        let i = self.pass;
        if i >= data.len() {
            return false;
        }

        let mut min = i;
        for j in i + 1..data.len() {
            if data[j] < data[min] {
                min = j;
            }
        }
        data.swap(i, min);
        self.pass += 1;
        true
    }
}

/// Sort a slice in-place using selection sort.
pub fn sort<T: PartialOrd>(data: &mut [T]) {
    SelectionSort::new().run(data);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::is_sorted;
    use rand::Rng;

    #[test]
    fn test_one_checkpoint_per_pass() {
        let mut data = vec![4u32, 1, 3, 2];
        let mut sorter = SelectionSort::new();
        let mut steps = Vec::new();
        while sorter.step(&mut data) {
            steps.push(data.clone());
        }
        assert_eq!(
            steps,
            vec![
                vec![1, 4, 3, 2],
                vec![1, 2, 3, 4],
                vec![1, 2, 3, 4],
                vec![1, 2, 3, 4],
            ]
        );
    }

    #[test]
    fn test_first_minimum_wins() {
        #[derive(Debug)]
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

        // Strict comparison keeps the leftmost of equal minima
        let mut data = vec![Keyed(5, 'a'), Keyed(1, 'b'), Keyed(1, 'c')];
        let mut sorter = SelectionSort::new();
        assert!(sorter.step(&mut data));
        assert_eq!(data[0].1, 'b');
        assert_eq!(data[2].1, 'c');
    }

    #[test]
    fn test_sort_empty() {
        let mut data: Vec<u32> = vec![];
        assert_eq!(SelectionSort::new().run(&mut data), 0);
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<u32> = (0..1000).map(|_| rng.gen_range(1..=100)).collect();
        let mut expected = data.clone();
        expected.sort();

        sort(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }
}
