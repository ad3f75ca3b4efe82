//! Insertion Sort Implementation
//!
//! Grows a sorted prefix one element at a time. The next key is lifted out,
//! larger prefix elements are shifted one slot to the right, and the key is
//! dropped into the hole. A checkpoint follows every shift and every final
//! placement, so while a key is in flight the array briefly holds a
//! duplicate of the shifted element.
//!
//! Only a strictly greater prefix element is shifted, which keeps the sort
//! stable.
//!
//! Complexity: O(n²) comparisons and moves, O(1) extra space

use crate::stepper::Stepper;

/// A key lifted out of the array, waiting to be placed.
#[derive(Debug, Clone)]
struct InFlight<T> {
    key: T,
    /// Slot the key would occupy if placed now
    hole: usize,
}

/// Resumable insertion sort.
#[derive(Debug, Clone)]
pub struct InsertionSort<T> {
    /// Index of the next element to insert
    next: usize,
    in_flight: Option<InFlight<T>>,
}

impl<T> InsertionSort<T> {
    pub fn new() -> Self {
        Self {
            next: 1,
            in_flight: None,
        }
    }
}

impl<T> Default for InsertionSort<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd + Clone> Stepper<T> for InsertionSort<T> {
    fn step(&mut self, data: &mut [T]) -> bool {
        let InFlight { key, hole } = match self.in_flight.take() {
            Some(in_flight) => in_flight,
            None => {
                if self.next >= data.len() {
                    return false;
                }
                let lifted = InFlight {
                    key: data[self.next].clone(),
                    hole: self.next,
                };
                self.next += 1;
                lifted
            }
        };

        if hole > 0 && key < data[hole - 1] {
            data[hole] = data[hole - 1].clone();
            self.in_flight = Some(InFlight { key, hole: hole - 1 });
        } else {
            data[hole] = key;
        }
        true
    }
}

/// Sort a slice in-place using insertion sort.
pub fn sort<T: PartialOrd + Clone>(data: &mut [T]) {
    InsertionSort::new().run(data);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::is_sorted;
    use rand::Rng;

    fn collect_steps(mut data: Vec<u32>) -> Vec<Vec<u32>> {
        let mut sorter = InsertionSort::new();
        let mut steps = Vec::new();
        while sorter.step(&mut data) {
            steps.push(data.clone());
        }
        steps
    }

    #[test]
    fn test_shift_and_place_checkpoints() {
        let steps = collect_steps(vec![3, 1, 2]);
        assert_eq!(
            steps,
            vec![
                vec![3, 3, 2], // shift 3 right
                vec![1, 3, 2], // place 1
                vec![1, 3, 3], // shift 3 right
                vec![1, 2, 3], // place 2
            ]
        );
    }

    #[test]
    fn test_sorted_input_places_each_key_once() {
        let data: Vec<u32> = (0..20).collect();
        let steps = collect_steps(data.clone());
        assert_eq!(steps.len(), 19);
        assert!(steps.iter().all(|s| *s == data));
    }

    #[test]
    fn test_stability() {
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

        let mut data = vec![Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
        sort(&mut data);
        let tags: String = data.iter().map(|k| k.1).collect();
        assert_eq!(tags, "bdac");
    }

    #[test]
    fn test_sort_empty_and_single() {
        assert!(collect_steps(vec![]).is_empty());
        assert!(collect_steps(vec![9]).is_empty());
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<u32> = (0..500).map(|_| rng.gen_range(1..=100)).collect();
        let mut expected = data.clone();
        expected.sort();

        sort(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }
}
