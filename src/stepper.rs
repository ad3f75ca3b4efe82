//! Resumable sorting state machines.
//!
//! A [`Stepper`] performs a sort one checkpoint at a time. Each call to
//! [`Stepper::step`] runs the algorithm until it has committed exactly one
//! mutation (a swap, a shift or an overwrite) and then returns, leaving the
//! slice in a consistent intermediate state. The caller decides when, or
//! whether, to resume.
//!
//! Steppers hold only their own cursor state; the array is passed in on every
//! call. A stepper must always be driven with the same slice, and the slice
//! must not be modified by anyone else between calls.

/// An in-place sort that suspends after every committed mutation.
pub trait Stepper<T> {
    /// Advance to the next checkpoint.
    ///
    /// Returns `true` after committing one mutation to `data`, or `false` once
    /// the sort has finished and `data` is in ascending order. After the first
    /// `false` every further call also returns `false` without touching `data`.
    fn step(&mut self, data: &mut [T]) -> bool;

    /// Run to completion without observing intermediate states.
    ///
    /// Returns the number of checkpoints passed.
    fn run(&mut self, data: &mut [T]) -> usize {
        let mut steps = 0;
        while self.step(data) {
            steps += 1;
        }
        steps
    }
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Swaps the first out-of-order pair it finds, one per step.
    struct FirstInversion;

    impl Stepper<u32> for FirstInversion {
        fn step(&mut self, data: &mut [u32]) -> bool {
            match data.windows(2).position(|w| w[1] < w[0]) {
                Some(i) => {
                    data.swap(i, i + 1);
                    true
                }
                None => false,
            }
        }
    }

    #[test]
    fn test_run_counts_steps() {
        let mut data = vec![3u32, 2, 1];
        let steps = FirstInversion.run(&mut data);
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(steps, 3);
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[1, 2, 3, 4, 5]));
        assert!(is_sorted(&[1, 1, 1, 1]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted::<u32>(&[]));
        assert!(!is_sorted(&[5, 4, 3, 2, 1]));
        assert!(!is_sorted(&[1, 3, 2]));
    }
}
