//! Algorithm identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The sorting algorithms the engine can step through.
///
/// Declaration order is significant: it is the order benchmarks run in and
/// the tie-break order when two runs take the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Heap,
    Merge,
}

impl Algorithm {
    /// Display name, e.g. "Bubble Sort".
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Selection => "Selection Sort",
            Self::Heap => "Heap Sort",
            Self::Merge => "Merge Sort",
        }
    }

    pub fn complexity(&self) -> &'static str {
        match self {
            Self::Bubble | Self::Insertion | Self::Selection => "O(n^2)",
            Self::Heap | Self::Merge => "O(n log n)",
        }
    }

    /// Whether the benchmark drops this algorithm for large arrays.
    ///
    /// Selection sort is quadratic too but performs only n swaps, so it stays.
    pub fn is_quadratic(&self) -> bool {
        matches!(self, Self::Bubble | Self::Insertion)
    }

    /// Whether equal elements keep their input order.
    pub fn is_stable(&self) -> bool {
        matches!(self, Self::Bubble | Self::Insertion | Self::Merge)
    }

    pub fn all() -> &'static [Algorithm] {
        &[
            Self::Bubble,
            Self::Insertion,
            Self::Selection,
            Self::Heap,
            Self::Merge,
        ]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Accepts "bubble", "Bubble Sort", "bubble-sort", "bubble_sort", ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        let key = normalized.strip_suffix("sort").unwrap_or(&normalized);

        match key {
            "bubble" => Ok(Self::Bubble),
            "insertion" => Ok(Self::Insertion),
            "selection" => Ok(Self::Selection),
            "heap" => Ok(Self::Heap),
            "merge" => Ok(Self::Merge),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("bubble".parse::<Algorithm>().unwrap(), Algorithm::Bubble);
        assert_eq!("Heap Sort".parse::<Algorithm>().unwrap(), Algorithm::Heap);
        assert_eq!("merge-sort".parse::<Algorithm>().unwrap(), Algorithm::Merge);
        assert_eq!("INSERTION_SORT".parse::<Algorithm>().unwrap(), Algorithm::Insertion);
    }

    #[test]
    fn test_parse_display_roundtrip() {
        for &algorithm in Algorithm::all() {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "quick".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, Error::UnknownAlgorithm(ref name) if name == "quick"));
        assert!("sort".parse::<Algorithm>().is_err());
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_declaration_order() {
        let mut shuffled = vec![Algorithm::Merge, Algorithm::Bubble, Algorithm::Heap];
        shuffled.sort();
        assert_eq!(shuffled, vec![Algorithm::Bubble, Algorithm::Heap, Algorithm::Merge]);
    }

    #[test]
    fn test_quadratic_set() {
        let quadratic: Vec<_> = Algorithm::all().iter().filter(|a| a.is_quadratic()).collect();
        assert_eq!(quadratic, vec![&Algorithm::Bubble, &Algorithm::Insertion]);
    }
}
