use std::fmt;
use std::str::FromStr;

use crate::engines;
use crate::error::{Interrupted, UnknownAlgorithm};
use crate::step::StepSink;
use crate::store::Store;

/// The closed set of sort engines the animation can run.
///
/// A closed enum instead of string dispatch: every call site that selects an
/// algorithm is exhaustiveness-checked, and an unknown name can only arise at
/// the parsing boundary ([`FromStr`]), where the caller treats it as a no-op.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    /// All six engines, in the order the selector presents them.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    /// Human-facing label, as shown in the algorithm selector.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble sort",
            Algorithm::Selection => "Selection sort",
            Algorithm::Insertion => "Insertion sort",
            Algorithm::Merge => "Merge sort",
            Algorithm::Quick => "Quick sort",
            Algorithm::Heap => "Heap sort",
        }
    }

    /// Short lowercase name, for logs and thread names.
    pub fn short_name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
        }
    }

    /// Fully sorts `store` into ascending key order with this engine,
    /// notifying `sink` after every store-mutating step.
    pub fn run<P: Clone, S: Store<P>>(
        self,
        store: &mut S,
        sink: &mut dyn StepSink,
    ) -> Result<(), Interrupted> {
        match self {
            Algorithm::Bubble => engines::bubble::sort(store, sink),
            Algorithm::Selection => engines::selection::sort(store, sink),
            Algorithm::Insertion => engines::insertion::sort(store, sink),
            Algorithm::Merge => engines::merge::sort(store, sink),
            Algorithm::Quick => engines::quick::sort(store, sink),
            Algorithm::Heap => engines::heap::sort(store, sink),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Accepts the selector labels ("Bubble sort") and the short names
    /// ("bubble"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" | "bubble sort" => Ok(Algorithm::Bubble),
            "selection" | "selection sort" => Ok(Algorithm::Selection),
            "insertion" | "insertion sort" => Ok(Algorithm::Insertion),
            "merge" | "merge sort" => Ok(Algorithm::Merge),
            "quick" | "quick sort" => Ok(Algorithm::Quick),
            "heap" | "heap sort" => Ok(Algorithm::Heap),
            _ => Err(UnknownAlgorithm { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.label().parse::<Algorithm>().unwrap(), algo);
            assert_eq!(algo.short_name().parse::<Algorithm>().unwrap(), algo);
        }
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!("  QUICK SORT ".parse::<Algorithm>().unwrap(), Algorithm::Quick);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "bogo sort".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.name, "bogo sort");
    }
}
