use std::fmt;

/// A sort run was cancelled while it was still reordering the store.
///
/// Engines observe this through [`StepSink::step`](crate::StepSink::step) and
/// unwind immediately, leaving the store in whatever partially-sorted state it
/// reached. There is no rollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

impl fmt::Display for Interrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sort run interrupted")
    }
}

impl std::error::Error for Interrupted {}

/// An algorithm name that matches none of the six engines.
///
/// Callers on the command surface treat this as a no-op: no run is started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm {
    pub name: String,
}

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sorting algorithm '{}'", self.name)
    }
}

impl std::error::Error for UnknownAlgorithm {}
