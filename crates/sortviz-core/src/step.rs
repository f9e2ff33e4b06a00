use crate::error::Interrupted;

/// Receiver for step notifications.
///
/// Engines call [`step`](Self::step) synchronously after every swap or
/// overwrite that changes the store — never after a pure comparison. The
/// animated implementation requests a redraw and then parks the sort thread
/// for the pacing delay; returning `Err(Interrupted)` tells the engine to
/// terminate the current run promptly instead of continuing to mutate the
/// store.
pub trait StepSink {
    fn step(&mut self) -> Result<(), Interrupted>;
}

/// Closures work as sinks, which keeps one-off tests and tooling terse.
impl<F> StepSink for F
where
    F: FnMut() -> Result<(), Interrupted>,
{
    fn step(&mut self) -> Result<(), Interrupted> {
        self()
    }
}

/// Sink that ignores every step. Sorts at full speed, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl StepSink for NullSink {
    fn step(&mut self) -> Result<(), Interrupted> {
        Ok(())
    }
}

/// Sink that counts steps. Step counts are deterministic per algorithm and
/// input, so this is the main assertion tool for engine behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepCounter {
    count: usize,
}

impl StepCounter {
    pub fn count(&self) -> usize {
        self.count
    }
}

impl StepSink for StepCounter {
    fn step(&mut self) -> Result<(), Interrupted> {
        self.count += 1;
        Ok(())
    }
}
