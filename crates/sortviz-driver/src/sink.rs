use std::sync::Arc;
use std::time::Duration;

use sortviz_core::{Interrupted, StepSink};

use crate::cancel::CancelToken;
use crate::host::RedrawHost;

/// The production step sink: one redraw request, one pacing delay.
///
/// Invoked synchronously from the sort thread after every store mutation.
/// The redraw request is non-blocking; the delay then parks only the sort
/// thread, never the presentation thread. Cancellation during the delay (or
/// pending before it) surfaces as [`Interrupted`], which the engines
/// propagate to end the run.
pub struct AnimatedSink<H: RedrawHost> {
    host: Arc<H>,
    token: CancelToken,
    delay: Duration,
}

impl<H: RedrawHost> AnimatedSink<H> {
    pub fn new(host: Arc<H>, token: CancelToken, delay: Duration) -> Self {
        Self { host, token, delay }
    }
}

impl<H: RedrawHost> StepSink for AnimatedSink<H> {
    fn step(&mut self) -> Result<(), Interrupted> {
        self.host.request_redraw();
        if self.token.wait_timeout(self.delay) {
            return Err(Interrupted);
        }
        Ok(())
    }
}
