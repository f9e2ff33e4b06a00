use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Cooperative cancellation flag shared between the driver and one run.
///
/// The pacing delay between steps is a wait on this token rather than a
/// plain sleep, so a cancelled run wakes immediately instead of only after
/// its current delay expires.
#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    cancelled: Mutex<bool>,
    signal: Condvar,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags the token and wakes any thread parked in [`wait_timeout`].
    ///
    /// [`wait_timeout`]: Self::wait_timeout
    pub fn cancel(&self) {
        let mut cancelled = lock_flag(&self.inner.cancelled);
        *cancelled = true;
        self.inner.signal.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *lock_flag(&self.inner.cancelled)
    }

    /// Parks the calling thread for `delay`, waking early on cancellation.
    ///
    /// Returns `true` if the token is cancelled (whether it already was on
    /// entry or became so during the wait). A zero delay still observes a
    /// pending cancellation.
    pub fn wait_timeout(&self, delay: Duration) -> bool {
        let deadline = Instant::now() + delay;
        let mut cancelled = lock_flag(&self.inner.cancelled);
        while !*cancelled {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            let (guard, _) = self
                .inner
                .signal
                .wait_timeout(cancelled, deadline - now)
                .unwrap_or_else(PoisonError::into_inner);
            cancelled = guard;
        }
        *cancelled
    }
}

/// A thread that panicked while holding the flag mutex cannot leave the
/// boolean in a torn state, so poisoning is safe to shrug off here.
fn lock_flag(flag: &Mutex<bool>) -> std::sync::MutexGuard<'_, bool> {
    flag.lock().unwrap_or_else(PoisonError::into_inner)
}
