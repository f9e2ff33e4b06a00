use std::sync::Arc;
use std::thread::{self, JoinHandle};

use sortviz_core::{Algorithm, ElementStore, SortableItem};

use crate::cancel::CancelToken;
use crate::host::RedrawHost;
use crate::pacing::Pacing;
use crate::sink::AnimatedSink;
use crate::store::SharedStore;

/// Observable state of the most recent run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RunState {
    /// No run in flight. Also the terminal state of a run that completed.
    Idle,
    /// A sort thread is reordering the store.
    Running,
    /// The most recent run was cancelled before it finished.
    Cancelled,
}

/// One background run: its engine, its cancellation token, and its thread.
struct Run {
    algorithm: Algorithm,
    token: CancelToken,
    /// Taken on join; `None` means the thread has already been joined.
    thread: Option<JoinHandle<()>>,
}

impl Run {
    fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, JoinHandle::is_finished)
    }

    fn join(&mut self) {
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("{} sort thread panicked", self.algorithm);
            }
        }
    }
}

/// Runs a selected engine over the shared store on a background thread,
/// pacing it through an [`AnimatedSink`] and redrawing through the host.
///
/// The driver owns the store for the lifetime of the program. At most one
/// run is in flight at a time: starting a new run while one is `Running`
/// cancels and joins the old one first (cancel-and-replace), and `reset`
/// likewise cancels before shuffling, so the shuffle can never race an
/// in-flight sort.
pub struct AnimationDriver<P, H: RedrawHost> {
    store: SharedStore<P>,
    host: Arc<H>,
    pacing: Pacing,
    current: Option<Run>,
}

impl<P, H> AnimationDriver<P, H>
where
    P: Clone + Send + 'static,
    H: RedrawHost + 'static,
{
    pub fn new(store: ElementStore<P>, host: H, pacing: Pacing) -> Self {
        Self {
            store: SharedStore::new(store),
            host: Arc::new(host),
            pacing,
            current: None,
        }
    }

    /// Clone of the current store ordering, for the presentation side.
    pub fn snapshot(&self) -> Vec<SortableItem<P>> {
        self.store.snapshot()
    }

    pub fn state(&self) -> RunState {
        match &self.current {
            None => RunState::Idle,
            Some(run) if !run.is_finished() => RunState::Running,
            Some(run) if run.token.is_cancelled() => RunState::Cancelled,
            Some(_) => RunState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == RunState::Running
    }

    /// Starts `algorithm` on a background thread.
    ///
    /// Policy for overlapping requests: **cancel-and-replace**. A run still
    /// in flight is cancelled and joined before the new one starts, so two
    /// engines never mutate the store concurrently.
    pub fn sort(&mut self, algorithm: Algorithm) {
        self.cancel_current();

        let token = CancelToken::new();
        let mut store = self.store.clone();
        let host = Arc::clone(&self.host);
        let delay = self.pacing.delay(algorithm);
        let run_token = token.clone();

        let builder = thread::Builder::new().name(format!("sortviz-{algorithm}"));
        let spawned = builder.spawn(move || {
            log::info!("{algorithm} run started");
            let mut sink = AnimatedSink::new(Arc::clone(&host), run_token, delay);
            match algorithm.run(&mut store, &mut sink) {
                Ok(()) => log::info!("{algorithm} run finished"),
                Err(_) => log::info!("{algorithm} run cancelled"),
            }
            // Draw the final (or last partial) state even if the closing
            // step's request was coalesced away.
            host.request_redraw();
        });

        match spawned {
            Ok(thread) => {
                self.current = Some(Run { algorithm, token, thread: Some(thread) });
            }
            Err(e) => log::error!("failed to spawn {algorithm} sort thread: {e}"),
        }
    }

    /// Cancels any in-flight run, reshuffles the store in place, and
    /// requests a redraw of the new ordering.
    pub fn reset(&mut self) {
        self.cancel_current();
        self.current = None;
        self.store.shuffle(&mut rand::thread_rng());
        log::debug!("store reshuffled");
        self.host.request_redraw();
    }

    /// Cancels any in-flight run and waits for its thread to exit. The store
    /// keeps whatever partially-sorted state the run reached.
    pub fn cancel(&mut self) {
        self.cancel_current();
    }

    /// Blocks until the current run (if any) finishes. Tooling and test
    /// helper; the GUI never blocks on a run.
    pub fn wait(&mut self) {
        if let Some(run) = &mut self.current {
            run.join();
        }
    }

    fn cancel_current(&mut self) {
        if let Some(run) = &mut self.current {
            if !run.is_finished() {
                log::info!("cancelling in-flight {} run", run.algorithm);
                run.token.cancel();
            }
            run.join();
        }
    }
}

impl<P, H: RedrawHost> Drop for AnimationDriver<P, H> {
    fn drop(&mut self) {
        if let Some(run) = &mut self.current {
            run.token.cancel();
            run.join();
        }
    }
}
