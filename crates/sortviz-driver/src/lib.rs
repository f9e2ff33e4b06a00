//! Animation driver for **sortviz**.
//!
//! This crate owns everything between the pure engines in `sortviz-core` and
//! the presentation host: the shared element store, the per-step redraw +
//! pacing sink, cooperative cancellation, and the background thread one run
//! executes on.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`host`] | `RedrawHost` — the presentation-side seam |
//! | [`store`] | `SharedStore` — lock-per-operation store handle |
//! | [`cancel`] | `CancelToken` — cancellable waits |
//! | [`pacing`] | `Pacing` — per-algorithm step delays |
//! | [`sink`] | `AnimatedSink` — the production `StepSink` |
//! | [`driver`] | `AnimationDriver`, `RunState` |

pub mod cancel;
pub mod driver;
pub mod host;
pub mod pacing;
pub mod sink;
pub mod store;

pub use cancel::CancelToken;
pub use driver::{AnimationDriver, RunState};
pub use host::RedrawHost;
pub use pacing::Pacing;
pub use sink::AnimatedSink;
pub use store::SharedStore;
