//! Element store, sort engines, and step notification for the **sortviz**
//! sorting animation.
//!
//! This crate is intentionally free of GUI dependencies so the engines can be
//! consumed by tests, benchmarks, and headless tooling without pulling in any
//! window or render code. The animation side (background runs, cancellation,
//! pacing) lives in `sortviz-driver`.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`item`] | `SortableItem` — payload plus ordering key |
//! | [`store`] | `ElementStore`, the `Store` access trait |
//! | [`step`] | `StepSink` notification contract |
//! | [`algorithm`] | `Algorithm` — the closed set of six engines |
//! | [`engines`] | bubble, selection, insertion, merge, quick, heap |
//! | [`error`] | `Interrupted`, `UnknownAlgorithm` |
//!
//! # Quick start
//!
//! ```rust
//! use sortviz_core::{Algorithm, ElementStore, SortableItem, StepCounter};
//!
//! let items = [5u32, 2, 4, 1, 3].map(|k| SortableItem::new((), k)).to_vec();
//! let mut store = ElementStore::new(items);
//!
//! let mut steps = StepCounter::default();
//! Algorithm::Bubble.run(&mut store, &mut steps).unwrap();
//!
//! assert_eq!(store.keys(), [1, 2, 3, 4, 5]);
//! assert_eq!(steps.count(), 7); // one step per swap
//! ```

pub mod algorithm;
pub mod engines;
pub mod error;
pub mod item;
pub mod step;
pub mod store;

pub use algorithm::Algorithm;
pub use error::{Interrupted, UnknownAlgorithm};
pub use item::SortableItem;
pub use step::{NullSink, StepCounter, StepSink};
pub use store::{ElementStore, Store};
