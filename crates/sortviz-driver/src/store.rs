use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::Rng;
use sortviz_core::{ElementStore, SortableItem, Store};

/// Shared handle to the element store.
///
/// The store is the single shared mutable resource in the system: the active
/// sort thread mutates it, the presentation thread reads it for redraws, and
/// the driver shuffles it on reset. `SharedStore` enforces the single-writer
/// rule with a mutex taken per *operation* — one swap, one overwrite, one
/// snapshot — never across a pacing wait, so the presentation thread can
/// always snapshot promptly while a run is in flight.
pub struct SharedStore<P> {
    inner: Arc<Mutex<ElementStore<P>>>,
}

impl<P> Clone for SharedStore<P> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<P: Clone> SharedStore<P> {
    pub fn new(store: ElementStore<P>) -> Self {
        Self { inner: Arc::new(Mutex::new(store)) }
    }

    /// Clone of the current ordering, for the presentation side to draw.
    pub fn snapshot(&self) -> Vec<SortableItem<P>> {
        self.lock().snapshot()
    }

    /// The keys in current store order.
    pub fn keys(&self) -> Vec<u32> {
        self.lock().keys()
    }

    /// Uniformly permutes the items in place.
    pub fn shuffle<R: Rng + ?Sized>(&self, rng: &mut R) {
        self.lock().shuffle(rng);
    }

    fn lock(&self) -> MutexGuard<'_, ElementStore<P>> {
        // A panicking engine aborts its run; the store itself is never left
        // mid-operation, so poisoning is safe to shrug off.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P: Clone> Store<P> for SharedStore<P> {
    fn len(&self) -> usize {
        self.lock().len()
    }

    fn key_at(&self, i: usize) -> u32 {
        self.lock().get(i).key()
    }

    fn item_at(&self, i: usize) -> SortableItem<P> {
        self.lock().get(i).clone()
    }

    fn set(&mut self, i: usize, item: SortableItem<P>) {
        Store::set(&mut *self.lock(), i, item);
    }

    fn swap(&mut self, i: usize, j: usize) {
        Store::swap(&mut *self.lock(), i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_core::{Algorithm, NullSink};

    fn shared(keys: &[u32]) -> SharedStore<()> {
        let items = keys.iter().map(|&k| SortableItem::new((), k)).collect();
        SharedStore::new(ElementStore::new(items))
    }

    #[test]
    fn engines_sort_through_the_shared_handle() {
        let mut store = shared(&[5, 2, 4, 1, 3]);
        Algorithm::Quick.run(&mut store, &mut NullSink).unwrap();
        assert_eq!(store.keys(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn snapshots_see_writes_from_a_clone_of_the_handle() {
        let store = shared(&[1, 2, 3]);
        let mut writer = store.clone();
        Store::swap(&mut writer, 0, 2);
        assert_eq!(store.keys(), [3, 2, 1]);
    }
}
