use rand::Rng;
use rand::seq::SliceRandom;

use crate::item::SortableItem;

/// Mutable access the engines need while reordering a collection.
///
/// The trait is the seam between the pure engines and whatever owns the
/// elements: tests run them against a plain [`ElementStore`], the animation
/// driver against a shared handle that locks per operation so the
/// presentation thread can snapshot mid-run.
///
/// All indices must lie in `[0, len)`; out-of-range access is a programming
/// error and panics (fail fast). The length of the underlying collection is
/// constant for the duration of one run — there is deliberately no way to
/// insert or remove through this trait.
pub trait Store<P: Clone> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ordering key of the item at `i`.
    fn key_at(&self, i: usize) -> u32;

    /// Clone of the item at `i`. Used by the engines that stage items in
    /// scratch space (insertion's held key, merge's buffers).
    fn item_at(&self, i: usize) -> SortableItem<P>;

    /// Overwrites slot `i`.
    fn set(&mut self, i: usize, item: SortableItem<P>);

    /// Exchanges the items at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

/// The ordered, index-addressable collection of elements under animation.
///
/// Created once at startup from a fixed item list, then shuffled; it lives
/// for the lifetime of the program and is reshuffled in place on reset.
#[derive(Debug, Clone)]
pub struct ElementStore<P> {
    items: Vec<SortableItem<P>>,
}

impl<P> ElementStore<P> {
    pub fn new(items: Vec<SortableItem<P>>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reads one slot. Panics if `i` is out of range.
    pub fn get(&self, i: usize) -> &SortableItem<P> {
        &self.items[i]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortableItem<P>> {
        self.items.iter()
    }

    /// The keys in current store order. Handy for assertions and logging.
    pub fn keys(&self) -> Vec<u32> {
        self.items.iter().map(SortableItem::key).collect()
    }

    /// Uniformly permutes the items in place (Fisher–Yates via `rand`).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.shuffle(rng);
    }
}

impl<P: Clone> ElementStore<P> {
    /// Clone of the current ordering, for the presentation side to draw.
    pub fn snapshot(&self) -> Vec<SortableItem<P>> {
        self.items.clone()
    }
}

impl<P: Clone> Store<P> for ElementStore<P> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn key_at(&self, i: usize) -> u32 {
        self.items[i].key()
    }

    fn item_at(&self, i: usize) -> SortableItem<P> {
        self.items[i].clone()
    }

    fn set(&mut self, i: usize, item: SortableItem<P>) {
        self.items[i] = item;
    }

    fn swap(&mut self, i: usize, j: usize) {
        // Slice indexing checks both bounds even when i == j.
        assert!(i < self.items.len() && j < self.items.len());
        self.items.swap(i, j);
    }
}
