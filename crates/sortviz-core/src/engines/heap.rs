use crate::error::Interrupted;
use crate::step::StepSink;
use crate::store::Store;

/// Heap sort: builds a max-heap bottom-up from `n / 2 - 1` down to 0, then
/// repeatedly swaps the root with the last unsorted element and re-heapifies
/// the reduced heap. Notifies on each root-extraction swap and on every
/// sift-down exchange — including the exchanges made while the heap is first
/// being built.
pub fn sort<P: Clone, S: Store<P>>(store: &mut S, sink: &mut dyn StepSink) -> Result<(), Interrupted> {
    let n = store.len();
    if n < 2 {
        return Ok(());
    }
    for root in (0..n / 2).rev() {
        sift_down(store, n, root, sink)?;
    }
    for end in (1..n).rev() {
        store.swap(0, end);
        sink.step()?;
        sift_down(store, end, 0, sink)?;
    }
    Ok(())
}

/// Restores the max-heap property for the subtree rooted at `root`, within
/// the first `heap` slots of the store.
fn sift_down<P: Clone, S: Store<P>>(
    store: &mut S,
    heap: usize,
    root: usize,
    sink: &mut dyn StepSink,
) -> Result<(), Interrupted> {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < heap && store.key_at(left) > store.key_at(largest) {
        largest = left;
    }
    if right < heap && store.key_at(right) > store.key_at(largest) {
        largest = right;
    }
    if largest != root {
        store.swap(root, largest);
        sink.step()?;
        sift_down(store, heap, largest, sink)?;
    }
    Ok(())
}
