use crate::error::Interrupted;
use crate::step::StepSink;
use crate::store::Store;

/// Bubble sort: repeated adjacent passes, swapping when the left key is
/// strictly greater. Notifies once per swap.
///
/// All `n - 1` passes always run — no early exit on an already-sorted
/// prefix. The redraw cadence of the full pass structure is part of the
/// animation, not an oversight.
pub fn sort<P: Clone, S: Store<P>>(store: &mut S, sink: &mut dyn StepSink) -> Result<(), Interrupted> {
    let n = store.len();
    if n < 2 {
        return Ok(());
    }
    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            if store.key_at(j) > store.key_at(j + 1) {
                store.swap(j, j + 1);
                sink.step()?;
            }
        }
    }
    Ok(())
}
