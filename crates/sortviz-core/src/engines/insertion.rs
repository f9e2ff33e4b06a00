use crate::error::Interrupted;
use crate::step::StepSink;
use crate::store::Store;

/// Insertion sort: classic shift-and-insert. Notifies once per shift (each
/// inner-loop write), not per outer iteration; the final placement of the
/// held item does not notify.
///
/// While an item is held out of the store, the vacated slot temporarily
/// duplicates its neighbor. If the run is cancelled mid-shift the held item
/// is written into the current hole before unwinding, so the store is a
/// valid permutation at every cancellation point.
pub fn sort<P: Clone, S: Store<P>>(store: &mut S, sink: &mut dyn StepSink) -> Result<(), Interrupted> {
    let n = store.len();
    for i in 1..n {
        let held = store.item_at(i);
        let mut hole = i;
        while hole > 0 && store.key_at(hole - 1) > held.key() {
            let shifted = store.item_at(hole - 1);
            store.set(hole, shifted);
            hole -= 1;
            if let Err(stop) = sink.step() {
                store.set(hole, held);
                return Err(stop);
            }
        }
        store.set(hole, held);
    }
    Ok(())
}
