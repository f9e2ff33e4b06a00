use crate::error::Interrupted;
use crate::step::StepSink;
use crate::store::Store;

/// Selection sort: for each position, scan the unsorted suffix for the
/// minimum key and swap it into place. Notifies exactly once per outer
/// iteration — the swap happens unconditionally, even when the minimum is
/// already in position (a self-swap still redraws and pauses).
pub fn sort<P: Clone, S: Store<P>>(store: &mut S, sink: &mut dyn StepSink) -> Result<(), Interrupted> {
    let n = store.len();
    if n < 2 {
        return Ok(());
    }
    for i in 0..n - 1 {
        let mut min = i;
        for j in i + 1..n {
            if store.key_at(j) < store.key_at(min) {
                min = j;
            }
        }
        store.swap(min, i);
        sink.step()?;
    }
    Ok(())
}
