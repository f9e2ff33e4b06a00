use crate::error::Interrupted;
use crate::step::StepSink;
use crate::store::Store;

/// Quick sort with the Lomuto partition scheme, pivot = last element of the
/// range. Notifies on every swap in the "smaller than pivot" branch (strict
/// `<`, so ties never swap) plus once for the pivot-placing swap that ends
/// each partition. Self-swaps still notify — the redraw cadence follows the
/// branch, not whether the contents changed.
pub fn sort<P: Clone, S: Store<P>>(store: &mut S, sink: &mut dyn StepSink) -> Result<(), Interrupted> {
    let n = store.len();
    if n < 2 {
        return Ok(());
    }
    sort_range(store, 0, n - 1, sink)
}

fn sort_range<P: Clone, S: Store<P>>(
    store: &mut S,
    lo: usize,
    hi: usize,
    sink: &mut dyn StepSink,
) -> Result<(), Interrupted> {
    if lo >= hi {
        return Ok(());
    }
    let pivot = partition(store, lo, hi, sink)?;
    if pivot > lo {
        sort_range(store, lo, pivot - 1, sink)?;
    }
    sort_range(store, pivot + 1, hi, sink)
}

/// Partitions `[lo, hi]` around the key at `hi`; returns the pivot's final
/// index.
fn partition<P: Clone, S: Store<P>>(
    store: &mut S,
    lo: usize,
    hi: usize,
    sink: &mut dyn StepSink,
) -> Result<usize, Interrupted> {
    let pivot = store.key_at(hi);
    let mut boundary = lo;
    for j in lo..hi {
        if store.key_at(j) < pivot {
            store.swap(boundary, j);
            sink.step()?;
            boundary += 1;
        }
    }
    store.swap(boundary, hi);
    sink.step()?;
    Ok(boundary)
}
