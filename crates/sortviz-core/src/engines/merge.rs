use crate::error::Interrupted;
use crate::item::SortableItem;
use crate::step::StepSink;
use crate::store::Store;

/// Merge sort: recursive divide at the midpoint, merging by copying both
/// halves into scratch buffers and writing back element by element.
///
/// Notifies after **every single write-back**, tail-copy phases included.
/// That is much more granular than the other engines' one-step-per-swap and
/// would normally be batched, but the per-write redraw is the observable
/// animation contract here. Ties (`<=`) favor the left run.
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
    if lo < hi {
        let mid = (lo + hi) / 2;
        sort_range(store, lo, mid, sink)?;
        sort_range(store, mid + 1, hi, sink)?;
        merge(store, lo, mid, hi, sink)?;
    }
    Ok(())
}

/// Merges the sorted runs `[lo, mid]` and `[mid + 1, hi]`.
///
/// On cancellation the buffered remainder is flushed back into the store
/// without further notifications, so the store holds a valid permutation of
/// its items at every cancellation point.
fn merge<P: Clone, S: Store<P>>(
    store: &mut S,
    lo: usize,
    mid: usize,
    hi: usize,
    sink: &mut dyn StepSink,
) -> Result<(), Interrupted> {
    let left: Vec<SortableItem<P>> = (lo..=mid).map(|i| store.item_at(i)).collect();
    let right: Vec<SortableItem<P>> = (mid + 1..=hi).map(|i| store.item_at(i)).collect();

    let mut i = 0;
    let mut j = 0;

    for k in lo..=hi {
        let take_left = j >= right.len() || (i < left.len() && left[i].key() <= right[j].key());
        if take_left {
            store.set(k, left[i].clone());
            i += 1;
        } else {
            store.set(k, right[j].clone());
            j += 1;
        }
        if let Err(stop) = sink.step() {
            flush(store, &left[i..], &right[j..], k + 1);
            return Err(stop);
        }
    }
    Ok(())
}

/// Writes the unmerged tails of both buffers back into slots `k..`.
fn flush<P: Clone, S: Store<P>>(
    store: &mut S,
    left: &[SortableItem<P>],
    right: &[SortableItem<P>],
    mut k: usize,
) {
    for item in left.iter().chain(right) {
        store.set(k, item.clone());
        k += 1;
    }
}
