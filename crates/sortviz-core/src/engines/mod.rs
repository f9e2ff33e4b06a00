//! The six sort engines.
//!
//! Each engine is a free function
//! `sort(store: &mut impl Store<P>, sink: &mut dyn StepSink)` that fully
//! sorts the store into ascending key order, notifying the sink after every
//! store-mutating swap or overwrite. Cancellation arrives through the sink's
//! return value and is propagated with `?`; an interrupted engine stops
//! immediately and leaves the store partially sorted.
//!
//! Step granularity is observable behavior (each step is one redraw plus one
//! pacing delay), so every engine documents exactly which operations notify.
//! Merge sort in particular notifies on *every single write-back*, including
//! the tail-copy phases — far chattier than the others, and intentional.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

#[cfg(test)]
mod tests {
    use crate::algorithm::Algorithm;
    use crate::error::Interrupted;
    use crate::item::SortableItem;
    use crate::step::{StepCounter, StepSink};
    use crate::store::ElementStore;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn store(keys: &[u32]) -> ElementStore<()> {
        ElementStore::new(keys.iter().map(|&k| SortableItem::new((), k)).collect())
    }

    fn run(algorithm: Algorithm, keys: &[u32]) -> (Vec<u32>, usize) {
        let mut s = store(keys);
        let mut counter = StepCounter::default();
        algorithm.run(&mut s, &mut counter).unwrap();
        (s.keys(), counter.count())
    }

    fn sorted(keys: &[u32]) -> Vec<u32> {
        let mut v = keys.to_vec();
        v.sort_unstable();
        v
    }

    // ── Sorts correctly, output is a permutation ─────────────────────────

    const INPUTS: &[&[u32]] = &[
        &[],
        &[1],
        &[2, 1],
        &[5, 2, 4, 1, 3],
        &[5, 3, 8, 4, 2],
        &[1, 2, 3, 4, 5, 6],
        &[6, 5, 4, 3, 2, 1],
        &[3, 3, 1, 3, 2, 1],
        &[7, 7, 7, 7],
    ];

    #[test]
    fn every_engine_sorts_every_input() {
        for &algorithm in &Algorithm::ALL {
            for &keys in INPUTS {
                let (out, _) = run(algorithm, keys);
                assert_eq!(out, sorted(keys), "{algorithm} on {keys:?}");
            }
        }
    }

    #[test]
    fn every_engine_sorts_a_seeded_shuffle() {
        let mut rng = StdRng::seed_from_u64(1);
        for &algorithm in &Algorithm::ALL {
            let mut s = store(&(0..32).rev().collect::<Vec<u32>>());
            s.shuffle(&mut rng);
            let before = sorted(&s.keys());
            algorithm.run(&mut s, &mut crate::step::NullSink).unwrap();
            assert_eq!(s.keys(), before, "{algorithm}");
        }
    }

    #[test]
    fn empty_and_single_element_take_zero_steps() {
        for &algorithm in &Algorithm::ALL {
            for keys in [&[][..], &[42][..]] {
                let (out, steps) = run(algorithm, keys);
                assert_eq!(out, keys, "{algorithm}");
                assert_eq!(steps, 0, "{algorithm}");
            }
        }
    }

    // ── Step counts ───────────────────────────────────────────────────────

    #[test]
    fn bubble_steps_once_per_swap() {
        // [5,2,4,1,3] has 7 inversions; bubble performs one swap per inversion.
        let (out, steps) = run(Algorithm::Bubble, &[5, 2, 4, 1, 3]);
        assert_eq!(out, [1, 2, 3, 4, 5]);
        assert_eq!(steps, 7);
    }

    #[test]
    fn bubble_reverse_sorted_takes_n_choose_2_steps() {
        for n in [2u32, 3, 5, 8] {
            let keys: Vec<u32> = (1..=n).rev().collect();
            let (_, steps) = run(Algorithm::Bubble, &keys);
            assert_eq!(steps, (n * (n - 1) / 2) as usize, "n = {n}");
        }
    }

    #[test]
    fn selection_steps_once_per_outer_iteration() {
        // Unconditional swap per position, already-sorted input included.
        for keys in [&[1u32, 2, 3, 4, 5][..], &[5, 2, 4, 1, 3][..]] {
            let (out, steps) = run(Algorithm::Selection, keys);
            assert_eq!(out, sorted(keys));
            assert_eq!(steps, keys.len() - 1);
        }
    }

    #[test]
    fn insertion_steps_once_per_shift() {
        // One shift per inversion; the final placement of the held item
        // does not notify.
        let (out, steps) = run(Algorithm::Insertion, &[5, 2, 4, 1, 3]);
        assert_eq!(out, [1, 2, 3, 4, 5]);
        assert_eq!(steps, 7);

        let (_, steps) = run(Algorithm::Insertion, &[1, 2, 3, 4]);
        assert_eq!(steps, 0);
    }

    /// Total write-backs across all merge calls: every element is written
    /// once per merge level it participates in.
    fn merge_write_backs(n: usize) -> usize {
        if n < 2 {
            return 0;
        }
        let left = n / 2 + n % 2;
        merge_write_backs(left) + merge_write_backs(n - left) + n
    }

    #[test]
    fn merge_steps_once_per_write_back() {
        for keys in [&[5u32, 2, 4, 1, 3][..], &[8, 7, 6, 5, 4, 3, 2, 1][..], &[2, 1][..]] {
            let (out, steps) = run(Algorithm::Merge, keys);
            assert_eq!(out, sorted(keys));
            assert_eq!(steps, merge_write_backs(keys.len()), "{keys:?}");
        }
        // Power-of-two check by hand: 8 elements, 3 levels, 24 writes.
        assert_eq!(merge_write_backs(8), 24);
    }

    #[test]
    fn quick_partitions_around_last_element() {
        // Pivot 2 is placed at index 0 by the first partition; the full sort
        // finishes with 6 steps (4 partition swaps, self-swaps included, plus
        // one pivot placement per partition call that swaps).
        let (out, steps) = run(Algorithm::Quick, &[5, 3, 8, 4, 2]);
        assert_eq!(out, [2, 3, 4, 5, 8]);
        assert_eq!(steps, 6);
    }

    #[test]
    fn quick_first_partition_places_the_pivot() {
        // Nothing in [5,3,8,4] is smaller than pivot 2, so the partition's
        // only mutation is the pivot-placing swap into index 0.
        let mut s = store(&[5, 3, 8, 4, 2]);
        let result = Algorithm::Quick.run(&mut s, &mut StopAfter { left: 1 });
        assert_eq!(result, Err(Interrupted));
        assert_eq!(s.keys(), [2, 3, 8, 4, 5]);
    }

    #[test]
    fn heap_steps_on_extraction_and_sift_swaps() {
        // One build-phase sift swap, four extraction swaps, two sift swaps
        // while re-heapifying. Pinned so cadence changes show up.
        let (out, steps) = run(Algorithm::Heap, &[5, 2, 4, 1, 3]);
        assert_eq!(out, [1, 2, 3, 4, 5]);
        assert_eq!(steps, 7);
    }

    // ── Interruption ──────────────────────────────────────────────────────

    /// Sink that allows `left` steps and then reports cancellation.
    struct StopAfter {
        left: usize,
    }

    impl StepSink for StopAfter {
        fn step(&mut self) -> Result<(), Interrupted> {
            if self.left == 0 {
                return Err(Interrupted);
            }
            self.left -= 1;
            Ok(())
        }
    }

    #[test]
    fn interruption_stops_the_run_and_preserves_the_permutation() {
        let keys: Vec<u32> = (1..=12).rev().collect();
        for &algorithm in &Algorithm::ALL {
            for cut in [0usize, 1, 3, 9] {
                let mut s = store(&keys);
                let result = algorithm.run(&mut s, &mut StopAfter { left: cut });
                assert_eq!(result, Err(Interrupted), "{algorithm} cut at {cut}");
                assert_eq!(sorted(&s.keys()), sorted(&keys), "{algorithm} cut at {cut}");
            }
        }
    }
}
