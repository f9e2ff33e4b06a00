use eframe::egui::Color32;

use sortviz_core::{ElementStore, SortableItem};

/// Visual payload of one element: the fill color of its bar.
///
/// The item key doubles as the bar height in logical pixels, so the sorted
/// store reads as a staircase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub color: Color32,
}

/// The fixed startup collection: eight bars of distinct heights.
///
/// The driver shuffles the store before the first frame, so the ascending
/// order here is never what the user sees first.
pub fn starting_lineup() -> ElementStore<BarStyle> {
    const BARS: [(u32, Color32); 8] = [
        (32, Color32::from_rgb(0xe6, 0x4b, 0x4b)),
        (64, Color32::from_rgb(0xf2, 0x8c, 0x28)),
        (96, Color32::from_rgb(0xf5, 0xd0, 0x33)),
        (128, Color32::from_rgb(0x6f, 0xc2, 0x76)),
        (160, Color32::from_rgb(0x2e, 0xa8, 0x9e)),
        (192, Color32::from_rgb(0x3d, 0x7d, 0xd8)),
        (224, Color32::from_rgb(0x7a, 0x5c, 0xc9)),
        (256, Color32::from_rgb(0xc9, 0x5c, 0xa8)),
    ];

    let items = BARS
        .iter()
        .map(|&(height, color)| SortableItem::new(BarStyle { color }, height))
        .collect();
    ElementStore::new(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lineup_has_eight_distinct_keys() {
        let store = starting_lineup();
        let mut keys = store.keys();
        keys.dedup();
        assert_eq!(keys.len(), 8);
    }
}
