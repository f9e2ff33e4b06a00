/// One visual element of the collection being sorted.
///
/// The payload is opaque to the engines — a bar style, an image handle,
/// whatever the presentation side draws. Ordering is purely by `key`. Items
/// are immutable once created and are only ever repositioned within the
/// store, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableItem<P> {
    payload: P,
    key: u32,
}

impl<P> SortableItem<P> {
    pub fn new(payload: P, key: u32) -> Self {
        Self { payload, key }
    }

    /// The integer used to order this item.
    #[inline]
    pub fn key(&self) -> u32 {
        self.key
    }

    #[inline]
    pub fn payload(&self) -> &P {
        &self.payload
    }
}
