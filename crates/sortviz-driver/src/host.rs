/// Presentation-side redraw seam.
///
/// [`request_redraw`](Self::request_redraw) is fire-and-forget: it must
/// return without blocking, because it is called from the sort thread after
/// every step. A busy host may coalesce requests — the eventual redraw reads
/// the store's *current* state, not a snapshot taken at request time, so
/// last-state-wins is the intended semantics.
pub trait RedrawHost: Send + Sync {
    fn request_redraw(&self);
}
