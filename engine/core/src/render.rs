//! Renderer Contract
//!
//! Surfaces implement [`Renderer`] to draw a sequence after every tick. The
//! engine never depends on how: the TUI draws colored bars, tests record
//! frames.

use crate::sequence::HighlightSet;

/// Something that draws a snapshot of a sequence
pub trait Renderer<T> {
    /// Draw `values` with `highlights` marked
    fn render(&mut self, values: &[T], highlights: &HighlightSet);
}

impl<T, F> Renderer<T> for F
where
    F: FnMut(&[T], &HighlightSet),
{
    fn render(&mut self, values: &[T], highlights: &HighlightSet) {
        self(values, highlights);
    }
}
