//! Sequence and Highlight Types
//!
//! The mutable array a stepper sorts, plus the (at most two) positions a
//! renderer should draw as "of interest".
//!
//! # Design Philosophy
//!
//! A [`Sequence`] has no error path. Every index a stepper passes in is
//! derived from the length captured when the stepper was bound, so an
//! out-of-bounds index is a bug in the caller and panics immediately.

/// Up to two highlighted positions of a [`Sequence`]
///
/// Highlights exist for rendering only; no stepper reads them back to make a
/// sorting decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighlightSet {
    slots: [Option<usize>; 2],
}

impl HighlightSet {
    /// An empty highlight set
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: [None, None] }
    }

    /// Highlight a single position
    #[must_use]
    pub const fn single(index: usize) -> Self {
        Self {
            slots: [Some(index), None],
        }
    }

    /// Highlight a pair of positions (a comparison)
    #[must_use]
    pub const fn pair(first: usize, second: usize) -> Self {
        Self {
            slots: [Some(first), Some(second)],
        }
    }

    /// Remove every highlight
    pub fn clear(&mut self) {
        self.slots = [None, None];
    }

    /// Whether `index` is highlighted
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.slots.contains(&Some(index))
    }

    /// Whether nothing is highlighted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of highlighted positions (0, 1 or 2)
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Iterate over the highlighted positions
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().filter_map(|s| *s)
    }
}

/// The ordered, fixed-length array being sorted
///
/// Values only move through [`Sequence::swap`]. The length never changes
/// for the lifetime of a `Sequence`; resizing means building a new one,
/// which the [`Visualizer`](crate::Visualizer) refuses while a run is active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence<T> {
    values: Vec<T>,
    highlights: HighlightSet,
}

impl<T> Sequence<T> {
    /// Wrap `values` in a new sequence with no highlights
    #[must_use]
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            highlights: HighlightSet::new(),
        }
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sequence has no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> &T {
        &self.values[index]
    }

    /// Exchange the elements at `i` and `j` (no-op when equal)
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        if i != j {
            self.values.swap(i, j);
        }
    }

    /// All values in order, for rendering
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Current highlight set
    #[must_use]
    pub fn highlights(&self) -> &HighlightSet {
        &self.highlights
    }

    /// Drop all highlights
    pub fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    pub(crate) fn set_highlights(&mut self, highlights: HighlightSet) {
        debug_assert!(highlights.iter().all(|i| i < self.values.len()));
        self.highlights = highlights;
    }
}

impl<T: PartialOrd> Sequence<T> {
    /// Whether the values are in non-decreasing order
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}
