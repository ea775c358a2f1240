//! Quicksort Stepper
//!
//! Recursion is replaced by an explicit LIFO stack of `(low, high)` ranges so
//! that one tick performs exactly one Lomuto partition.
//!
//! ```text
//! tick 0        seed:      push (0, n-1)
//! tick k        partition: pop (low, high), pivot = seq[high]
//!                          push (low, p-1)   if it has >= 2 elements
//!                          push (p+1, high)  if it has >= 2 elements
//!                          highlight {p}
//! empty stack   Terminal:  clear highlights
//! ```
//!
//! The left range is pushed first, so the right range is expanded first.

use tracing::{debug, trace};

use super::{assert_tickable, SortKind, StepOutcome, StepStats, Stepper};
use crate::sequence::{HighlightSet, Sequence};

/// Resumable quicksort with an explicit range stack
#[derive(Clone, Debug)]
pub struct QuickStepper {
    len: usize,
    /// Pending `(low, high)` ranges; `stack.len()` is the top-of-stack pointer
    stack: Vec<(usize, usize)>,
    /// Whether the initial range has been seeded
    started: bool,
    finished: bool,
    peak_depth: usize,
    stats: StepStats,
}

impl QuickStepper {
    /// Bind a new stepper to `sequence`
    ///
    /// Stack storage is reserved for the worst case up front.
    #[must_use]
    pub fn new<T>(sequence: &Sequence<T>) -> Self {
        let len = sequence.len();
        Self {
            len,
            stack: Vec::with_capacity(len),
            started: false,
            finished: false,
            peak_depth: 0,
            stats: StepStats::default(),
        }
    }

    /// Ranges currently waiting to be partitioned
    #[must_use]
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Deepest the stack has been during this run
    #[must_use]
    pub fn peak_stack_depth(&self) -> usize {
        self.peak_depth
    }

    /// Whether the seeding tick has happened
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Always [`SortKind::Quick`]
    #[must_use]
    pub fn kind(&self) -> SortKind {
        SortKind::Quick
    }

    /// Whether Terminal has been reported
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Counters for the run so far
    #[must_use]
    pub fn stats(&self) -> StepStats {
        self.stats
    }

    fn push(&mut self, low: usize, high: usize) {
        self.stack.push((low, high));
        self.peak_depth = self.peak_depth.max(self.stack.len());
    }

    /// Lomuto partition of `[low, high]` around `sequence[high]`
    ///
    /// Returns the pivot's final index.
    fn partition<T: PartialOrd>(
        &mut self,
        sequence: &mut Sequence<T>,
        low: usize,
        high: usize,
    ) -> usize {
        // Next slot for an element smaller than the pivot
        let mut boundary = low;

        // The pivot stays at `high` for the whole scan
        for j in low..high {
            self.stats.comparisons += 1;
            if sequence.get(j) < sequence.get(high) {
                if boundary != j {
                    sequence.swap(boundary, j);
                    self.stats.swaps += 1;
                }
                boundary += 1;
            }
        }

        if boundary != high {
            sequence.swap(boundary, high);
            self.stats.swaps += 1;
        }
        boundary
    }
}

impl<T: PartialOrd> Stepper<T> for QuickStepper {
    fn kind(&self) -> SortKind {
        QuickStepper::kind(self)
    }

    fn step(&mut self, sequence: &mut Sequence<T>) -> StepOutcome {
        assert_tickable(SortKind::Quick, self.finished, self.len, sequence.len());

        if !self.started {
            if self.len > 0 {
                self.push(0, self.len - 1);
            }
            self.started = true;
            self.stats.ticks += 1;
            trace!(len = self.len, "quicksort seeded");
            return StepOutcome::InProgress;
        }

        let Some((low, high)) = self.stack.pop() else {
            sequence.clear_highlights();
            self.finished = true;
            debug!(
                ticks = self.stats.ticks,
                swaps = self.stats.swaps,
                peak_depth = self.peak_depth,
                "quicksort finished"
            );
            return StepOutcome::Terminal;
        };

        let pivot = self.partition(sequence, low, high);

        // pivot - 1 > low, without underflow
        if pivot > low + 1 {
            self.push(low, pivot - 1);
        }
        if pivot + 1 < high {
            self.push(pivot + 1, high);
        }

        sequence.set_highlights(HighlightSet::single(pivot));
        trace!(low, high, pivot, depth = self.stack.len(), "partition");

        self.stats.ticks += 1;
        StepOutcome::InProgress
    }

    fn is_finished(&self) -> bool {
        QuickStepper::is_finished(self)
    }

    fn stats(&self) -> StepStats {
        QuickStepper::stats(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seeding_tick_does_not_partition() {
        let mut seq = Sequence::new(vec![5u32, 3, 4, 1, 2]);
        let mut stepper = QuickStepper::new(&seq);

        assert_eq!(stepper.step(&mut seq), StepOutcome::InProgress);
        assert!(stepper.is_started());
        assert_eq!(stepper.stack_depth(), 1);
        assert_eq!(seq.values(), &[5, 3, 4, 1, 2]);
        assert!(seq.highlights().is_empty());
        assert_eq!(stepper.stats().comparisons, 0);
    }

    #[test]
    fn test_reference_first_partition() {
        let mut seq = Sequence::new(vec![5u32, 3, 4, 1, 2]);
        let mut stepper = QuickStepper::new(&seq);
        stepper.step(&mut seq);

        stepper.step(&mut seq);

        // Pivot 2 lands at index 1; only (2, 4) is worth pushing
        assert_eq!(seq.values(), &[1, 2, 4, 5, 3]);
        assert_eq!(*seq.highlights(), HighlightSet::single(1));
        assert_eq!(stepper.stack, vec![(2, 4)]);
        assert_eq!(stepper.stats().comparisons, 4);
    }

    #[test]
    fn test_reference_full_run() {
        let mut seq = Sequence::new(vec![5u32, 3, 4, 1, 2]);
        let mut stepper = QuickStepper::new(&seq);
        let mut ticks = 0;
        while !stepper.step(&mut seq).is_terminal() {
            ticks += 1;
        }

        assert_eq!(seq.values(), &[1, 2, 3, 4, 5]);
        // seed + partitions of (0,4), (2,4), (3,4)
        assert_eq!(ticks, 4);
        assert!(seq.highlights().is_empty());
    }

    #[test]
    fn test_right_range_expanded_first() {
        // Pivot 4 splits into (0, 2) and (4, 6)
        let mut seq = Sequence::new(vec![7u32, 1, 6, 2, 5, 3, 4]);
        let mut stepper = QuickStepper::new(&seq);
        stepper.step(&mut seq);
        stepper.step(&mut seq);

        assert_eq!(*seq.highlights(), HighlightSet::single(3));
        assert_eq!(stepper.stack, vec![(0, 2), (4, 6)]);

        stepper.step(&mut seq);
        let pivot = seq.highlights().iter().next().unwrap_or_default();
        assert!((4..=6).contains(&pivot));
    }

    #[test]
    fn test_sorted_input_still_partitions() {
        let mut seq = Sequence::new(vec![1u32, 2, 3, 4, 5]);
        let mut stepper = QuickStepper::new(&seq);
        let mut partitions = 0;
        stepper.step(&mut seq);
        while !stepper.step(&mut seq).is_terminal() {
            partitions += 1;
        }

        assert_eq!(seq.values(), &[1, 2, 3, 4, 5]);
        // Worst case: every partition peels off only the pivot
        assert_eq!(partitions, 4);
        assert_eq!(stepper.stats().swaps, 0);
        assert!(stepper.peak_stack_depth() <= 5);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty = Sequence::<u32>::new(Vec::new());
        let mut stepper = QuickStepper::new(&empty);
        assert_eq!(stepper.step(&mut empty), StepOutcome::InProgress);
        assert_eq!(stepper.stack_depth(), 0);
        assert_eq!(stepper.step(&mut empty), StepOutcome::Terminal);

        let mut one = Sequence::new(vec![9u32]);
        let mut stepper = QuickStepper::new(&one);
        stepper.step(&mut one);
        assert_eq!(stepper.step(&mut one), StepOutcome::InProgress);
        assert_eq!(*one.highlights(), HighlightSet::single(0));
        assert_eq!(stepper.step(&mut one), StepOutcome::Terminal);
        assert!(one.highlights().is_empty());
    }

    #[test]
    fn test_duplicates_sorted() {
        let mut seq = Sequence::new(vec![3u32, 3, 1, 3, 1, 2, 2]);
        let mut stepper = QuickStepper::new(&seq);
        while !stepper.step(&mut seq).is_terminal() {}
        assert_eq!(seq.values(), &[1, 1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_accessors_need_no_element_type() {
        let mut seq = Sequence::new(vec![2u32, 1]);
        let mut stepper = QuickStepper::new(&seq);
        assert_eq!(stepper.kind(), SortKind::Quick);
        assert!(!stepper.is_finished());

        while !stepper.step(&mut seq).is_terminal() {}

        assert!(stepper.is_finished());
        assert_eq!(stepper.stats(), Stepper::<u32>::stats(&stepper));
        assert_eq!(stepper.stats().comparisons, 1);
    }

    #[test]
    #[should_panic(expected = "after reporting Terminal")]
    fn test_step_after_terminal_panics() {
        let mut seq = Sequence::new(vec![2u32, 1]);
        let mut stepper = QuickStepper::new(&seq);
        while !stepper.step(&mut seq).is_terminal() {}
        stepper.step(&mut seq);
    }
}
