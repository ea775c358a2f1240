//! Bubble Sort Stepper
//!
//! One comparison per tick, plus one bookkeeping tick at the end of every
//! pass. For a sequence of length `n` the stepper reports
//! `n·(n-1)/2 + (n-1)` InProgress ticks before Terminal.
//!
//! # Highlight gap
//!
//! On the tick right after a swap the comparison pair is *not*
//! re-highlighted; the previous pair stays on screen. This skips one visible
//! pair per swap and is kept deliberately so frame sequences stay
//! identical to the long-standing visual behavior.

use tracing::{debug, trace};

use super::{assert_tickable, SortKind, StepOutcome, StepStats, Stepper};
use crate::sequence::{HighlightSet, Sequence};

/// Resumable bubble sort
#[derive(Clone, Debug)]
pub struct BubbleStepper {
    /// Length of the sequence this stepper is bound to
    len: usize,
    /// Largest elements already settled at the end
    outer: usize,
    /// Left index of the next comparison
    inner: usize,
    /// Whether the previous comparison swapped
    just_swapped: bool,
    finished: bool,
    stats: StepStats,
}

impl BubbleStepper {
    /// Bind a new stepper to `sequence`
    #[must_use]
    pub fn new<T>(sequence: &Sequence<T>) -> Self {
        Self {
            len: sequence.len(),
            outer: 0,
            inner: 0,
            just_swapped: false,
            finished: false,
            stats: StepStats::default(),
        }
    }

    /// Number of settled passes
    #[must_use]
    pub fn outer(&self) -> usize {
        self.outer
    }

    /// Left index of the next comparison
    #[must_use]
    pub fn inner(&self) -> usize {
        self.inner
    }

    /// Always [`SortKind::Bubble`]
    #[must_use]
    pub fn kind(&self) -> SortKind {
        SortKind::Bubble
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
}

impl<T: PartialOrd> Stepper<T> for BubbleStepper {
    fn kind(&self) -> SortKind {
        BubbleStepper::kind(self)
    }

    fn step(&mut self, sequence: &mut Sequence<T>) -> StepOutcome {
        assert_tickable(SortKind::Bubble, self.finished, self.len, sequence.len());

        // outer >= n - 1, written so n == 0 cannot underflow
        if self.outer + 1 >= self.len {
            sequence.clear_highlights();
            self.finished = true;
            debug!(ticks = self.stats.ticks, swaps = self.stats.swaps, "bubble sort finished");
            return StepOutcome::Terminal;
        }

        let pass_end = self.len - self.outer - 1;
        if self.inner < pass_end {
            let j = self.inner;
            if !self.just_swapped {
                sequence.set_highlights(HighlightSet::pair(j, j + 1));
            }

            self.stats.comparisons += 1;
            self.just_swapped = sequence.get(j) > sequence.get(j + 1);
            if self.just_swapped {
                sequence.swap(j, j + 1);
                self.stats.swaps += 1;
            }
            trace!(outer = self.outer, inner = j, swapped = self.just_swapped, "compare");

            self.inner += 1;
        } else {
            // End of pass: bookkeeping only, no comparison
            sequence.clear_highlights();
            self.inner = 0;
            self.outer += 1;
            trace!(outer = self.outer, "pass settled");
        }

        self.stats.ticks += 1;
        StepOutcome::InProgress
    }

    fn is_finished(&self) -> bool {
        BubbleStepper::is_finished(self)
    }

    fn stats(&self) -> StepStats {
        BubbleStepper::stats(self)
    }
}
