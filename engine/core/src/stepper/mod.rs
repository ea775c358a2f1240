//! Steppers - Resumable Sorting State Machines
//!
//! A stepper holds one sorting algorithm's paused execution state. Each call
//! to [`Stepper::step`] performs exactly one externally visible unit of work
//! against a [`Sequence`] and reports whether the run has finished.
//!
//! # Lifecycle
//!
//! ```text
//! new(&sequence) ──► step() ──► step() ──► ... ──► step() == Terminal
//!     (bound to len)   InProgress                   highlights cleared
//! ```
//!
//! A stepper is single-use. Ticking it again after it reported
//! [`StepOutcome::Terminal`], or against a sequence whose length differs
//! from the one it was bound to, is a programming error and panics.

mod bubble;
mod quick;

pub use bubble::BubbleStepper;
pub use quick::QuickStepper;

use crate::render::Renderer;
use crate::sequence::Sequence;

/// Result of a single tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// More work remains; keep scheduling ticks
    InProgress,
    /// The sequence is sorted and highlights are cleared
    Terminal,
}

impl StepOutcome {
    /// Whether this outcome ends the run
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Terminal)
    }
}

/// Which sorting algorithm a stepper runs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKind {
    /// Adjacent-swap bubble sort, one comparison per tick
    Bubble,
    /// Lomuto quicksort over an explicit stack, one partition per tick
    Quick,
}

impl SortKind {
    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Quick => "Quick Sort",
        }
    }

    /// Build a fresh stepper of this kind bound to `sequence`
    #[must_use]
    pub fn stepper_for<T: PartialOrd + 'static>(
        self,
        sequence: &Sequence<T>,
    ) -> Box<dyn Stepper<T>> {
        match self {
            Self::Bubble => Box::new(BubbleStepper::new(sequence)),
            Self::Quick => Box::new(QuickStepper::new(sequence)),
        }
    }
}

impl std::fmt::Display for SortKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Counters accumulated over one run
///
/// Informational only; no stepper reads them to make a decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Ticks that reported [`StepOutcome::InProgress`]
    pub ticks: u64,
    /// Element comparisons performed
    pub comparisons: u64,
    /// Swaps that actually exchanged two positions
    pub swaps: u64,
}

/// A resumable sorting state machine
pub trait Stepper<T: PartialOrd> {
    /// The algorithm this stepper runs
    fn kind(&self) -> SortKind;

    /// Advance by one unit of work
    ///
    /// # Panics
    ///
    /// Panics if called after [`StepOutcome::Terminal`] was reported, or if
    /// `sequence` no longer has the length the stepper was bound to.
    fn step(&mut self, sequence: &mut Sequence<T>) -> StepOutcome;

    /// Whether Terminal has been reported
    fn is_finished(&self) -> bool;

    /// Counters for the run so far
    fn stats(&self) -> StepStats;
}

/// Run `stepper` to completion, rendering after every tick
///
/// Returns the number of [`StepOutcome::InProgress`] ticks. The renderer also
/// sees the final frame, whose highlight set is empty.
pub fn drive<T, S, R>(stepper: &mut S, sequence: &mut Sequence<T>, renderer: &mut R) -> u64
where
    T: PartialOrd,
    S: Stepper<T> + ?Sized,
    R: Renderer<T> + ?Sized,
{
    let mut ticks = 0;
    loop {
        let outcome = stepper.step(sequence);
        renderer.render(sequence.values(), sequence.highlights());
        if outcome.is_terminal() {
            return ticks;
        }
        ticks += 1;
    }
}

/// Fail fast when the single-active-stepper contract was broken
pub(crate) fn assert_tickable(kind: SortKind, finished: bool, bound_len: usize, len: usize) {
    assert!(!finished, "{kind} stepper ticked after reporting Terminal");
    assert_eq!(
        len, bound_len,
        "sequence length changed while a {kind} stepper was bound"
    );
}
