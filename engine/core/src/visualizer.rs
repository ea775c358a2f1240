//! Visualizer - Control Surface Model
//!
//! Owns the sequence on screen, the generator that fills it, the pacer that
//! schedules ticks, and at most one active stepper. Surfaces translate user
//! input into calls here and render [`Visualizer::sequence`] afterwards.
//!
//! # Single Active Run
//!
//! Exactly one stepper may be bound to the sequence. While it is active,
//! every operation that would restructure or reorder the sequence is
//! rejected with [`ControlError::RunActive`]:
//!
//! | Operation            | Idle | Running |
//! |----------------------|------|---------|
//! | start (same kind)    | ok   | no-op   |
//! | start (other kind)   | ok   | rejected|
//! | regenerate / resize  | ok   | rejected|
//! | remove highlight     | ok   | rejected|
//! | adjust delay         | ok   | ok      |
//! | halt                 | no-op| ok      |

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::config::VisualizerConfig;
use crate::generator::{Generator, MAX_SIZE, MIN_SIZE};
use crate::schedule::{delay_in_range, Pacer, MAX_DELAY_MS, MIN_DELAY_MS};
use crate::sequence::Sequence;
use crate::stepper::{SortKind, StepOutcome, StepStats, Stepper};

/// Rejected control-surface operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    /// A run is active and the operation would disturb its sequence
    #[error("{kind} is running; wait for it to finish or halt it")]
    RunActive {
        /// The algorithm currently running
        kind: SortKind,
    },

    /// Requested array size is outside the allowed range
    #[error("array size {size} is outside {min}..={max}", min = MIN_SIZE, max = MAX_SIZE)]
    InvalidSize {
        /// The rejected size
        size: usize,
    },

    /// Requested delay is outside the allowed range
    #[error(
        "delay {delay_ms}ms is outside {min}..={max}",
        min = MIN_DELAY_MS,
        max = MAX_DELAY_MS
    )]
    InvalidDelay {
        /// The rejected delay
        delay_ms: u64,
    },
}

/// What [`Visualizer::start`] did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new run was bound and scheduled
    Started,
    /// A run of the same kind was already active; nothing changed
    AlreadyRunning,
}

/// Which controls a surface should offer right now
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlState {
    /// "Bubble sort" button
    pub start_bubble: bool,
    /// "Quick sort" button
    pub start_quick: bool,
    /// "Generate" button
    pub regenerate: bool,
    /// Size slider
    pub resize: bool,
    /// "Remove highlight" button
    pub remove_highlight: bool,
    /// Delay slider
    pub adjust_delay: bool,
    /// Halt / single-step controls
    pub halt: bool,
}

impl ControlState {
    fn for_running(running: bool) -> Self {
        Self {
            start_bubble: !running,
            start_quick: !running,
            regenerate: !running,
            resize: !running,
            remove_highlight: !running,
            adjust_delay: true,
            halt: running,
        }
    }
}

/// Summary of the most recent run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Algorithm that ran
    pub kind: SortKind,
    /// Counters at the end of the run
    pub stats: StepStats,
    /// `false` if the run was halted before Terminal
    pub completed: bool,
}

/// The control surface's view of the engine
pub struct Visualizer {
    sequence: Sequence<u32>,
    generator: Generator,
    pacer: Pacer,
    size: usize,
    active: Option<Box<dyn Stepper<u32>>>,
    last_run: Option<RunSummary>,
}

impl Visualizer {
    /// Build a visualizer from resolved configuration
    #[must_use]
    pub fn new(config: &VisualizerConfig) -> Self {
        let generator = config.seed.map_or_else(Generator::new, Generator::seeded);
        Self::with_generator(config.array_size, config.delay, generator)
    }

    /// Build a visualizer with an explicit generator
    ///
    /// `size` is clamped to the allowed range.
    #[must_use]
    pub fn with_generator(size: usize, delay: Duration, mut generator: Generator) -> Self {
        let size = size.clamp(MIN_SIZE, MAX_SIZE);
        let sequence = generator.generate(size);
        Self {
            sequence,
            generator,
            pacer: Pacer::new(delay),
            size,
            active: None,
            last_run: None,
        }
    }

    // =========================================================================
    // Runs
    // =========================================================================

    /// Bind a new stepper of `kind` and schedule its first tick
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::RunActive`] if a run of the *other* kind is
    /// active. A run of the same kind makes this a no-op.
    pub fn start(&mut self, kind: SortKind, now: Instant) -> Result<StartOutcome, ControlError> {
        if let Some(active) = self.active_kind() {
            if active == kind {
                debug!(%kind, "start ignored, already running");
                return Ok(StartOutcome::AlreadyRunning);
            }
            debug!(%kind, %active, "start rejected");
            return Err(ControlError::RunActive { kind: active });
        }

        self.active = Some(kind.stepper_for(&self.sequence));
        self.pacer.arm(now);
        info!(%kind, size = self.sequence.len(), "run started");
        Ok(StartOutcome::Started)
    }

    /// Tick the active run if the pacer says one is due at `now`
    ///
    /// Returns `None` when nothing ran (idle, or not yet due).
    pub fn tick(&mut self, now: Instant) -> Option<StepOutcome> {
        if self.active.is_none() || !self.pacer.poll(now) {
            return None;
        }
        self.advance()
    }

    /// Tick the active run immediately, ignoring the pacer
    pub fn step_now(&mut self) -> Option<StepOutcome> {
        self.advance()
    }

    /// Stop scheduling the active run and clear highlights
    ///
    /// The halted stepper is discarded; the sequence keeps its partially
    /// sorted order.
    pub fn halt(&mut self) -> Option<RunSummary> {
        if self.active.is_none() {
            return None;
        }
        self.finish(false)
    }

    fn advance(&mut self) -> Option<StepOutcome> {
        let stepper = self.active.as_mut()?;
        let outcome = stepper.step(&mut self.sequence);
        trace!(?outcome, highlights = self.sequence.highlights().len(), "tick");

        if outcome.is_terminal() {
            self.finish(true);
        }
        Some(outcome)
    }

    fn finish(&mut self, completed: bool) -> Option<RunSummary> {
        let stepper = self.active.take()?;
        self.pacer.disarm();
        self.sequence.clear_highlights();

        let summary = RunSummary {
            kind: stepper.kind(),
            stats: stepper.stats(),
            completed,
        };
        info!(
            kind = %summary.kind,
            completed,
            ticks = summary.stats.ticks,
            comparisons = summary.stats.comparisons,
            swaps = summary.stats.swaps,
            "run finished"
        );
        self.last_run = Some(summary);
        Some(summary)
    }

    // =========================================================================
    // Sequence Controls
    // =========================================================================

    /// Replace the sequence with fresh random values of the same size
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::RunActive`] while a run is active.
    pub fn regenerate(&mut self) -> Result<(), ControlError> {
        self.ensure_idle()?;
        self.sequence = self.generator.generate(self.size);
        debug!(size = self.size, "sequence regenerated");
        Ok(())
    }

    /// Change the array size; regenerates and clears highlights
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::RunActive`] while a run is active, or
    /// [`ControlError::InvalidSize`] outside 5..=100.
    pub fn set_size(&mut self, size: usize) -> Result<(), ControlError> {
        self.ensure_idle()?;
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(ControlError::InvalidSize { size });
        }
        self.size = size;
        self.sequence = self.generator.generate(size);
        debug!(size, "sequence resized");
        Ok(())
    }

    /// Change the delay between ticks; allowed during a run
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::InvalidDelay`] outside 1..=500 ms.
    pub fn set_delay_ms(&mut self, delay_ms: u64) -> Result<(), ControlError> {
        if !delay_in_range(delay_ms) {
            return Err(ControlError::InvalidDelay { delay_ms });
        }
        self.pacer.set_delay(Duration::from_millis(delay_ms));
        debug!(delay_ms, "delay changed");
        Ok(())
    }

    /// Remove highlights left on screen
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::RunActive`] while a run is active.
    pub fn clear_highlights(&mut self) -> Result<(), ControlError> {
        self.ensure_idle()?;
        self.sequence.clear_highlights();
        Ok(())
    }

    fn ensure_idle(&self) -> Result<(), ControlError> {
        match self.active_kind() {
            Some(kind) => {
                debug!(%kind, "control rejected during run");
                Err(ControlError::RunActive { kind })
            }
            None => Ok(()),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Sequence to render
    #[must_use]
    pub fn sequence(&self) -> &Sequence<u32> {
        &self.sequence
    }

    /// Kind of the active run, if any
    #[must_use]
    pub fn active_kind(&self) -> Option<SortKind> {
        self.active.as_ref().map(|s| s.kind())
    }

    /// Whether a run is active
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Counters of the active run
    #[must_use]
    pub fn active_stats(&self) -> Option<StepStats> {
        self.active.as_ref().map(|s| s.stats())
    }

    /// Most recently finished or halted run
    #[must_use]
    pub fn last_run(&self) -> Option<RunSummary> {
        self.last_run
    }

    /// Current array size
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current delay between ticks
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.pacer.delay()
    }

    /// When the next tick is due, if a run is scheduled
    #[must_use]
    pub fn next_tick_due(&self) -> Option<Instant> {
        self.pacer.next_due()
    }

    /// Which controls are enabled
    #[must_use]
    pub fn controls(&self) -> ControlState {
        ControlState::for_running(self.is_running())
    }
}

impl std::fmt::Debug for Visualizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Visualizer")
            .field("size", &self.size)
            .field("delay", &self.pacer.delay())
            .field("active", &self.active_kind())
            .field("last_run", &self.last_run)
            .finish_non_exhaustive()
    }
}
