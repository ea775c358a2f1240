//! Sortstep Core - Step-wise Sorting Engine
//!
//! This crate runs sorting algorithms one observable step at a time so a
//! surface can draw every intermediate state. It has no timer of its own and
//! no dependency on any UI framework; the surface decides when to tick and
//! how to draw.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Surfaces                              │
//! │   ┌───────────────┐                  ┌─────────────────────┐  │
//! │   │  TUI (ratatui)│                  │  Headless / tests   │  │
//! │   └───────┬───────┘                  └──────────┬──────────┘  │
//! │           │  start / tick / halt / controls     │             │
//! └───────────┼─────────────────────────────────────┼─────────────┘
//!             │                                     │
//! ┌───────────┼─────────────────────────────────────┼─────────────┐
//! │           ▼            SORTSTEP CORE            ▼             │
//! │  ┌──────────────────────────────────────────────────────────┐ │
//! │  │                      Visualizer                           │ │
//! │  │  ┌───────────┐  ┌───────────┐  ┌─────────┐  ┌──────────┐ │ │
//! │  │  │ Sequence  │◄─│  Stepper  │  │  Pacer  │  │Generator │ │ │
//! │  │  │+Highlights│  │bubble/quick│ │ (delay) │  │  (rand)  │ │ │
//! │  │  └───────────┘  └───────────┘  └─────────┘  └──────────┘ │ │
//! │  └──────────────────────────────────────────────────────────┘ │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Sequence`]: The values being sorted plus the positions to highlight
//! - [`Stepper`]: A resumable sorting state machine ([`BubbleStepper`], [`QuickStepper`])
//! - [`Renderer`]: Anything that can draw a sequence snapshot
//! - [`Pacer`]: Decides when the next tick is due
//! - [`Visualizer`]: Control surface model enforcing one active run
//!
//! # Quick Start
//!
//! ```
//! use sortstep_core::{drive, HighlightSet, Sequence, SortKind};
//!
//! let mut sequence = Sequence::new(vec![5u32, 3, 4, 1, 2]);
//! let mut stepper = SortKind::Bubble.stepper_for(&sequence);
//!
//! let mut frames = 0;
//! let ticks = drive(stepper.as_mut(), &mut sequence, &mut |_: &[u32], _: &HighlightSet| {
//!     frames += 1;
//! });
//!
//! assert_eq!(sequence.values(), &[1, 2, 3, 4, 5]);
//! assert_eq!(ticks, 14);
//! assert_eq!(frames, 15);
//! ```
//!
//! # Module Overview
//!
//! - [`sequence`]: Sequence and highlight set
//! - [`stepper`]: Bubble and quick steppers plus the driver loop
//! - [`render`]: Renderer contract
//! - [`schedule`]: Tick pacing
//! - [`generator`]: Random sequences
//! - [`visualizer`]: Run guard and control state
//! - [`config`]: File, environment and CLI configuration
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod generator;
pub mod render;
pub mod schedule;
pub mod sequence;
pub mod stepper;
pub mod visualizer;

// Re-exports for convenience
pub use generator::{Generator, DEFAULT_SIZE, MAX_SIZE, MAX_VALUE, MIN_SIZE, MIN_VALUE};
pub use render::Renderer;
pub use schedule::{delay_in_range, Pacer, DEFAULT_DELAY_MS, MAX_DELAY_MS, MIN_DELAY_MS};
pub use sequence::{HighlightSet, Sequence};
pub use stepper::{drive, BubbleStepper, QuickStepper, SortKind, StepOutcome, StepStats, Stepper};
pub use visualizer::{ControlError, ControlState, RunSummary, StartOutcome, Visualizer};

// Config exports
pub use config::{
    default_config_path, load_config, load_config_from_path, ConfigError, ConfigOverrides,
    ConfigSource, SortstepToml, VisualizerConfig,
};
