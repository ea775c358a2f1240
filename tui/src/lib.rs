//! Sortstep TUI - Terminal surface for the stepping engine
//!
//! Draws the sequence as vertical bars and lets the user start, pace, and
//! halt sorting runs from the keyboard.
//!
//! # Architecture
//!
//! - **App**: tokio event loop; terminal events and pacer deadlines
//! - **Compositor**: Layered rendering (bars, controls, status, help overlay)
//! - **Widgets**: Bar chart renderer, control bar, status line, text block
//! - **Theme**: Highlight red and the position-derived bar palette

pub mod app;
pub mod compositor;
pub mod theme;
pub mod widgets;

pub use app::App;
