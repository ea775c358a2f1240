//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin surface over the
//! [`Visualizer`]:
//! - Event loop (keyboard, resize)
//! - Pacer deadlines as the only timer
//! - Compositor layers for rendering
//!
//! # Event Loop
//!
//! A single `tokio::select!` waits on the terminal event stream and on the
//! next wake instant (pacer due, or notice expiry). Nothing polls on a fixed
//! frame interval; the loop only wakes when there is something to do.

use std::io;
use std::time::Instant;

use anyhow::Context;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Widget};
use ratatui::Terminal;
use tracing::{debug, info};

use sortstep_core::{
    ControlError, Renderer, SortKind, StartOutcome, StepOutcome, Visualizer, MAX_DELAY_MS,
    MAX_SIZE, MIN_DELAY_MS, MIN_SIZE,
};

use crate::compositor::{Compositor, LayerId};
use crate::theme::{OVERLAY_BG, TEXT};
use crate::widgets::{BarChart, ControlBar, Notice, StatusLine, TextBlock};

/// Rows reserved below the chart (control bar + status line)
const FOOTER_HEIGHT: u16 = 2;

/// Array size change per `+`/`-` press
const SIZE_STEP: usize = 5;

/// Widest the help overlay gets
const HELP_MAX_WIDTH: u16 = 60;

const HELP_TEXT: &str = "\
Watch a sorting algorithm work one step at a time. Red bars are the pair being compared, or the pivot just placed.

b        start bubble sort
q        start quicksort
space    advance the running sort by one step
x        halt the running sort
g        generate a new random array
+ / -    grow or shrink the array by 5
] / [    halve or double the delay between steps
h        remove leftover highlights
?        toggle this help
esc      quit

Arrays cannot be changed while a sort is running. Halt it first, or let it finish.";

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    /// The engine and its controls
    visualizer: Visualizer,

    // === UI Components ===
    /// The layered compositor
    compositor: Compositor,
    /// Layer assignments
    layers: AppLayers,

    // === Transient State ===
    /// Latest feedback for the status line
    notice: Option<Notice>,
    /// Whether the help overlay is shown
    show_help: bool,
    /// Terminal size
    size: (u16, u16),
}

/// Layer IDs for UI regions
struct AppLayers {
    bars: LayerId,
    controls: LayerId,
    status: LayerId,
    help: LayerId,
}

impl App {
    /// Create a new App for a terminal of `area`
    pub fn new(visualizer: Visualizer, area: Rect) -> Self {
        let mut compositor = Compositor::new(area);

        let bars = compositor.create_layer(Rect::default(), 0);
        let controls = compositor.create_layer(Rect::default(), 10);
        let status = compositor.create_layer(Rect::default(), 10);
        let help = compositor.create_layer(Rect::default(), 50);
        compositor.set_visible(help, false);

        let mut app = Self {
            running: true,
            visualizer,
            compositor,
            layers: AppLayers {
                bars,
                controls,
                status,
                help,
            },
            notice: None,
            show_help: false,
            size: (area.width, area.height),
        };
        app.layout();
        app
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        // Render initial frame immediately so user sees UI
        self.draw(terminal)?;

        while self.running {
            let wake = self.next_wake();

            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => match maybe_event {
                    // Only handle Press events (not Release or Repeat)
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key, Instant::now());
                    }
                    Some(Ok(Event::Resize(w, h))) => self.handle_resize(w, h),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e).context("reading terminal events"),
                    None => self.running = false,
                },

                // Pacer or notice deadline
                () = sleep_until(wake) => self.on_tick(Instant::now()),
            }

            self.draw(terminal)?;
        }

        Ok(())
    }

    /// Earliest instant the loop must wake without input
    pub fn next_wake(&self) -> Option<Instant> {
        let notice = self.notice.as_ref().map(|n| n.expires);
        match (self.visualizer.next_tick_due(), notice) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Advance timers to `now`
    pub fn on_tick(&mut self, now: Instant) {
        if self.visualizer.tick(now) == Some(StepOutcome::Terminal) {
            self.announce_finish(now);
        }
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        let result = match key.code {
            KeyCode::Esc if self.show_help => {
                self.toggle_help();
                Ok(())
            }
            KeyCode::Esc => {
                self.quit();
                Ok(())
            }
            KeyCode::Char('b') => self.start(SortKind::Bubble, now),
            KeyCode::Char('q') => self.start(SortKind::Quick, now),
            KeyCode::Char('g') => self.visualizer.regenerate(),
            KeyCode::Char('+' | '=') => self.resize_array(true),
            KeyCode::Char('-') => self.resize_array(false),
            KeyCode::Char(']') => self.change_delay(true),
            KeyCode::Char('[') => self.change_delay(false),
            KeyCode::Char('h') => self.visualizer.clear_highlights(),
            KeyCode::Char(' ') => {
                self.single_step(now);
                Ok(())
            }
            KeyCode::Char('x') => {
                self.halt(now);
                Ok(())
            }
            KeyCode::Char('?') => {
                self.toggle_help();
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            debug!(error = %e, "control rejected");
            self.notice = Some(Notice::error(e.to_string(), now));
        }
    }

    /// Handle terminal resize
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "terminal resized");
        self.size = (width, height);
        self.compositor.resize(Rect::new(0, 0, width, height));
        self.layout();
    }

    /// Render every layer and composite them
    pub fn compose(&mut self) -> &Buffer {
        self.render_bars();
        self.render_controls();
        self.render_status();
        if self.show_help {
            self.render_help();
        }
        self.compositor.composite()
    }

    /// The engine behind this surface
    pub fn visualizer(&self) -> &Visualizer {
        &self.visualizer
    }

    /// Current status-line notice
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Whether the help overlay is shown
    pub fn help_visible(&self) -> bool {
        self.show_help
    }

    /// Whether the event loop should exit
    pub fn should_quit(&self) -> bool {
        !self.running
    }

    // =========================================================================
    // Controls
    // =========================================================================

    fn start(&mut self, kind: SortKind, now: Instant) -> Result<(), ControlError> {
        if self.visualizer.start(kind, now)? == StartOutcome::Started {
            self.notice = None;
        }
        Ok(())
    }

    fn single_step(&mut self, now: Instant) {
        match self.visualizer.step_now() {
            Some(StepOutcome::Terminal) => self.announce_finish(now),
            Some(StepOutcome::InProgress) => {}
            None => self.notice = Some(Notice::info("No sort is running", now)),
        }
    }

    fn halt(&mut self, now: Instant) {
        if let Some(summary) = self.visualizer.halt() {
            self.notice = Some(Notice::info(format!("{} halted", summary.kind), now));
        }
    }

    fn resize_array(&mut self, grow: bool) -> Result<(), ControlError> {
        let current = self.visualizer.size();
        let next = if grow {
            (current + SIZE_STEP).min(MAX_SIZE)
        } else {
            current.saturating_sub(SIZE_STEP).max(MIN_SIZE)
        };
        if next == current {
            return Ok(());
        }
        self.visualizer.set_size(next)
    }

    /// `faster` halves the delay, otherwise it doubles
    fn change_delay(&mut self, faster: bool) -> Result<(), ControlError> {
        let current = u64::try_from(self.visualizer.delay().as_millis()).unwrap_or(MAX_DELAY_MS);
        let next = if faster {
            (current / 2).max(MIN_DELAY_MS)
        } else {
            current.saturating_mul(2).min(MAX_DELAY_MS)
        };
        self.visualizer.set_delay_ms(next)
    }

    fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.compositor.set_visible(self.layers.help, self.show_help);
    }

    fn quit(&mut self) {
        info!("quit requested");
        self.visualizer.halt();
        self.running = false;
    }

    fn announce_finish(&mut self, now: Instant) {
        if let Some(last) = self.visualizer.last_run() {
            self.notice = Some(Notice::info(
                format!("{} finished in {} steps", last.kind, last.stats.ticks),
                now,
            ));
        }
    }

    // =========================================================================
    // Layout & Rendering
    // =========================================================================

    /// Place every layer for the current terminal size
    fn layout(&mut self) {
        let (width, height) = self.size;
        let chart_height = height.saturating_sub(FOOTER_HEIGHT);

        self.compositor
            .place_layer(self.layers.bars, Rect::new(0, 0, width, chart_height));
        self.compositor.place_layer(
            self.layers.controls,
            Rect::new(0, height.saturating_sub(2), width, height.min(1)),
        );
        self.compositor.place_layer(
            self.layers.status,
            Rect::new(0, height.saturating_sub(1), width, height.min(1)),
        );

        let help_width = width.saturating_sub(4).min(HELP_MAX_WIDTH);
        let help_height = (TextBlock::new(HELP_TEXT).height_for(help_width.saturating_sub(2)) + 2)
            .min(chart_height);
        self.compositor.place_layer(
            self.layers.help,
            Rect::new(
                (width - help_width) / 2,
                (chart_height - help_height) / 2,
                help_width,
                help_height,
            ),
        );
    }

    fn render_bars(&mut self) {
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.bars) {
            let sequence = self.visualizer.sequence();
            BarChart::new(buf).render(sequence.values(), sequence.highlights());
        }
    }

    fn render_controls(&mut self) {
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.controls) {
            buf.reset();
            let area = buf.area;
            ControlBar::new(self.visualizer.controls(), self.visualizer.active_kind())
                .render(area, buf);
        }
    }

    fn render_status(&mut self) {
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.status) {
            buf.reset();
            let area = buf.area;
            let running = self
                .visualizer
                .active_kind()
                .zip(self.visualizer.active_stats());
            StatusLine {
                running,
                size: self.visualizer.size(),
                delay: self.visualizer.delay(),
                last_run: self.visualizer.last_run(),
                notice: self.notice.as_ref(),
            }
            .render(area, buf);
        }
    }

    fn render_help(&mut self) {
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.help) {
            buf.reset();
            let area = buf.area;
            let style = Style::default().bg(OVERLAY_BG).fg(TEXT);
            let block = Block::default()
                .borders(Borders::ALL)
                .title(" sortstep ")
                .style(style);
            let inner = block.inner(area);
            block.render(area, buf);
            TextBlock::new(HELP_TEXT).style(style).render(inner, buf);
        }
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
        let output = self.compose();
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            for y in 0..area.height.min(output.area.height) {
                for x in 0..area.width.min(output.area.width) {
                    buf[(x, y)] = output[(x, y)].clone();
                }
            }
        })?;
        Ok(())
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await,
        None => std::future::pending().await,
    }
}
