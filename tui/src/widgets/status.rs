//! Status Line
//!
//! Run state, array size, delay, and either the latest notice or a summary
//! of the last finished run.

use std::time::{Duration, Instant};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use sortstep_core::{RunSummary, SortKind, StepStats};

use crate::theme::{DIM_GRAY, ERROR_RED, RUNNING_YELLOW, SUCCESS_GREEN, TEXT};

/// How long a notice stays on the status line
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Severity of a notice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A short-lived message shown on the status line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    pub expires: Instant,
}

impl Notice {
    pub fn info(text: impl Into<String>, now: Instant) -> Self {
        Self::new(text, NoticeLevel::Info, now)
    }

    pub fn error(text: impl Into<String>, now: Instant) -> Self {
        Self::new(text, NoticeLevel::Error, now)
    }

    fn new(text: impl Into<String>, level: NoticeLevel, now: Instant) -> Self {
        Self {
            text: text.into(),
            level,
            expires: now + NOTICE_TTL,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires
    }
}

/// Snapshot of everything the status line shows
#[derive(Clone, Debug)]
pub struct StatusLine<'a> {
    pub running: Option<(SortKind, StepStats)>,
    pub size: usize,
    pub delay: Duration,
    pub last_run: Option<RunSummary>,
    pub notice: Option<&'a Notice>,
}

impl StatusLine<'_> {
    fn spans(&self) -> Vec<Span<'static>> {
        let sep = || Span::styled("  |  ", Style::default().fg(DIM_GRAY));
        let mut spans = Vec::new();

        match self.running {
            Some((kind, stats)) => {
                spans.push(Span::styled(
                    format!("▶ {kind}"),
                    Style::default()
                        .fg(RUNNING_YELLOW)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(
                    format!(
                        "  tick {}  cmp {}  swaps {}",
                        stats.ticks, stats.comparisons, stats.swaps
                    ),
                    Style::default().fg(TEXT),
                ));
            }
            None => spans.push(Span::styled("Idle", Style::default().fg(TEXT))),
        }

        spans.push(sep());
        spans.push(Span::styled(
            format!("size {}  delay {}ms", self.size, self.delay.as_millis()),
            Style::default().fg(TEXT),
        ));

        if let Some(notice) = self.notice {
            let color = match notice.level {
                NoticeLevel::Info => TEXT,
                NoticeLevel::Error => ERROR_RED,
            };
            spans.push(sep());
            spans.push(Span::styled(notice.text.clone(), Style::default().fg(color)));
        } else if let Some(last) = self.last_run {
            spans.push(sep());
            spans.push(last_run_span(last));
        }

        spans
    }
}

fn last_run_span(last: RunSummary) -> Span<'static> {
    let (verb, color) = if last.completed {
        ("sorted", SUCCESS_GREEN)
    } else {
        ("halted", DIM_GRAY)
    };
    Span::styled(
        format!(
            "{} {verb} after {} ticks, {} comparisons, {} swaps",
            last.kind, last.stats.ticks, last.stats.comparisons, last.stats.swaps
        ),
        Style::default().fg(color),
    )
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_line(area.x, area.y, &Line::from(self.spans()), area.width);
    }
}
