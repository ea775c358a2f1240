//! Control Bar
//!
//! One line of key hints. Controls the visualizer currently rejects are
//! dimmed rather than hidden so the layout never jumps.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use sortstep_core::{ControlState, SortKind};

use crate::theme::{ACCENT, DIM_GRAY, RUNNING_YELLOW, TEXT};

/// A single key hint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hint {
    /// Key label
    pub key: &'static str,
    /// Action label
    pub label: &'static str,
    /// Whether the action is currently accepted
    pub enabled: bool,
    /// Whether this hint names the active run
    pub active: bool,
}

/// Key hints for the current control state
pub struct ControlBar {
    controls: ControlState,
    running: Option<SortKind>,
}

impl ControlBar {
    pub fn new(controls: ControlState, running: Option<SortKind>) -> Self {
        Self { controls, running }
    }

    /// Hints in display order
    pub fn hints(&self) -> Vec<Hint> {
        let c = self.controls;
        let hint = |key, label, enabled| Hint {
            key,
            label,
            enabled,
            active: false,
        };
        vec![
            Hint {
                active: self.running == Some(SortKind::Bubble),
                ..hint("b", "Bubble", c.start_bubble)
            },
            Hint {
                active: self.running == Some(SortKind::Quick),
                ..hint("q", "Quick", c.start_quick)
            },
            hint("g", "Generate", c.regenerate),
            hint("+/-", "Size", c.resize),
            hint("[/]", "Delay", c.adjust_delay),
            hint("h", "Unhighlight", c.remove_highlight),
            hint("space", "Step", c.halt),
            hint("x", "Halt", c.halt),
            hint("?", "Help", true),
            hint("esc", "Quit", true),
        ]
    }
}

impl Widget for ControlBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, h) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let (key_style, label_style) = if h.active {
                let style = Style::default()
                    .fg(RUNNING_YELLOW)
                    .add_modifier(Modifier::BOLD);
                (style, style)
            } else if h.enabled {
                (Style::default().fg(ACCENT), Style::default().fg(TEXT))
            } else {
                (Style::default().fg(DIM_GRAY), Style::default().fg(DIM_GRAY))
            };
            spans.push(Span::styled(format!("[{}]", h.key), key_style));
            spans.push(Span::styled(format!(" {}", h.label), label_style));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
