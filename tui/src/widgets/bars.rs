//! Bar Chart Renderer
//!
//! Draws a sequence as vertical bars, one per element, with heights
//! proportional to value. Partial cells use eighth-block glyphs so small
//! differences stay visible on short terminals.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use sortstep_core::{HighlightSet, Renderer, MAX_VALUE};

use crate::theme::{bar_color, HIGHLIGHT};

/// Glyphs for the top cell of a bar, indexed by eighths filled
const PARTIAL: [&str; 8] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇"];
const FULL: &str = "█";

/// Renders sequence snapshots into a buffer
pub struct BarChart<'a> {
    buf: &'a mut Buffer,
}

impl<'a> BarChart<'a> {
    /// Chart drawing into the whole of `buf`
    pub fn new(buf: &'a mut Buffer) -> Self {
        Self { buf }
    }
}

impl Renderer<u32> for BarChart<'_> {
    fn render(&mut self, values: &[u32], highlights: &HighlightSet) {
        self.buf.reset();
        let area = self.buf.area;
        if values.is_empty() || area.is_empty() {
            return;
        }

        let geometry = BarGeometry::new(area, values.len());
        for (index, &value) in values.iter().enumerate() {
            let Some(x) = geometry.column(index) else {
                break;
            };
            let color = if highlights.contains(index) {
                HIGHLIGHT
            } else {
                bar_color(index, values.len())
            };
            let eighths = bar_eighths(value, MAX_VALUE, area.height);
            for dx in 0..geometry.draw_width {
                draw_column(self.buf, area, x + dx, eighths, color);
            }
        }
    }
}

/// Horizontal layout of the bars within an area
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarGeometry {
    /// Columns per bar including the gap
    pub slot_width: u16,
    /// Columns actually filled per bar
    pub draw_width: u16,
    /// First column of the first bar
    pub left: u16,
    /// One past the last usable column
    pub right: u16,
}

impl BarGeometry {
    /// Fit `count` bars into `area`
    ///
    /// Bars narrower than three columns get no gap. When there are more bars
    /// than columns each bar gets one column and the tail is clipped.
    #[must_use]
    pub fn new(area: Rect, count: usize) -> Self {
        let count_u16 = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
        let slot_width = (area.width / count_u16).max(1);
        let gap = u16::from(slot_width >= 3);
        let used = slot_width.saturating_mul(count_u16).min(area.width);
        Self {
            slot_width,
            draw_width: slot_width - gap,
            left: area.x + (area.width - used) / 2,
            right: area.right(),
        }
    }

    /// Left column of bar `index`, or `None` if it does not fit
    #[must_use]
    pub fn column(&self, index: usize) -> Option<u16> {
        let offset = u16::try_from(index).ok()?.checked_mul(self.slot_width)?;
        let x = self.left.checked_add(offset)?;
        (x < self.right).then_some(x)
    }
}

/// Bar height in eighths of a cell; any nonzero value shows at least a sliver
#[must_use]
pub fn bar_eighths(value: u32, max_value: u32, height: u16) -> u32 {
    let max_value = max_value.max(1);
    let value = value.min(max_value);
    let eighths = u64::from(value) * u64::from(height) * 8 / u64::from(max_value);
    let eighths = u32::try_from(eighths).unwrap_or(u32::MAX);
    if value > 0 {
        eighths.max(1)
    } else {
        0
    }
}

fn draw_column(buf: &mut Buffer, area: Rect, x: u16, eighths: u32, color: Color) {
    let style = Style::default().fg(color);
    let full = u16::try_from(eighths / 8).unwrap_or(u16::MAX).min(area.height);
    let partial = (eighths % 8) as usize;

    for k in 0..full {
        buf.set_string(x, area.bottom() - 1 - k, FULL, style);
    }
    if partial > 0 && full < area.height {
        buf.set_string(x, area.bottom() - 1 - full, PARTIAL[partial], style);
    }
}
