//! Theme and Colors
//!
//! Highlighted bars are always pure red. Every other bar takes a hue from
//! its position, so the chart reads as a gradient once sorted. The gradient
//! avoids the red end of the wheel to keep highlights unambiguous.

use ratatui::style::Color;

// ============================================================================
// Bars
// ============================================================================

/// Bars under comparison or just placed
pub const HIGHLIGHT: Color = Color::Rgb(255, 0, 0);

/// First hue of the bar gradient (degrees)
const HUE_START: f64 = 40.0;

/// Span of the bar gradient (degrees); ends before wrapping back to red
const HUE_SPAN: f64 = 270.0;

const BAR_SATURATION: f64 = 0.65;
const BAR_VALUE: f64 = 0.95;

/// Color for the bar at `index` of `len`
#[must_use]
pub fn bar_color(index: usize, len: usize) -> Color {
    #[allow(clippy::cast_precision_loss)]
    let t = if len > 1 {
        index.min(len - 1) as f64 / (len - 1) as f64
    } else {
        0.0
    };
    hsv(HUE_START + t * HUE_SPAN, BAR_SATURATION, BAR_VALUE)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hsv(hue: f64, saturation: f64, value: f64) -> Color {
    let c = value * saturation;
    let h = (hue % 360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = value - c;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(channel(r), channel(g), channel(b))
}

// ============================================================================
// UI Colors
// ============================================================================

/// Key hints and accents
pub const ACCENT: Color = Color::Rgb(150, 180, 255);

/// Disabled controls and secondary text
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Regular text
pub const TEXT: Color = Color::Rgb(220, 220, 220);

/// Rejected actions
pub const ERROR_RED: Color = Color::Rgb(255, 80, 80);

/// Finished runs
pub const SUCCESS_GREEN: Color = Color::Rgb(120, 230, 120);

/// Active run label
pub const RUNNING_YELLOW: Color = Color::Rgb(255, 223, 128);

/// Help overlay background
pub const OVERLAY_BG: Color = Color::Rgb(30, 30, 40);
