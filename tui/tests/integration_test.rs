//! Integration Tests for the TUI surface
//!
//! These tests drive [`App`] the way the event loop does (key events,
//! resizes, pacer deadlines) and inspect the composited buffer. No terminal
//! is needed.
//!
//! # Test Coverage
//!
//! 1. **Rendering**: Highlighted bars are red, the rest follow the gradient
//! 2. **Run Guard**: Rejected controls surface as status-line notices
//! 3. **Controls**: Size and delay keys clamp at their limits
//! 4. **Overlay & Quit**: Help toggles, Esc and Ctrl-C exit
//! 5. **Paced Run**: A full run driven by real deadlines

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use sortstep_core::{Generator, SortKind, Visualizer, MAX_SIZE, MIN_SIZE};
use sortstep_tui::theme::{bar_color, HIGHLIGHT};
use sortstep_tui::widgets::{BarGeometry, NoticeLevel};
use sortstep_tui::App;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;
const CHART_HEIGHT: u16 = HEIGHT - 2;

// ============================================================================
// Helpers
// ============================================================================

fn app_with(size: usize, delay_ms: u64) -> App {
    let visualizer = Visualizer::with_generator(
        size,
        Duration::from_millis(delay_ms),
        Generator::seeded(2024),
    );
    App::new(visualizer, Rect::new(0, 0, WIDTH, HEIGHT))
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
}

fn char_key(app: &mut App, c: char) {
    press(app, KeyCode::Char(c));
}

/// Indices of bars whose bottom cell is drawn in the highlight color
fn red_bars(buf: &Buffer, count: usize) -> Vec<usize> {
    let geometry = BarGeometry::new(Rect::new(0, 0, WIDTH, CHART_HEIGHT), count);
    (0..count)
        .filter(|&i| {
            let x = geometry.column(i).unwrap();
            buf[(x, CHART_HEIGHT - 1)].fg == HIGHLIGHT
        })
        .collect()
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_idle_chart_has_no_red_bars() {
    let mut app = app_with(10, 400);
    let buf = app.compose().clone();

    assert!(red_bars(&buf, 10).is_empty());
    let geometry = BarGeometry::new(Rect::new(0, 0, WIDTH, CHART_HEIGHT), 10);
    let x = geometry.column(3).unwrap();
    assert_eq!(buf[(x, CHART_HEIGHT - 1)].fg, bar_color(3, 10));
}

#[test]
fn test_compared_pair_rendered_red() {
    let mut app = app_with(10, 400);
    char_key(&mut app, 'b');
    char_key(&mut app, ' ');

    let buf = app.compose().clone();
    assert_eq!(red_bars(&buf, 10), vec![0, 1]);
}

#[test]
fn test_finished_run_clears_red() {
    let mut app = app_with(5, 400);
    char_key(&mut app, 'q');
    while app.visualizer().is_running() {
        char_key(&mut app, ' ');
    }

    let buf = app.compose().clone();
    assert!(red_bars(&buf, 5).is_empty());
    assert!(app.visualizer().sequence().is_sorted());
    assert!(app.notice().unwrap().text.contains("Quick Sort finished"));
}

#[test]
fn test_status_line_shows_running_kind() {
    let mut app = app_with(10, 400);
    char_key(&mut app, 'q');

    let buf = app.compose().clone();
    assert!(row_text(&buf, HEIGHT - 1).contains("Quick Sort"));
}

// ============================================================================
// Run Guard
// ============================================================================

#[test]
fn test_regenerate_during_run_rejected() {
    let mut app = app_with(10, 400);
    char_key(&mut app, 'b');
    let before = app.visualizer().sequence().values().to_vec();

    char_key(&mut app, 'g');

    assert_eq!(app.visualizer().sequence().values(), before.as_slice());
    let notice = app.notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.text.contains("Bubble Sort is running"));
}

#[test]
fn test_other_kind_start_rejected() {
    let mut app = app_with(10, 400);
    char_key(&mut app, 'b');
    char_key(&mut app, 'q');

    assert_eq!(app.visualizer().active_kind(), Some(SortKind::Bubble));
    assert_eq!(app.notice().unwrap().level, NoticeLevel::Error);
}

#[test]
fn test_halt_then_controls_work_again() {
    let mut app = app_with(10, 400);
    char_key(&mut app, 'b');
    char_key(&mut app, ' ');
    char_key(&mut app, 'x');

    assert!(!app.visualizer().is_running());
    char_key(&mut app, 'h');
    char_key(&mut app, 'g');
    assert_eq!(app.notice().unwrap().level, NoticeLevel::Info);
}

#[test]
fn test_step_without_run_is_a_notice() {
    let mut app = app_with(10, 400);
    char_key(&mut app, ' ');
    assert_eq!(app.notice().unwrap().text, "No sort is running");
}

// ============================================================================
// Controls
// ============================================================================

#[test]
fn test_size_keys_step_and_clamp() {
    let mut app = app_with(10, 400);
    char_key(&mut app, '+');
    assert_eq!(app.visualizer().size(), 15);
    char_key(&mut app, '-');
    char_key(&mut app, '-');
    assert_eq!(app.visualizer().size(), MIN_SIZE);
    char_key(&mut app, '-');
    assert_eq!(app.visualizer().size(), MIN_SIZE);

    let mut big = app_with(MAX_SIZE, 400);
    char_key(&mut big, '+');
    assert_eq!(big.visualizer().size(), MAX_SIZE);
    assert!(big.notice().is_none());
}

#[test]
fn test_delay_keys_halve_and_double() {
    let mut app = app_with(10, 400);
    char_key(&mut app, ']');
    assert_eq!(app.visualizer().delay(), Duration::from_millis(200));
    char_key(&mut app, '[');
    char_key(&mut app, '[');
    assert_eq!(app.visualizer().delay(), Duration::from_millis(500));

    let mut fast = app_with(10, 1);
    char_key(&mut fast, ']');
    assert_eq!(fast.visualizer().delay(), Duration::from_millis(1));
}

#[test]
fn test_delay_adjustable_mid_run() {
    let mut app = app_with(10, 400);
    char_key(&mut app, 'b');
    char_key(&mut app, ']');
    assert_eq!(app.visualizer().delay(), Duration::from_millis(200));
    assert!(app.notice().is_none());
}

// ============================================================================
// Overlay & Quit
// ============================================================================

#[test]
fn test_help_overlay_toggles() {
    let mut app = app_with(10, 400);
    char_key(&mut app, '?');
    assert!(app.help_visible());

    let buf = app.compose().clone();
    let text: String = (0..CHART_HEIGHT).map(|y| row_text(&buf, y)).collect();
    assert!(text.contains("start bubble sort"));

    press(&mut app, KeyCode::Esc);
    assert!(!app.help_visible());
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits_and_halts() {
    let mut app = app_with(10, 400);
    char_key(&mut app, 'q');
    app.handle_key(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        Instant::now(),
    );

    assert!(app.should_quit());
    assert!(!app.visualizer().is_running());
}

#[test]
fn test_resize_relayouts() {
    let mut app = app_with(10, 400);
    app.handle_resize(40, 10);

    let buf = app.compose().clone();
    assert_eq!(buf.area, Rect::new(0, 0, 40, 10));
    assert!(row_text(&buf, 9).contains("Idle"));
}

// ============================================================================
// Paced Run
// ============================================================================

#[tokio::test]
async fn test_paced_run_completes() {
    let mut app = app_with(6, 1);
    char_key(&mut app, 'b');

    while app.visualizer().is_running() {
        let wake = app.next_wake().expect("running app has a deadline");
        tokio::time::sleep_until(tokio::time::Instant::from_std(wake)).await;
        app.on_tick(Instant::now());
    }

    let last = app.visualizer().last_run().unwrap();
    assert!(last.completed);
    assert_eq!(last.stats.ticks, 6 * 5 / 2 + 5);
    assert!(app.visualizer().sequence().is_sorted());
}

#[test]
fn test_notice_expires_on_tick() {
    let mut app = app_with(10, 400);
    char_key(&mut app, ' ');
    let expires = app.notice().unwrap().expires;
    assert_eq!(app.next_wake(), Some(expires));

    app.on_tick(expires);
    assert!(app.notice().is_none());
    assert_eq!(app.next_wake(), None);
}
