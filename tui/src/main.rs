//! Sortstep TUI Entry Point
//!
//! Launches the terminal surface for the stepping engine.
//!
//! # Usage
//!
//! ```bash
//! # Defaults (10 elements, 400 ms per step)
//! sortstep
//!
//! # Bigger, faster, reproducible
//! sortstep --size 60 --delay-ms 20 --seed 7
//!
//! # Explicit config file
//! sortstep --config ./sortstep.toml
//!
//! # Verbose logging (stderr)
//! RUST_LOG=debug sortstep 2> sortstep.log
//! ```

use std::io::{self, IsTerminal};
use std::panic;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sortstep_core::{
    default_config_path, load_config_from_path, ConfigOverrides, Visualizer, VisualizerConfig,
};
use sortstep_tui::App;

/// Sortstep - watch sorting algorithms work one step at a time
#[derive(Parser, Debug)]
#[command(name = "sortstep")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of elements to sort (5-100)
    #[arg(short = 's', long, value_name = "N")]
    size: Option<usize>,

    /// Delay between steps in milliseconds (1-500)
    #[arg(short = 'd', long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Seed for reproducible arrays
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Configuration file path
    #[arg(short = 'c', long, env = "SORTSTEP_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::new();
        if let Some(size) = self.size {
            overrides = overrides.with_array_size(size);
        }
        if let Some(ms) = self.delay_ms {
            overrides = overrides.with_delay_ms(ms);
        }
        if let Some(seed) = self.seed {
            overrides = overrides.with_seed(seed);
        }
        overrides
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the alternate screen stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = resolve_config(&args)?;

    // Check if we have a TTY before attempting initialization
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: sortstep requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means stdin or stdout is piped, or the session");
        eprintln!("is non-interactive (CI, container, ssh without -t).");
        std::process::exit(1);
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Propagate any errors
    result
}

/// Defaults < config file < environment < command line
fn resolve_config(args: &Args) -> anyhow::Result<VisualizerConfig> {
    let path = args.config.clone().or_else(default_config_path);
    let mut config = load_config_from_path(path).context("loading configuration")?;
    args.overrides()
        .apply(&mut config)
        .context("applying command-line options")?;

    info!(
        size = config.array_size,
        delay_ms = u64::try_from(config.delay.as_millis()).unwrap_or(u64::MAX),
        seed = ?config.seed,
        source = %config.source(),
        "configuration resolved"
    );
    Ok(config)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &VisualizerConfig,
) -> anyhow::Result<()> {
    let (width, height) = crossterm::terminal::size().context("reading terminal size")?;
    let mut app = App::new(Visualizer::new(config), Rect::new(0, 0, width, height));
    app.run(terminal).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["sortstep", "--size", "40", "-d", "25", "--seed", "3"]);
        assert_eq!(args.size, Some(40));
        assert_eq!(args.delay_ms, Some(25));
        assert_eq!(args.seed, Some(3));
    }

    #[test]
    fn test_overrides_applied() {
        let args = Args::parse_from(["sortstep", "--size", "40"]);
        let mut config = VisualizerConfig::default();
        args.overrides().apply(&mut config).unwrap();
        assert_eq!(config.array_size, 40);
    }

    #[test]
    fn test_args_reject_garbage() {
        assert!(Args::try_parse_from(["sortstep", "--size", "lots"]).is_err());
    }
}
