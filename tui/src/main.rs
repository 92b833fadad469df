//! NovaCloud TUI Entry Point
//!
//! Full-screen preview of the landing page: rotating hero and testimonials
//! headings plus the feature, review and pricing panels.
//!
//! # Usage
//!
//! ```bash
//! # Start with defaults
//! novacloud-tui
//!
//! # With config file
//! novacloud-tui --config ~/.config/novacloud/landing.toml
//!
//! # Force the light theme (persisted like a toggle)
//! novacloud-tui --theme light
//!
//! # Verbose logging (written to the log file, not the terminal)
//! RUST_LOG=debug novacloud-tui
//! ```

use std::fs::{self, File};
use std::io::{self, IsTerminal};
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use novacloud_core::{
    load_config, load_config_from_path, system_prefers_light, ConfigOverrides, LandingConfig,
    Theme, ThemeStore,
};
use novacloud_tui::App;

/// NovaCloud landing page preview
#[derive(Parser, Debug)]
#[command(name = "novacloud-tui")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, env = "NOVACLOUD_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start with this theme instead of the stored preference
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Preference file path
    #[arg(long, value_name = "FILE")]
    preferences: Option<PathBuf>,

    /// Typing interval for both headings (milliseconds)
    #[arg(long, value_name = "MS")]
    typing_interval_ms: Option<u64>,

    /// Deleting interval for both headings (milliseconds)
    #[arg(long, value_name = "MS")]
    deleting_interval_ms: Option<u64>,

    /// Dwell after a phrase is typed (milliseconds)
    #[arg(long, value_name = "MS")]
    pause_ms: Option<u64>,

    /// Log file path
    #[arg(long, env = "NOVACLOUD_LOG_FILE", value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::new();
        if let Some(path) = &self.preferences {
            overrides = overrides.with_preferences_path(path.clone());
        }
        if let Some(ms) = self.typing_interval_ms {
            overrides = overrides.with_typing_interval_ms(ms);
        }
        if let Some(ms) = self.deleting_interval_ms {
            overrides = overrides.with_deleting_interval_ms(ms);
        }
        if let Some(ms) = self.pause_ms {
            overrides = overrides.with_pause_ms(ms);
        }
        overrides
    }
}

/// Default log file under the state (or cache) directory
fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("novacloud")
        .join("novacloud-tui.log")
}

/// Initialize logging into `path` so the terminal stays clean
fn init_logging(path: &Path, level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {parent:?}"))?;
    }
    let file = File::create(path).with_context(|| format!("Failed to create log file: {path:?}"))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("novacloud_tui={level},novacloud_core={level}"))
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();
    Ok(())
}

/// Resolve config (file, env, CLI) and the theme preference
fn load(args: &Args) -> Result<(LandingConfig, ThemeStore)> {
    // Without --config, fall back to the default location
    let loaded = match &args.config {
        Some(path) => load_config_from_path(Some(path.clone())),
        None => load_config(),
    };
    let mut config = loaded.context("Failed to load config")?;
    args.overrides()
        .apply(&mut config)
        .context("Invalid command-line override")?;
    info!(source = %config.source(), file = ?config.config_file_path, "Configuration loaded");

    let store = config
        .open_preferences()
        .context("Failed to open preference file")?;
    let mut theme = ThemeStore::init(store, system_prefers_light());
    if let Some(forced) = args.theme {
        if let Err(e) = theme.set(forced.into()) {
            warn!(error = %e, "Failed to persist theme from command line");
        }
    }

    Ok((config, theme))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args.log_file.clone().unwrap_or_else(default_log_path);
    init_logging(&log_path, &args.log_level)?;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: novacloud-tui requires a terminal (TTY)");
        eprintln!();
        eprintln!("Piped stdin/stdout or a non-interactive session cannot host the preview.");
        std::process::exit(1);
    }

    let (config, theme) = load(&args)?;

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &config, theme).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &LandingConfig,
    theme: ThemeStore,
) -> Result<()> {
    let mut app = App::new(config, theme)?;
    let result = app.run(terminal).await;
    // Stopped here too when run bails out early
    app.shutdown();
    result
}
