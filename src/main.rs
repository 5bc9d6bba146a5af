use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use coe_dash::{events, export, ui, App, DashConfig, DataSource, SimulatorSource, Theme, ThemeChoice};
use coe_metrics::{std_source, MetricsGenerator};

/// How often the event loop wakes to poll input and the data source.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "coe-dash")]
#[command(about = "Terminal dashboard for the Application Center of Excellence live metrics")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Refresh interval (e.g., "3s", "500ms")
    #[arg(short, long)]
    interval: Option<String>,

    /// Seed for a reproducible metrics sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Colour theme
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Write one snapshot and the reference data to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(args.log_file.as_deref(), args.export.is_some())?;

    let mut config = DashConfig::load(args.config.as_deref())?;
    if let Some(interval) = args.interval {
        config.refresh = interval;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    config.validate()?;

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        return export_snapshot(&config, &export_path);
    }

    run_simulated(&config)
}

/// Install the tracing subscriber.
///
/// The TUI owns stdout, so logs only go to a file when one is given;
/// export mode has no screen to protect and logs to stderr.
fn init_tracing(log_file: Option<&Path>, to_stderr: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    Ok(())
}

/// Generate a single snapshot and write it out.
fn export_snapshot(config: &DashConfig, path: &Path) -> Result<()> {
    let mut generator = MetricsGenerator::with_ranges(std_source(config.seed), config.ranges);
    let snapshot = generator.generate();

    let description = match config.seed {
        Some(seed) => format!("one-shot export (seed {})", seed),
        None => "one-shot export".to_string(),
    };
    export::write(path, &export::build(&snapshot, &description))?;

    println!("Exported metrics snapshot to: {}", path.display());
    Ok(())
}

/// Run the TUI against the simulated feed
fn run_simulated(config: &DashConfig) -> Result<()> {
    // The feed's timer task runs on this runtime's workers while the TUI
    // loop stays on the main thread.
    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let source = SimulatorSource::spawn(config.refresh_interval()?, config.ranges, config.seed)?;
    let theme = Theme::from_choice(config.theme);

    run_tui(Box::new(source), theme)
}

/// Run the TUI with the given data source
fn run_tui(source: Box<dyn DataSource>, theme: Theme) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    let mut app = App::new(source, theme);
    app.reload_data();

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!("dashboard closed");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Some(event) = events::poll_event(POLL_INTERVAL)? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse, ui::TAB_ROW),
                // Terminal will redraw on next iteration
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if app.reload_data() {
            tracing::debug!("new snapshot displayed");
        }
    }

    Ok(())
}
