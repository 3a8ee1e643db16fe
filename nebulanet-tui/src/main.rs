use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nebulanet_core::{Dataset, Gallery, SiteConfig};
use nebulanet_tui::{app::AppState, input, ui};

/// NebulaNet — browse JWST observations in the terminal
#[derive(Parser)]
#[command(name = "nebulanet-tui", version, about)]
struct Cli {
    /// Path to a config TOML (defaults to the per-user config if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Observation dataset, overriding the config
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Directory that image paths resolve against, overriding the config
    #[arg(long)]
    asset_root: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SiteConfig::resolve(cli.config.as_deref())?;
    if let Some(dataset) = cli.dataset {
        config.dataset = dataset;
    }
    if let Some(root) = cli.asset_root {
        config.asset_root = Some(root);
    }

    init_logging(&log_path())?;

    let dataset = Dataset::load(&config.dataset)
        .with_context(|| format!("loading dataset {}", config.dataset.display()))?;
    let gallery = Gallery::from_dataset(&dataset, &config.images);
    tracing::info!(items = gallery.len(), "gallery mounted");

    let mut app = AppState::new(gallery, &config);
    if app.gallery.is_empty() {
        app.set_warning("Dataset is empty");
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("gallery unmounted");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                // Layout is derived from the frame width on the next draw.
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}

fn log_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nebulanet")
        .join("nebulanet-tui.log")
}

/// Logs go to a file; stderr belongs to the alternate screen.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path).with_context(|| format!("creating log {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nebulanet_core=warn,nebulanet_tui=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}
