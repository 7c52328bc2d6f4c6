//! # Folio CLI Entry Point
//!
//! This is the main entry point for the folio TUI application.
//!
//! ## Overview
//!
//! Folio renders a copywriter's portfolio page in the terminal: a typewriter
//! hero, a drifting work strip, counters that run when scrolled into view, a
//! ticker, flip cards, a filterable case-study grid (a swipeable carousel on
//! narrow terminals) with a detail overlay, and a contact form.
//!
//! ## Usage
//!
//! ```bash
//! # Bundled content, saved settings
//! folio
//!
//! # Alternative content and a one-off theme
//! folio --content ./site.json --theme "Catppuccin Latte"
//!
//! # Print the loaded content summary and exit
//! folio --debug
//! ```
//!
//! ## Key Bindings
//!
//! - `q` / `Q` / `Ctrl+c` - Quit
//! - `j` / `k` / arrows / `PgUp` / `PgDn` / wheel - Scroll the page
//! - `1`-`4` - Jump to Home / About / Services / Portfolio
//! - `Tab` / `Shift+Tab` - Focus Services, Portfolio, Clients, Contact
//! - `←` / `→` - Browse inside the focused section
//! - `f` / `F` - Next / previous portfolio filter
//! - `Enter` - Flip a card, open a case study, visit a client, submit
//! - `Esc` - Close the overlay or drop focus
//! - `t` - Toggle dark/light theme
//! - `w` - Message me, `o` - Work samples
//! - `g` / `Home` - Back to top

use folio::content::SiteContent;
use folio::ui;
use folio::ui::config::Config;
use folio::ui::links::{LinkOpener, SystemOpener};
use folio::ui::theme::Theme;
use folio::ui::{Action, App};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Poll timeout per frame (~60fps).
const FRAME: Duration = Duration::from_millis(16);

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// Folio - a copywriter's portfolio, in your terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author = "Luckystrike561")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A copywriter's portfolio page, rendered in the terminal", long_about = None)]
struct Args {
    /// Path to the config file (default: platform config dir)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Site content JSON to show instead of the bundled content
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Theme to use for this session (overrides the config file)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Never launch a browser; outbound links are only logged
    #[arg(long)]
    no_browser: bool,

    /// Write logs here instead of the platform data dir
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the loaded content summary and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(args.log_file.as_deref());

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);

        // Call the original panic hook
        original_hook(panic_info);
    }));

    // Run the application and ensure cleanup happens
    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    if let Err(ref e) = result {
        tracing::error!("{e:#}");
    }
    result
}

/// Route `tracing` output to a file; stdout belongs to the TUI.
///
/// Logging is best effort: without a writable location the app runs silent.
fn init_logging(path: Option<&Path>) -> Option<WorkerGuard> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => directories::ProjectDirs::from("", "", "folio")?
            .data_dir()
            .join("folio.log"),
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "folio=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .ok()?;
    Some(guard)
}

/// Resolve the config path and load it, falling back to defaults.
fn load_config(explicit: Option<&Path>) -> (Config, Option<PathBuf>) {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => Config::config_path().ok(),
    };
    let config = match &path {
        Some(p) => Config::load_from(p).unwrap_or_else(|e| {
            tracing::warn!("{e:#}; using default settings");
            Config::default()
        }),
        None => Config::load(),
    };
    (config, path)
}

fn load_content(path: Option<&Path>) -> Result<SiteContent> {
    match path {
        Some(p) => SiteContent::load_from(p),
        None => SiteContent::bundled(),
    }
}

fn resolve_theme(requested: &str) -> &'static Theme {
    Theme::by_name(requested).unwrap_or_else(|| {
        tracing::warn!(theme = requested, "unknown theme, using default");
        Theme::default_theme()
    })
}

async fn run_application(args: Args) -> Result<()> {
    let (config, config_path) = load_config(args.config.as_deref());
    let content = load_content(args.content.as_deref())?;

    let launch_browser = browser_enabled(&args, &config);
    let theme = resolve_theme(args.theme.as_deref().unwrap_or(&config.theme));

    // Debug mode: print content summary and exit
    if args.debug {
        print_summary(&content, &config, theme, launch_browser, config_path.as_deref());
        return Ok(());
    }

    tracing::info!(
        theme = theme.name,
        case_studies = content.portfolio.len(),
        "starting folio"
    );

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut opener = SystemOpener::new(launch_browser);
    let mut app = App::new(content, config, theme);

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(
        &mut terminal,
        &mut app,
        &mut event_reader,
        &mut opener,
        config_path.as_deref(),
    )
    .await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    tracing::info!("folio closed");
    Ok(())
}

/// `--no-browser` applies to this session only and never reaches the saved config.
fn browser_enabled(args: &Args, config: &Config) -> bool {
    config.launch_browser && !args.no_browser
}

fn print_summary(
    content: &SiteContent,
    config: &Config,
    theme: &Theme,
    launch_browser: bool,
    config_path: Option<&Path>,
) {
    println!(
        "  Owner: {} {}",
        content.owner.first_name, content.owner.last_name
    );
    println!("  Roles: {}", content.roles.join(", "));
    println!("  Filters: {}", content.filters.join(", "));
    for study in &content.portfolio {
        println!("    {} [{}] {}", study.id, study.category, study.title);
    }
    println!(
        "\n  Theme: {}\n  Contact form: {:?}\n  Browser: {}",
        theme.name,
        config.contact_form,
        if launch_browser { "on" } else { "off" }
    );
    if let Some(path) = config_path {
        println!("  Config: {}", path.display());
    }
    println!(
        "\nTotal: {} slides, {} metrics, {} services, {} case studies, {} clients",
        content.slides.len(),
        content.metrics.len(),
        content.services.len(),
        content.portfolio.len(),
        content.clients.len()
    );
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Carry out a side effect requested by the input layer.
fn perform(
    app: &mut App,
    action: Action,
    opener: &mut dyn LinkOpener,
    config_path: Option<&Path>,
) {
    match action {
        Action::OpenLink(url) => {
            if let Err(e) = opener.open(&url) {
                tracing::warn!("{e:#}");
                app.notify(format!("Could not open link: {url}"));
            }
        }
        Action::PersistTheme => {
            let Some(path) = config_path else {
                return;
            };
            if let Err(e) = app.config.save_to(path) {
                tracing::warn!("{e:#}");
                app.notify("Could not save theme preference");
            }
        }
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    opener: &mut dyn LinkOpener,
    config_path: Option<&Path>,
) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    app.resize(size.width, size.height);

    let mounted_at = Instant::now();

    loop {
        app.tick(mounted_at.elapsed());

        let mut hits = ui::render::HitMap::default();
        terminal
            .draw(|f| hits = ui::render(f, app))
            .context("Failed to draw terminal UI")?;
        app.hits = hits;

        // Short timeout so animations keep moving without input
        if let Some(event) = event_reader.read_event(FRAME)? {
            if let Some(action) = ui::input::handle_event(app, event) {
                perform(app, action, opener, config_path);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
