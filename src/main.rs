use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use skip_picker::catalog::fetcher::fetch_blocking;
use skip_picker::config::{self, ConfigResult};
use skip_picker::pagination::{PageState, paginate, pagination_render::page_label};
use skip_picker::{App, Config, FetchSource, OutputMode};

/// Interactive skip size catalog
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive terminal catalog for choosing a skip size"
)]
struct Args {
    /// Read the skip list from a JSON file instead of the catalog endpoint
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Page to open on (1-based)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    page: u64,

    /// Print the page as text and exit instead of starting the interface
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/skip-picker-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/skip-picker-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== SKIP-PICKER DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let source = match args.input {
        Some(path) => FetchSource::File(path),
        None => FetchSource::Endpoint(config_result.config.api.clone()),
    };
    let page = usize::try_from(args.page).unwrap_or(usize::MAX);

    if args.list {
        if let Some(warning) = &config_result.warning {
            eprintln!("Warning: {}", warning);
        }
        return print_page(&source, &config_result.config, page);
    }

    let terminal = init_terminal()?;

    let mut app = App::new(&config_result.config, source);
    app.page.set_page(page);
    app.start_fetch();

    let result = run(terminal, app, config_result);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    handle_output(&app)?;

    #[cfg(debug_assertions)]
    log::debug!("=== SKIP-PICKER DEBUG SESSION ENDED ===");

    Ok(())
}

/// Non-interactive mode: one line per skip on the page, then the page label
fn print_page(source: &FetchSource, config: &Config, page: usize) -> Result<()> {
    let skips = fetch_blocking(source)?;

    let mut state = PageState::new(config.catalog.page_size);
    state.set_page(page);

    for skip in paginate(&skips, state.page(), state.page_size()) {
        println!(
            "{}\t{}\t{}\t{}",
            skip.id,
            skip.size_label(),
            skip.price_label(),
            skip.hire_period_label()
        );
    }
    println!(
        "{}",
        page_label(state.page(), state.page_count(skips.len()).max(1))
    );

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<App> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    loop {
        // Poll before render so a settled fetch shows up this frame
        app.poll_fetcher();

        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

/// Handle output after terminal is restored
fn handle_output(app: &App) -> Result<()> {
    match app.output_mode() {
        Some(OutputMode::Selection) => {
            if let Some(json) = app.selection_json() {
                println!("{}", json?);
            }
        }
        None => {
            // Exited with q, Esc or Ctrl+C
        }
    }

    Ok(())
}
