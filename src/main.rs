use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use gitref::app::{config, r#loop::run_loop, state::AppState};
use gitref::cli::Args;
use gitref::domain::clipboard::ClipboardFacade;
use gitref::infrastructure::clipboard::{NoClipboard, SystemClipboard};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    gitref::logging::init(args.log_file.as_deref())?;

    // Config errors surface BEFORE terminal setup so the message stays readable.
    let mut config = match &args.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config(),
    };
    if args.theme.is_some() {
        config.theme = args.theme;
    }
    if args.section.is_some() {
        config.start_section = args.section;
    }

    let mut app_state = AppState::new(&config);
    if let Some(query) = &args.query {
        app_state = app_state.with_query(query);
    }

    let clipboard: Arc<dyn ClipboardFacade> = if args.no_clipboard {
        Arc::new(NoClipboard)
    } else {
        Arc::new(SystemClipboard::new())
    };

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(section = %app_state.active_section(), "session started");
    let res = run_loop(&mut terminal, app_state, clipboard).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "session ended with an error");
        eprintln!("{err:?}");
        std::process::exit(1);
    }

    Ok(())
}
