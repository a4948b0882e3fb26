use jobswipe::cli::{AppConfig, Args};
use jobswipe::config::UserConfig;
use jobswipe::domain::{
    load_listings, sample_listings, CriteriaList, KeywordMatcher, SwipeSession,
};
use jobswipe::logging::init_logging;
use jobswipe::settle::TokioSettleScheduler;
use jobswipe::tui::{render, LoopControl, UiState};
use jobswipe::Result;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tokio::runtime::Runtime;

/// How long to wait for input before checking for due swipes
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() {
    // Parse command line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = init_logging(args.log_file.as_deref()) {
        eprintln!("Warning: Failed to start logging: {}", e);
    }

    // Load user configuration
    let user_config = UserConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable user config");
        eprintln!("Warning: Failed to load user config: {}", e);
        UserConfig::default()
    });

    let config = AppConfig::from_sources(args, user_config);

    if let Err(e) = run_app_with_config(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Runs the TUI application with configuration
pub fn run_app_with_config(config: &AppConfig) -> Result<()> {
    let catalog = match &config.listings {
        Some(path) => load_listings(path)?,
        None => sample_listings()?,
    };

    if catalog.is_empty() {
        println!("No listings to review");
        return Ok(());
    }

    let runtime = Runtime::new()?;
    let scheduler = TokioSettleScheduler::new(runtime.handle().clone());

    let mut session = SwipeSession::new(catalog, Box::new(scheduler))
        .with_criteria(CriteriaList::with_active_kinds(&config.active_kinds))
        .with_remote_matcher(KeywordMatcher::new(
            config.remote_field,
            &config.remote_keywords,
        ))
        .with_search_term(config.search.clone())
        .with_remote_only(config.remote_only)
        .with_settle_delay(config.settle_delay);

    tracing::info!(
        listings = session.catalog().len(),
        deck = session.deck().len(),
        remote_rule = session.remote_matcher().name(),
        "session started"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_loop(&mut terminal, &mut session);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print summary after exit
    let stats = session.stats();
    tracing::info!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        saved = stats.saved,
        "session ended"
    );
    println!(
        "Saved {} listings ({} passed)",
        stats.saved, stats.rejected
    );
    for listing in session.saved_listings() {
        println!("   #{} {} - {}", listing.id, listing.title, listing.company);
    }

    result
}

/// Main application loop
fn run_loop<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
    session: &mut SwipeSession,
) -> Result<()> {
    let mut ui = UiState::new();

    loop {
        terminal.draw(|frame| render(frame, session, &ui))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Ignore key release events on platforms that report them
                if key.kind == KeyEventKind::Press {
                    let action = ui.map_key(key);
                    if ui.apply(session, action) == LoopControl::Quit {
                        break;
                    }
                }
            }
        }

        session.tick();
    }

    Ok(())
}
