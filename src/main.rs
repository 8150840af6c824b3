mod app;
mod config;
mod logging;
mod tracker;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::config::{AppConfig, SeedMode};
use crate::tracker::Tracker;
use anyhow::Result;
use chrono::Local;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "coffee-tracker")]
#[command(about = "Count today's coffee and chart the last week", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// How to fill the six days before today
    #[arg(long, value_enum)]
    seed: Option<SeedMode>,

    /// Open with the weekly chart visible
    #[arg(long)]
    show_stats: bool,
}

impl Cli {
    fn apply(&self, cfg: &mut AppConfig) {
        if let Some(mode) = self.seed {
            cfg.seed.mode = mode;
        }
        if self.show_stats {
            cfg.ui.show_stats = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config
    let mut cfg = config::load_config(cli.config.as_deref())?;
    cli.apply(&mut cfg);

    logging::init_logging(&cfg.logging)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!("Exiting on error: {:#}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("coffee-tracker stopped");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let today = Local::now().date_naive();
    let mut seed = config::build_seed(&cfg);
    let tracker = Tracker::mount(today, &cfg.ui.label_format, seed.as_mut());
    tracing::info!(
        "Mounted for {} with {:?} seed, stats {}",
        today,
        cfg.seed.mode,
        if cfg.ui.show_stats { "shown" } else { "hidden" }
    );

    let mut state = AppState::new(tracker, cfg.ui.show_stats);
    let (width, height) = crossterm::terminal::size()?;
    state.set_viewport(width, height);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    let _ = term_tx.send(AppEvent::InputClosed {
                        reason: e.to_string(),
                    });
                    break;
                }
                None => {
                    let _ = term_tx.send(AppEvent::InputClosed {
                        reason: "end of input".to_string(),
                    });
                    break;
                }
            }
        }
    });
    drop(event_tx);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        for action in handler::handle_event(&mut state, event) {
            match action {
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            tracing::info!(
                "Quitting with {} cups today",
                state.tracker.today_count()
            );
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
