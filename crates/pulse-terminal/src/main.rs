// crates/pulse-terminal/src/main.rs

mod app;
mod config;
mod gateway;
mod speech;
mod ui;
mod components;

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::{io, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::{App, InputMode, Page};
use crate::config::ClientConfig;
use crate::gateway::{OrderGateway, Submission, SubmissionResult};

#[derive(Parser)]
#[clap(name = "trade-pulse")]
#[clap(about = "Trade Pulse terminal: voice order entry and trading presets")]
struct Cli {
    /// TOML configuration file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// User ID orders are placed for
    #[clap(short, long)]
    user_id: Option<String>,

    /// Base URL of the order API (also read from PULSE_API_URL)
    #[clap(short, long)]
    api_url: Option<String>,

    /// Acknowledge orders locally instead of posting them
    #[clap(long)]
    dry_run: bool,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,

    /// Log file (stdout belongs to the terminal UI)
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// Page to open on start (dashboard, orders, positions, account, tools, preset)
    #[clap(short, long)]
    page: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    let mut config = ClientConfig::load(cli.config.as_deref())?;
    if let Some(user_id) = cli.user_id {
        config.user_id = user_id;
    }
    if let Some(url) = cli.api_url {
        config.api_base_url = Some(url);
    }
    config.dry_run |= cli.dry_run;

    info!(
        user = %config.user_id,
        api = ?config.submission_url(),
        presets = config.presets.len(),
        "starting trade-pulse"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    if let Some(page) = cli.page.as_deref() {
        app.navigate_to(page);
    }
    let res = run_app(&mut terminal, app, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(app) if app.logged_out => println!("Logged out."),
        Ok(_) => {}
        Err(err) => println!("Error: {:?}", err),
    }

    Ok(())
}

fn init_logging(cli: &Cli) -> Result<()> {
    if !cli.debug && cli.log_file.is_none() {
        return Ok(());
    }

    let path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| PathBuf::from("trade-pulse.log"));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let default_level = if cli.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    config: &ClientConfig,
) -> Result<App> {
    // Channels between the UI loop and the order gateway
    let (tx_to_gateway, rx_from_app) = mpsc::unbounded_channel::<Submission>();
    let (tx_to_app, mut rx_from_gateway) = mpsc::unbounded_channel::<SubmissionResult>();

    app.set_order_sender(tx_to_gateway);

    let gateway = OrderGateway::new(config.submission_url().map(str::to_string), tx_to_app);
    let gateway_handle = tokio::spawn(gateway.run(rx_from_app));

    loop {
        // Draw UI
        terminal.draw(|f| ui::draw(f, &app))?;

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if app.show_help {
                    if matches!(key.code, KeyCode::F(1) | KeyCode::Esc) {
                        app.toggle_help();
                    }
                    continue;
                }

                match app.input_mode {
                    InputMode::Normal => match key.code {
                        // Global hotkeys
                        KeyCode::Char('q') | KeyCode::Char('Q') => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('l') | KeyCode::Char('L') => {
                            app.logout();
                        }
                        KeyCode::F(1) | KeyCode::Char('?') => {
                            app.toggle_help();
                        }
                        KeyCode::Esc => {
                            app.dismiss_notice();
                        }

                        // Navigation
                        KeyCode::Tab => {
                            app.next_page();
                        }
                        KeyCode::BackTab => {
                            app.prev_page();
                        }
                        KeyCode::Char(c @ '1'..='6') => {
                            let idx = c as usize - '1' as usize;
                            app.navigate(Page::ALL[idx]);
                        }
                        KeyCode::Up | KeyCode::Char('k') => {
                            app.move_selection_up();
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            app.move_selection_down();
                        }

                        // Voice
                        KeyCode::Char('v') | KeyCode::Char('V') => {
                            app.start_listening();
                        }

                        // Dashboard
                        KeyCode::Enter if app.current_page == Page::Dashboard => {
                            app.open_trade_dialog();
                        }

                        // Preset page
                        KeyCode::Char('e') | KeyCode::Char('E') => {
                            app.start_preset_editing();
                        }
                        KeyCode::Char('a') | KeyCode::Char('A') if app.current_page == Page::Preset => {
                            app.add_preset();
                        }
                        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete
                            if app.current_page == Page::Preset =>
                        {
                            app.delete_selected_preset();
                        }

                        _ => {}
                    },

                    InputMode::Listening => match key.code {
                        KeyCode::Enter => {
                            app.stop_listening();
                        }
                        KeyCode::Esc => {
                            app.abort_listening();
                        }
                        KeyCode::Backspace => {
                            app.unhear_char();
                        }
                        KeyCode::Char(c) => {
                            app.hear_char(c);
                        }
                        _ => {}
                    },

                    InputMode::Dialog => match key.code {
                        KeyCode::Up | KeyCode::Char('k') => {
                            app.dialog_select_prev();
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            app.dialog_select_next();
                        }
                        KeyCode::Enter => {
                            app.execute_dialog_order();
                        }
                        KeyCode::Esc => {
                            app.close_trade_dialog();
                        }
                        _ => {}
                    },

                    InputMode::EditingPreset => match key.code {
                        KeyCode::Enter => {
                            app.add_preset();
                        }
                        KeyCode::Esc => {
                            app.stop_preset_editing();
                        }
                        KeyCode::Tab | KeyCode::Down => {
                            app.next_preset_field();
                        }
                        KeyCode::BackTab | KeyCode::Up => {
                            app.prev_preset_field();
                        }
                        KeyCode::Backspace => {
                            app.delete_preset_char();
                        }
                        KeyCode::Char(c) => {
                            app.enter_preset_char(c);
                        }
                        _ => {}
                    },
                }
            }
        }

        // Process gateway results
        while let Ok(result) = rx_from_gateway.try_recv() {
            app.handle_submission_result(result);
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    // Cleanup
    gateway_handle.abort();
    Ok(app)
}
