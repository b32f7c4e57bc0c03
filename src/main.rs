use anyhow::Result;
use crossterm::{
    event::{self as crossterm_event, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;
use std::time::{Duration, Instant};
use std::io;
use tokio::sync::Mutex;

mod app;
mod config;
mod constants;
mod image;
mod transactions;
mod ui;
mod utils;
mod wallet;

use app::App;
use constants::WALLET_REFRESH_INTERVAL_SECS;

#[tokio::main]
async fn main() -> Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initialize application state; a missing wallet config is not fatal
    let app = Arc::new(Mutex::new(App::new().await?));

    let result = run_app(&mut terminal, Arc::clone(&app)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: Arc<Mutex<App>>,
) -> Result<()> {
    let refresh_interval = Duration::from_secs(WALLET_REFRESH_INTERVAL_SECS);
    let mut last_refresh = Instant::now();

    // Initial wallet info fetch
    App::spawn_refresh(Arc::clone(&app));

    loop {
        let app_arc = Arc::clone(&app);

        // Periodic advisory refresh; the latch inside prevents overlap
        if last_refresh.elapsed() >= refresh_interval {
            App::spawn_refresh(Arc::clone(&app_arc));
            last_refresh = Instant::now();
        }

        {
            let mut app_guard = app_arc.lock().await;
            app_guard.confetti.tick(Instant::now());
            terminal.draw(|f| ui::draw(f, &mut app_guard))?;
        }

        if crossterm_event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = crossterm_event::read()? {
                let mut app_guard = app_arc.lock().await;

                if app_guard.feedback.is_open() {
                    // Modal closes only on explicit dismissal
                    match key.code {
                        KeyCode::Esc | KeyCode::Enter => app_guard.dismiss_feedback(),
                        _ => {}
                    }
                } else if app_guard.is_switching_network {
                    match key.code {
                        KeyCode::Char('1') | KeyCode::Char('2') | KeyCode::Char('3') => {
                            let network_index = match key.code {
                                KeyCode::Char('1') => 0, // DEVNET
                                KeyCode::Char('2') => 1, // TESTNET
                                KeyCode::Char('3') => 2, // MAINNET
                                _ => unreachable!(),
                            };
                            app_guard.switch_to_network(network_index);
                            drop(app_guard);
                            App::spawn_reconnect(Arc::clone(&app_arc));
                            last_refresh = Instant::now();
                        }
                        KeyCode::Esc => app_guard.cancel_network_switch(),
                        _ => {}
                    }
                } else if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Char('r') => app_guard.reset_form(),
                        KeyCode::Char('t') => app_guard.theme.toggle(),
                        KeyCode::Char('n') => app_guard.start_network_switch(),
                        _ => {}
                    }
                } else {
                    match key.code {
                        KeyCode::Esc => return Ok(()),
                        KeyCode::Enter => {
                            drop(app_guard);
                            App::spawn_submit(Arc::clone(&app_arc));
                        }
                        KeyCode::Tab | KeyCode::Down => app_guard.next_field(),
                        KeyCode::BackTab | KeyCode::Up => app_guard.previous_field(),
                        KeyCode::Backspace => app_guard.backspace(),
                        KeyCode::Char(c) => app_guard.input_char(c),
                        _ => {}
                    }
                }
            }
        }
    }
}
