//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use launches_app::config::Settings;
use launches_app::message::Message;
use launches_app::process::process_message;
use launches_app::signals;
use launches_app::state::AppState;
use launches_client::LaunchSource;
use launches_core::prelude::*;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::{event, render, terminal};

/// Run the TUI against `source` until the user quits
pub async fn run_with_source<S>(settings: Settings, source: S) -> Result<()>
where
    S: LaunchSource + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!("Launch source: {}", source.describe());
    let source = Arc::new(source);

    let mut term = terminal::init()?;
    let mut state = AppState::new(settings);

    // Unified message channel (fetch results, signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    let signal_task = signals::spawn_signal_handler(msg_tx.clone());

    // Shutdown signal for background tasks
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut tasks: Vec<JoinHandle<()>> = Vec::new();

    // The single fetch starts with the first frame
    process_message(
        &mut state,
        Message::FetchLaunches,
        &msg_tx,
        &source,
        &shutdown_rx,
        &mut tasks,
    );

    let result = run_loop(
        &mut term,
        &mut state,
        msg_rx,
        &msg_tx,
        &source,
        &shutdown_rx,
        &mut tasks,
    );

    // A fetch still in flight must not deliver into a torn-down UI
    let _ = shutdown_tx.send(true);
    for task in tasks {
        task.abort();
    }
    signal_task.abort();

    terminal::restore();

    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    source: &Arc<S>,
    shutdown_rx: &watch::Receiver<bool>,
    tasks: &mut Vec<JoinHandle<()>>,
) -> Result<()>
where
    S: LaunchSource + Sync + 'static,
{
    while !state.should_quit() {
        // Process background messages (fetch results, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, source, shutdown_rx, tasks);
        }

        if state.should_quit() {
            break;
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, source, shutdown_rx, tasks);
        }
    }

    Ok(())
}
