//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use mailguard_app::config::Settings;
use mailguard_app::message::Message;
use mailguard_app::process::process_message;
use mailguard_app::signals;
use mailguard_app::state::{AppState, MetricsPanel};
use mailguard_client::Classifier;
use mailguard_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits
pub async fn run<C>(settings: Settings, metrics: MetricsPanel, classifier: C) -> Result<()>
where
    C: Classifier + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mouse = settings.ui.mouse;
    info!(
        "Starting TUI: endpoint={}, icons={}, mouse={}",
        settings.service.endpoint, settings.ui.icons, mouse
    );

    // Initialize terminal
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = terminal::enable_input_modes(mouse) {
        warn!("{}", e);
    }

    let mut state = AppState::with_settings(settings, metrics);
    let classifier = Arc::new(classifier);

    // Unified message channel (signal handler, classification replies)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &classifier);

    terminal::disable_input_modes(mouse);
    ratatui::restore();

    info!("TUI stopped");
    result
}

/// Main event loop
fn run_loop<C>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    classifier: &Arc<C>,
) -> Result<()>
where
    C: Classifier + Sync + 'static,
{
    while !state.should_quit() {
        // Process external messages (signal handler, classification replies)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, classifier);
        }

        // Render
        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        if let Some(message) = event::poll().context("Failed to read terminal event")? {
            process_message(state, message, &msg_tx, classifier);
        }
    }

    Ok(())
}
