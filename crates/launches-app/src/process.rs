//! Message processing
//!
//! Runs a message through the TEA update function, following up chained
//! messages and dispatching any resulting actions.

use std::sync::Arc;

use launches_client::LaunchSource;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &Arc<S>,
    shutdown_rx: &watch::Receiver<bool>,
    tasks: &mut Vec<JoinHandle<()>>,
) where
    S: LaunchSource + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            if let Some(task) =
                handle_action(action, msg_tx.clone(), source.clone(), shutdown_rx.clone())
            {
                tasks.push(task);
            }
        }

        msg = result.message;
    }
}
