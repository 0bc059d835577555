//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use launches_client::LaunchSource;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
///
/// Returns the task handle so the runner can abort it on exit.
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    source: Arc<S>,
    shutdown_rx: watch::Receiver<bool>,
) -> Option<JoinHandle<()>>
where
    S: LaunchSource + Sync + 'static,
{
    match action {
        UpdateAction::FetchLaunches => Some(spawn_fetch(msg_tx, source, shutdown_rx)),
    }
}

/// Fetch the launch list once and report the outcome as a message.
///
/// If shutdown is signalled first the result is dropped and nothing is sent.
fn spawn_fetch<S>(
    msg_tx: mpsc::Sender<Message>,
    source: Arc<S>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    S: LaunchSource + Sync + 'static,
{
    tokio::spawn(async move {
        debug!("Fetching launches: {}", source.describe());

        let message = tokio::select! {
            result = source.fetch_launches() => match result {
                Ok(launches) => Message::LaunchesLoaded { launches },
                Err(e) => Message::LaunchesFailed { error: e.to_string() },
            },
            _ = wait_for_shutdown(&mut shutdown_rx) => {
                debug!("Launch fetch cancelled by shutdown");
                return;
            }
        };

        if msg_tx.send(message).await.is_err() {
            warn!("Launch fetch finished after the event loop closed");
        }
    })
}

/// Resolves once shutdown is signalled. A dropped sender is not a shutdown.
async fn wait_for_shutdown(shutdown_rx: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown_rx.borrow_and_update() {
            return;
        }
        if shutdown_rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launches_client::test_utils::{starlink_2, StaticLaunchSource};
    use std::time::Duration;

    #[tokio::test]
    async fn test_fetch_sends_loaded_message() {
        let (msg_tx, mut msg_rx) = mpsc::channel(4);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let source = Arc::new(StaticLaunchSource::launches(vec![starlink_2()]));

        let handle = handle_action(
            UpdateAction::FetchLaunches,
            msg_tx,
            source.clone(),
            shutdown_rx,
        );
        handle.unwrap().await.unwrap();

        match msg_rx.recv().await {
            Some(Message::LaunchesLoaded { launches }) => {
                assert_eq!(launches[0].mission_name, "Starlink 2")
            }
            other => panic!("expected LaunchesLoaded, got {other:?}"),
        }
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_carries_technical_error() {
        let (msg_tx, mut msg_rx) = mpsc::channel(4);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let source = Arc::new(StaticLaunchSource::http_status(502));

        let handle = handle_action(UpdateAction::FetchLaunches, msg_tx, source, shutdown_rx);
        handle.unwrap().await.unwrap();

        match msg_rx.recv().await {
            Some(Message::LaunchesFailed { error }) => assert!(error.contains("502")),
            other => panic!("expected LaunchesFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_shutdown_drops_pending_result() {
        let (msg_tx, mut msg_rx) = mpsc::channel(4);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let source = Arc::new(
            StaticLaunchSource::launches(vec![starlink_2()]).with_delay(Duration::from_secs(30)),
        );

        let handle = handle_action(UpdateAction::FetchLaunches, msg_tx, source, shutdown_rx);
        shutdown_tx.send(true).unwrap();
        handle.unwrap().await.unwrap();

        assert!(msg_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_dropped_shutdown_sender_does_not_cancel() {
        let (msg_tx, mut msg_rx) = mpsc::channel(4);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let source = Arc::new(
            StaticLaunchSource::launches(vec![starlink_2()]).with_delay(Duration::from_millis(20)),
        );

        let handle = handle_action(UpdateAction::FetchLaunches, msg_tx, source, shutdown_rx);
        drop(shutdown_tx);
        handle.unwrap().await.unwrap();

        assert!(matches!(
            msg_rx.recv().await,
            Some(Message::LaunchesLoaded { .. })
        ));
    }
}
