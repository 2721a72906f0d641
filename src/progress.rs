// src/progress.rs
// =============================================================================
// Cosmetic progress reporting while the repositories are fetched.
//
// How it works:
// 1. The pipeline owns a `Progress` handle (the sending half of a channel)
// 2. Each pipeline step sends a `Stage` event through it
// 3. A separate tokio task receives the events and updates a spinner
// 4. When the pipeline drops its handle, the channel closes and the
//    spinner task finishes
//
// Sending never waits: if the channel is full the event is simply dropped.
// These messages are only there to keep the user company.
//
// Rust concepts:
// - mpsc channels: message passing between tasks
// - JoinHandle: waiting for a spawned task to finish
// - Drop-based shutdown: closing a channel by dropping its sender
// =============================================================================

use std::fmt;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tracing::trace;

// A handful of events per run; anything beyond this is dropped
const CHANNEL_CAPACITY: usize = 8;

/// A step of the fetch -> filter pipeline, in the order they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Verifying,
    Filtering,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Stage::Fetching => "Fetching data from github",
            Stage::Verifying => "Verifying response",
            Stage::Filtering => "Filtering repositories",
        };
        f.write_str(text)
    }
}

/// Sending half of the stage-event channel.
///
/// A disabled handle accepts events and throws them away, so pipeline code
/// never has to care whether a spinner is running.
#[derive(Debug)]
pub struct Progress {
    sender: Option<mpsc::Sender<Stage>>,
}

impl Progress {
    /// A handle that reports nowhere.
    pub fn disabled() -> Self {
        Self { sender: None }
    }

    /// A handle plus the receiver that will see its events.
    pub fn channel() -> (Self, mpsc::Receiver<Stage>) {
        let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
        (
            Self {
                sender: Some(sender),
            },
            receiver,
        )
    }

    /// Announce that the pipeline has entered `stage`.
    pub fn stage(&self, stage: Stage) {
        if let Some(sender) = &self.sender {
            if let Err(e) = sender.try_send(stage) {
                trace!(%stage, "dropped progress event: {e}");
            }
        }
    }
}

/// The spinner task started by [`spawn_spinner`].
pub struct SpinnerTask {
    handle: JoinHandle<ProgressBar>,
}

impl SpinnerTask {
    /// Wait for the channel to close, then clear the spinner line.
    ///
    /// Every `Progress` handle must have been dropped before calling this,
    /// otherwise it waits forever.
    pub async fn finish(self) -> Result<(), JoinError> {
        let bar = self.handle.await?;
        bar.finish_and_clear();
        Ok(())
    }
}

/// Start a spinner that follows the events sent through the returned handle.
pub fn spawn_spinner() -> (Progress, SpinnerTask) {
    let (progress, receiver) = Progress::channel();

    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.magenta} {msg}")
            .expect("Invalid spinner template"),
    );
    bar.enable_steady_tick(Duration::from_millis(50));

    let handle = tokio::spawn(follow_stages(receiver, bar));

    (progress, SpinnerTask { handle })
}

// Runs until every sender is gone, then hands the bar back for cleanup
async fn follow_stages(mut receiver: mpsc::Receiver<Stage>, bar: ProgressBar) -> ProgressBar {
    while let Some(stage) = receiver.recv().await {
        bar.set_message(format!("{stage} ..."));
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_messages() {
        assert_eq!(Stage::Fetching.to_string(), "Fetching data from github");
        assert_eq!(Stage::Verifying.to_string(), "Verifying response");
        assert_eq!(Stage::Filtering.to_string(), "Filtering repositories");
    }

    #[tokio::test]
    async fn test_events_arrive_in_order_and_channel_closes_on_drop() {
        let (progress, mut receiver) = Progress::channel();
        progress.stage(Stage::Fetching);
        progress.stage(Stage::Verifying);
        progress.stage(Stage::Filtering);
        drop(progress);

        let mut seen = Vec::new();
        while let Some(stage) = receiver.recv().await {
            seen.push(stage);
        }
        assert_eq!(seen, vec![Stage::Fetching, Stage::Verifying, Stage::Filtering]);
    }

    #[tokio::test]
    async fn test_full_channel_drops_instead_of_blocking() {
        let (progress, mut receiver) = Progress::channel();
        for _ in 0..CHANNEL_CAPACITY * 2 {
            progress.stage(Stage::Fetching);
        }
        drop(progress);

        let mut count = 0;
        while receiver.recv().await.is_some() {
            count += 1;
        }
        assert_eq!(count, CHANNEL_CAPACITY);
    }

    #[test]
    fn test_disabled_progress_ignores_events() {
        let progress = Progress::disabled();
        progress.stage(Stage::Fetching);
    }

    #[tokio::test]
    async fn test_spinner_finishes_once_progress_is_dropped() {
        let (progress, spinner) = spawn_spinner();
        progress.stage(Stage::Fetching);
        drop(progress);
        spinner.finish().await.unwrap();
    }
}
