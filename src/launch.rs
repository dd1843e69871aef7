//! Simulated game launch.
//!
//! A launch only waits a fixed delay on a tokio task and then reports back
//! on a channel. The UI loop drains the channel each tick and applies the
//! result to the session state, so the session state keeps a single writer.
//! Timers cannot be cancelled and cannot fail.

use crate::state::SessionState;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

/// Delay between selecting a game and the launch being reported as done.
pub const DEFAULT_LAUNCH_DELAY: Duration = Duration::from_millis(2000);

/// Events produced by launch timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchEvent {
    /// The simulated delay for `title` elapsed.
    Ready { title: String },
}

impl LaunchEvent {
    /// Apply this event to the session. Returns the title that was cleared.
    pub fn apply(&self, session: &mut SessionState) -> Option<String> {
        match self {
            LaunchEvent::Ready { title } => {
                info!("Successfully launched and streaming: {}", title);
                session.finish_launch()
            }
        }
    }

    /// Message for the completion toast.
    pub fn message(&self) -> String {
        match self {
            LaunchEvent::Ready { title } => format!("Now streaming: {}", title),
        }
    }
}

/// Spawns launch timers and collects their completions.
pub struct LaunchSimulator {
    handle: Handle,
    delay: Duration,
    tx: UnboundedSender<LaunchEvent>,
    rx: UnboundedReceiver<LaunchEvent>,
}

impl LaunchSimulator {
    /// Create a simulator that spawns its timers on `handle`.
    pub fn new(handle: Handle, delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            delay,
            tx,
            rx,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start the launch timer for `title`. Fire and forget.
    ///
    /// A real implementation would connect to the companion app here, send
    /// the launch command and start receiving the video stream.
    pub fn start(&self, title: &str) {
        let tx = self.tx.clone();
        let delay = self.delay;
        let title = title.to_string();
        info!("Launching {} (simulated, {:?})", title, delay);
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver lives as long as the simulator; ignore a closed channel on shutdown
            if tx.send(LaunchEvent::Ready { title }).is_err() {
                debug!("Launch finished after the simulator was dropped");
            }
        });
    }

    /// Collect every completion that arrived since the last call, without blocking.
    pub fn poll(&mut self) -> Vec<LaunchEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Wait for the next completion.
    pub async fn next_event(&mut self) -> Option<LaunchEvent> {
        self.rx.recv().await
    }
}
