// Live status tracker: a scoped polling task feeding a watch channel.
//
// The task fetches once on start and then on every interval tick. A failed
// fetch logs and leaves the published set alone, so readers keep the last
// known state until the next success. The task lives exactly as long as its
// handle.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use super::{LiveTeams, ScoreboardSource};

/// Owner of a running tracker. Dropping it stops polling.
pub struct LiveStatusHandle {
    rx: watch::Receiver<LiveTeams>,
    task: JoinHandle<()>,
}

impl LiveStatusHandle {
    /// Start polling `source` every `interval`, beginning immediately.
    ///
    /// `initial` is published until the first successful fetch, which lets a
    /// restarted tracker keep showing the last set it knew about.
    pub fn start(
        source: Arc<dyn ScoreboardSource>,
        interval: Duration,
        initial: LiveTeams,
    ) -> Self {
        let (tx, rx) = watch::channel(initial);
        info!("Live tracker started (every {}s)", interval.as_secs());
        let task = tokio::spawn(poll_loop(source, interval, tx));
        Self { rx, task }
    }

    /// The current set; cheap to call from a render loop.
    pub fn snapshot(&self) -> LiveTeams {
        self.rx.borrow().clone()
    }

    pub fn is_live(&self, team: &str) -> bool {
        self.rx.borrow().is_live(team)
    }

    /// A receiver that is notified whenever the set is replaced.
    pub fn subscribe(&self) -> watch::Receiver<LiveTeams> {
        self.rx.clone()
    }

    /// Stop polling and return the last published set.
    pub fn stop(self) -> LiveTeams {
        self.snapshot()
    }
}

impl Drop for LiveStatusHandle {
    fn drop(&mut self) {
        self.task.abort();
        debug!("Live tracker stopped");
    }
}

async fn poll_loop(
    source: Arc<dyn ScoreboardSource>,
    interval: Duration,
    tx: watch::Sender<LiveTeams>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        refresh_once(source.as_ref(), &tx).await;
    }
}

/// Fetch once and publish on success. Returns whether the set was replaced.
pub async fn refresh_once(source: &dyn ScoreboardSource, tx: &watch::Sender<LiveTeams>) -> bool {
    match source.fetch_live_teams().await {
        Ok(teams) => {
            debug!("Live teams refreshed: {} playing", teams.len());
            tx.send_replace(LiveTeams {
                teams,
                refreshed_at: Some(Utc::now()),
            });
            true
        }
        Err(e) => {
            warn!("Live status refresh failed, keeping previous set: {e}");
            false
        }
    }
}
