use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{FrameClock, FrameTime};

/// ~60 Hz, the animated-face cadence.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(16);

/// Directive returned by tick callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Periodic tick source.
///
/// The callback runs to completion inside the tick task before the next tick
/// is awaited, so frames never overlap. Late ticks are skipped rather than
/// bursted.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self { period: period.max(Duration::from_millis(1)) }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Starts ticking on the current tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn spawn<F>(&self, mut on_tick: F) -> TickHandle
    where
        F: FnMut(FrameTime) -> TickControl + Send + 'static,
    {
        let period = self.period;
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut clock = FrameClock::new();

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = interval.tick() => {
                        if on_tick(clock.tick()) == TickControl::Stop {
                            break;
                        }
                    }
                }
            }
            log::debug!("ticker stopped after {} frames", clock.frame_index());
        });

        TickHandle { stop: Some(stop_tx), task: Some(task) }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD)
    }
}

/// Subscription to a running [`Ticker`].
///
/// Dropping the handle aborts the tick task, so a face that is torn down
/// (including by an error unwinding through its owner) stops being painted.
#[derive(Debug)]
pub struct TickHandle {
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl TickHandle {
    /// Requests a stop and waits for the in-flight frame to finish.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop.take() {
            let _ = tx.send(());
        }
        self.join_task().await;
    }

    /// Waits until the callback itself ends the loop.
    pub async fn finished(mut self) {
        self.join_task().await;
    }

    async fn join_task(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                if err.is_panic() {
                    log::error!("tick callback panicked");
                }
            }
        }
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
