//! Self-rescheduling countdown session.
//!
//! A session owns at most one spawned task. Each firing reads the clock,
//! ticks a [`CountdownEngine`], pushes the frame to the display sink and
//! sleeps until the next whole second. Starting again, stopping or dropping
//! the session aborts the outstanding task first.

use std::sync::{Arc, Weak};

use chrono::{DateTime, TimeZone};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::clock::Clock;
use super::engine::CountdownEngine;
use crate::calendar::parse_target;
use crate::display::DisplaySink;
use crate::error::TargetError;

/// Countdown owned by whatever displays it.
///
/// The sink is held weakly: once its owner drops it the task stops
/// rescheduling on its own. Requires a Tokio runtime to start.
pub struct CountdownSession<Tz: TimeZone> {
    clock: Arc<dyn Clock<Tz>>,
    sink: Weak<dyn DisplaySink>,
    task: Option<JoinHandle<()>>,
}

impl<Tz> CountdownSession<Tz>
where
    Tz: TimeZone + Send + Sync + 'static,
    Tz::Offset: Send + Sync,
{
    pub fn new(clock: Arc<dyn Clock<Tz>>, sink: &Arc<dyn DisplaySink>) -> Self {
        Self {
            clock,
            sink: Arc::downgrade(sink),
            task: None,
        }
    }

    /// Start counting down to `target`, replacing any running countdown.
    ///
    /// An absent, blank or malformed target leaves the session idle without
    /// touching the display. Returns whether a countdown is now scheduled.
    pub fn start(&mut self, target: Option<&str>) -> bool {
        self.stop();

        let tz = self.clock.now().timezone();
        let parsed = match target {
            Some(text) => parse_target(text, &tz),
            None => Err(TargetError::Missing),
        };

        match parsed {
            Ok(at) => {
                self.start_at(at);
                true
            }
            Err(err) => {
                warn!(%err, "no usable countdown target; countdown left idle");
                false
            }
        }
    }

    /// Start counting down to an already-parsed instant.
    pub fn start_at(&mut self, target: DateTime<Tz>) {
        self.stop();
        info!(countdown_to = %target.naive_local(), "starting countdown");

        let engine = CountdownEngine::with_target(target);
        let clock = Arc::clone(&self.clock);
        let sink = self.sink.clone();
        self.task = Some(tokio::spawn(run_countdown(engine, clock, sink)));
    }

    /// Cancel the outstanding firing, if any.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("cancelling countdown task");
            task.abort();
        }
    }

    /// Whether a firing is still scheduled.
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Wait until the current countdown ends on its own (target reached or
    /// sink dropped). Returns immediately when idle.
    pub async fn wait(&mut self) {
        if let Some(task) = self.task.as_mut() {
            if let Err(err) = task.await {
                if err.is_panic() {
                    warn!(%err, "countdown task panicked");
                }
            }
        }
        self.task = None;
    }
}

impl<Tz: TimeZone> Drop for CountdownSession<Tz> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run_countdown<Tz>(
    mut engine: CountdownEngine<Tz>,
    clock: Arc<dyn Clock<Tz>>,
    sink: Weak<dyn DisplaySink>,
) where
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Send + Sync,
{
    loop {
        let Some(display) = sink.upgrade() else {
            debug!("display sink dropped; countdown stopped");
            return;
        };

        let now = clock.now();
        let Some(frame) = engine.tick(&now) else {
            return;
        };
        display.show(&frame);
        drop(display);

        let Some(delay) = engine.next_delay(&now) else {
            info!("countdown target reached");
            return;
        };
        if sink.strong_count() == 0 {
            debug!("display sink dropped; countdown stopped");
            return;
        }
        debug!(delay_ms = delay.as_millis() as u64, "next countdown tick scheduled");
        tokio::time::sleep(delay).await;
    }
}
