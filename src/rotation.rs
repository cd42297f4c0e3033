//! Periodic auto-advance.
//!
//! The controller never touches slide state. While running it owns one timer
//! task that posts [`CarouselEvent::RotationTick`] into the carousel's event
//! channel; the carousel loop applies the tick like a "next" click.

use std::time::Duration;

use tokio::select;
use tokio::sync::mpsc::WeakSender;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::CarouselError;
use crate::events::CarouselEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationState {
    Stopped,
    Running,
}

#[derive(Debug)]
struct Timer {
    generation: u64,
    cancel: CancellationToken,
}

/// Two-state rotation timer. At most one timer task is live at a time.
#[derive(Debug)]
pub struct RotationController {
    interval: Duration,
    ticks: WeakSender<CarouselEvent>,
    generation: u64,
    timer: Option<Timer>,
}

impl RotationController {
    /// # Errors
    /// Returns [`CarouselError::ZeroInterval`] if `interval` is zero.
    pub fn new(
        interval: Duration,
        ticks: WeakSender<CarouselEvent>,
    ) -> Result<Self, CarouselError> {
        if interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(Self {
            interval,
            ticks,
            generation: 0,
            timer: None,
        })
    }

    pub fn state(&self) -> RotationState {
        if self.timer.is_some() {
            RotationState::Running
        } else {
            RotationState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Generation of the live timer, if any.
    pub fn generation(&self) -> Option<u64> {
        self.timer.as_ref().map(|t| t.generation)
    }

    /// Flip between running and stopped; returns the new state.
    pub fn toggle(&mut self) -> RotationState {
        match self.state() {
            RotationState::Running => self.stop(),
            RotationState::Stopped => self.start(),
        }
        self.state()
    }

    /// Start the timer. A live timer is cancelled first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        self.stop();
        self.generation += 1;
        let cancel = CancellationToken::new();
        tokio::spawn(tick_loop(
            self.interval,
            self.generation,
            self.ticks.clone(),
            cancel.clone(),
        ));
        debug!(
            generation = self.generation,
            interval = %humantime::format_duration(self.interval),
            "rotation started"
        );
        self.timer = Some(Timer {
            generation: self.generation,
            cancel,
        });
    }

    /// Cancel the timer. Stopping a stopped controller does nothing.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel.cancel();
            debug!(generation = timer.generation, "rotation stopped");
        }
    }

    /// Change the period, restarting a running timer so it takes effect.
    ///
    /// # Errors
    /// Returns [`CarouselError::ZeroInterval`] if `interval` is zero; the
    /// previous period stays in force.
    pub fn set_interval(&mut self, interval: Duration) -> Result<(), CarouselError> {
        if interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        self.interval = interval;
        if self.is_running() {
            self.start();
        }
        Ok(())
    }

    /// Whether a tick stamped with `generation` comes from the live timer.
    pub fn accepts(&self, generation: u64) -> bool {
        self.generation() == Some(generation)
    }
}

impl Drop for RotationController {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn tick_loop(
    period: Duration,
    generation: u64,
    ticks: WeakSender<CarouselEvent>,
    cancel: CancellationToken,
) {
    // First firing one full period after start.
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {
                let Some(tx) = ticks.upgrade() else {
                    debug!(generation, "carousel gone; rotation timer exiting");
                    break;
                };
                if tx.send(CarouselEvent::RotationTick { generation }).await.is_err() {
                    break;
                }
            }
        }
    }
}
