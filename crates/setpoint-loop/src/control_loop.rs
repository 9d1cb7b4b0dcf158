//! Control loop: one feedback loop per tracked metric and resource pool.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use setpoint_core::{ConfigError, Event, LoopConfig};
use setpoint_pid::{Controller, Dampener, PidController};

use crate::actuator::Actuator;

/// Drives the filter, error, dead-zone, PID, cooldown, clamp, and actuate
/// stages over an event stream.
///
/// The loop is a single logical sequential process: events are processed
/// strictly in arrival order and the controller's state is never mutated
/// concurrently. Independent loops (other metrics, other pools) run as
/// separate instances with no shared state except an optionally shared
/// dampener.
pub struct ControlLoop {
    config: LoopConfig,
    controller: PidController,
    actuator: Actuator,
    /// Baseline for the next correction: the last size the actuator
    /// realized, or the caller-supplied initial size before any event.
    last_size: f64,
    /// When the last real (non-zero-correction) actuation happened.
    last_actuation: Option<Instant>,
}

impl ControlLoop {
    /// Build a loop from a configuration, an actuator, and the pre-loop
    /// baseline size. Fails if the configuration is invalid.
    pub fn new(
        config: LoopConfig,
        actuator: Actuator,
        initial_size: f64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let controller = PidController::new(config.kp, config.ki, config.kd);
        Ok(Self {
            config,
            controller,
            actuator,
            last_size: initial_size,
            last_actuation: None,
        })
    }

    /// Handle to the controller's dampener, for external gain scheduling.
    pub fn dampener(&self) -> Dampener {
        self.controller.dampener()
    }

    /// Process one event. Returns `None` when the event is for a metric
    /// this loop does not track, otherwise the realized size.
    pub async fn step(&mut self, event: Event) -> Option<f64> {
        if event.metric != self.config.metric {
            debug!(
                metric = %event.metric,
                tracked = %self.config.metric,
                "dropping event for untracked metric"
            );
            return None;
        }

        let error = event.value - self.config.set_point;

        // Inside the dead zone the controller still steps, on zero error,
        // so its derivative trend decays instead of freezing.
        let adjusted = if self.config.rope.contains(error) {
            debug!(error, "error within rope band, no corrective force");
            0.0
        } else {
            error
        };

        let correction = self.controller.process_step(adjusted);

        let now = Instant::now();
        if let Some(last) = self.last_actuation
            && now.duration_since(last) < self.config.cooldown
        {
            // Cooled ticks skip the actuator; the output stream still gets
            // one value per accepted event.
            debug!(size = self.last_size, "cooling down, re-emitting last size");
            return Some(self.last_size);
        }

        let proposed = self.last_size + correction;
        let clamped = proposed.clamp(self.config.min_size as f64, self.config.max_size as f64);

        match self.actuator.apply(clamped).await {
            Ok(realized) => {
                debug!(
                    from = self.last_size,
                    requested = clamped,
                    realized,
                    "actuated"
                );
                self.last_size = realized;
                // A zero correction changes nothing and does not start a
                // new cooldown window.
                if correction != 0.0 {
                    self.last_actuation = Some(now);
                }
                Some(realized)
            }
            Err(e) => {
                // Baseline and cooldown state stay untouched; the actuator
                // owns retries.
                warn!(
                    requested = clamped,
                    error = %e,
                    "actuation failed, keeping previous size"
                );
                Some(self.last_size)
            }
        }
    }

    /// Run the loop until the event stream closes, the output receiver is
    /// dropped, or the shutdown signal fires.
    pub async fn run(
        mut self,
        mut events: mpsc::Receiver<Event>,
        out: mpsc::Sender<f64>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        info!(
            metric = %self.config.metric,
            initial = self.last_size,
            "control loop started"
        );

        loop {
            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else {
                        info!(metric = %self.config.metric, "event stream closed, control loop stopping");
                        break;
                    };
                    if let Some(size) = self.step(event).await
                        && out.send(size).await.is_err()
                    {
                        info!(metric = %self.config.metric, "output receiver dropped, control loop stopping");
                        break;
                    }
                }
                _ = shutdown.changed() => {
                    info!(metric = %self.config.metric, "control loop shutting down");
                    break;
                }
            }
        }
    }

    /// Spawn the loop on the runtime, wiring an output channel. Returns
    /// the realized-size receiver and the task handle.
    pub fn spawn(
        self,
        events: mpsc::Receiver<Event>,
        shutdown: watch::Receiver<bool>,
    ) -> (mpsc::Receiver<f64>, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(64);
        let handle = tokio::spawn(self.run(events, tx, shutdown));
        (rx, handle)
    }
}
