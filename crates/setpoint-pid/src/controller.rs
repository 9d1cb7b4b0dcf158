//! Feedback controller implementations.

use setpoint_core::ConfigError;

use crate::dampener::Dampener;

/// Single-input-single-output feedback function: error in, correction out.
///
/// Implementations are stateful. Callers must deliver steps serialized in
/// arrival order; the state is not safe for concurrent mutation.
pub trait Controller {
    fn process_step(&mut self, error: f64) -> f64;
}

/// Proportional-Integral-Derivative three-term controller.
///
/// Setting an individual gain to zero degenerates the controller to fewer
/// terms (PI, PD, P) with no special casing. The integral accumulator is
/// unbounded: there is no anti-windup clamp, so callers compensate with
/// gain tuning or dead-zone sizing.
#[derive(Debug)]
pub struct PidController {
    kp: f64,
    ki: f64,
    kd: f64,
    delta_t: f64,
    dampener: Dampener,
    previous: f64,
    integral: f64,
}

impl PidController {
    /// Controller with the given gains, a unit time step, and a fresh
    /// neutral dampener.
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self {
            kp,
            ki,
            kd,
            delta_t: 1.0,
            dampener: Dampener::default(),
            previous: 0.0,
            integral: 0.0,
        }
    }

    /// Override the time-step divisor. Must be strictly positive.
    pub fn with_delta_t(mut self, delta_t: f64) -> Result<Self, ConfigError> {
        // Also rejects NaN.
        if !(delta_t > 0.0) {
            return Err(ConfigError::TimeStep(delta_t));
        }
        self.delta_t = delta_t;
        Ok(self)
    }

    /// Attach a shared dampener for gain scheduling.
    pub fn with_dampener(mut self, dampener: Dampener) -> Self {
        self.dampener = dampener;
        self
    }

    /// Handle to the dampener this controller reads on every step.
    pub fn dampener(&self) -> Dampener {
        self.dampener.clone()
    }
}

impl Controller for PidController {
    fn process_step(&mut self, error: f64) -> f64 {
        self.integral += self.delta_t * error;
        let derivative = (error - self.previous) / self.delta_t;
        self.previous = error;

        // One atomic read per step; not transactional with the rest.
        let d = self.dampener.get();

        self.kp * d * error + self.ki * d * self.integral + self.kd * d * derivative
    }
}
