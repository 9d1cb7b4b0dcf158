//! setpoint-loop: the control-loop orchestrator.
//!
//! Subscribes to a multiplexed stream of metric events, keeps only the
//! configured metric, and drives a PID controller through dead-zone and
//! cooldown policy before handing the result to an actuator:
//!
//! ```text
//! events -> filter -> error -> dead-zone -> PID -> cooldown gate -> clamp -> actuator
//! ```
//!
//! One realized size is emitted downstream per accepted (non-filtered)
//! event, in acceptance order. The loop terminates when the event stream
//! closes, the output receiver is dropped, or the shutdown signal fires.

pub mod actuator;
pub mod control_loop;

pub use actuator::Actuator;
pub use control_loop::ControlLoop;
