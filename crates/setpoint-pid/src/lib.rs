//! setpoint-pid: PID feedback controller with runtime gain scheduling.
//!
//! The feedback principle: constantly compare the actual output to the set
//! point, then apply a corrective action in the proper direction and of
//! approximately the correct size. Iteratively applying changes in the
//! correct direction converges on the target value over time.
//!
//! The [`Dampener`] is a shared scalar multiplier read on every correction
//! step, letting external logic scale controller aggressiveness at runtime
//! without reconstructing the controller.

pub mod controller;
pub mod dampener;

pub use controller::{Controller, PidController};
pub use dampener::Dampener;
