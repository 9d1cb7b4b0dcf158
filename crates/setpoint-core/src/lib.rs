//! setpoint-core: domain types for the setpoint feedback controller.
//!
//! A control loop tracks exactly one [`Metric`], consumes [`Event`]
//! observations for it, and is parameterized by an immutable
//! [`LoopConfig`]. Invalid configurations are rejected at construction
//! with a [`ConfigError`] rather than silently clamped.

pub mod config;
pub mod error;
pub mod types;

pub use config::{LoopConfig, RopeBand};
pub use error::ConfigError;
pub use types::{Event, Metric};
