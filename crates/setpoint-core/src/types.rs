//! Metric identities and sampled events.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a scalar metric tracked by a control loop.
///
/// Closed set; equality is by identity. A loop instance tracks exactly one
/// metric and filters everything else out of a multiplexed event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Cpu,
    Memory,
    Network,
    Rps,
    LatencyP99,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Cpu => "cpu",
            Metric::Memory => "memory",
            Metric::Network => "network",
            Metric::Rps => "rps",
            Metric::LatencyP99 => "latency_p99",
        };
        f.write_str(name)
    }
}

/// A single metric observation: which metric, and the sampled value.
///
/// Immutable. Produced by the metric transport, consumed once by a loop's
/// filter stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub metric: Metric,
    pub value: f64,
}

impl Event {
    pub fn new(metric: Metric, value: f64) -> Self {
        Self { metric, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_equality_is_by_identity() {
        assert_eq!(Metric::Cpu, Metric::Cpu);
        assert_ne!(Metric::Cpu, Metric::Network);
    }

    #[test]
    fn metric_display_names() {
        assert_eq!(Metric::Cpu.to_string(), "cpu");
        assert_eq!(Metric::Rps.to_string(), "rps");
        assert_eq!(Metric::LatencyP99.to_string(), "latency_p99");
    }

    #[test]
    fn event_carries_metric_and_value() {
        let e = Event::new(Metric::Rps, 120.5);
        assert_eq!(e.metric, Metric::Rps);
        assert_eq!(e.value, 120.5);
    }
}
