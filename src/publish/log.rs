//! Publisher that reports observations as structured `tracing` events.

use super::Publisher;
use crate::experiment::Observation;
use crate::Result;
use std::time::Duration;

/// Emits each observation as a `tracing` event on the
/// `trueno_scientist::observation` target.
///
/// Matches are logged at `INFO`, mismatches at `WARN`, so a filter such as
/// `trueno_scientist::observation=warn` surfaces only divergent runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPublisher;

impl TracingPublisher {
    /// Create a new tracing publisher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

impl Publisher for TracingPublisher {
    async fn publish(&self, observation: &Observation) -> Result<()> {
        let control_us = micros(observation.control_duration());
        let candidate_us = micros(observation.candidate_duration());

        if observation.matched() {
            tracing::info!(
                target: "trueno_scientist::observation",
                experiment = observation.name(),
                matched = true,
                control_us,
                candidate_us,
                order = observation.order().as_str(),
                "experiment matched"
            );
        } else {
            tracing::warn!(
                target: "trueno_scientist::observation",
                experiment = observation.name(),
                matched = false,
                control_us,
                candidate_us,
                control_failed = observation.control_failed(),
                candidate_failed = observation.candidate_failed(),
                order = observation.order().as_str(),
                "experiment mismatch"
            );
        }
        Ok(())
    }
}
