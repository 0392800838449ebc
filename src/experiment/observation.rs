//! Observation - immutable record of one control/candidate run

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ExecutionOrder;

/// Observation describes a single experiment run.
///
/// Built once by the runner, fully populated, then handed to a
/// [`Publisher`](crate::publish::Publisher) by reference. There are no
/// setters; an observation never changes after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Observation {
    name: String,
    matched: bool,
    control_duration: Duration,
    candidate_duration: Duration,
    order: ExecutionOrder,
    control_failed: bool,
    candidate_failed: bool,
    observed_at: DateTime<Utc>,
}

impl Observation {
    /// Create a builder with the experiment name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ObservationBuilder {
        ObservationBuilder::new(name)
    }

    /// Get the experiment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether control and candidate were judged equivalent.
    #[must_use]
    pub const fn matched(&self) -> bool {
        self.matched
    }

    /// Wall-clock time of the control execution alone.
    #[must_use]
    pub const fn control_duration(&self) -> Duration {
        self.control_duration
    }

    /// Wall-clock time of the candidate execution alone.
    #[must_use]
    pub const fn candidate_duration(&self) -> Duration {
        self.candidate_duration
    }

    /// Which side ran first.
    #[must_use]
    pub const fn order(&self) -> ExecutionOrder {
        self.order
    }

    /// Whether the control returned an error or panicked.
    #[must_use]
    pub const fn control_failed(&self) -> bool {
        self.control_failed
    }

    /// Whether the candidate returned an error or panicked.
    #[must_use]
    pub const fn candidate_failed(&self) -> bool {
        self.candidate_failed
    }

    /// When the observation was recorded.
    #[must_use]
    pub const fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }
}

/// Builder for `Observation`.
#[derive(Debug)]
pub struct ObservationBuilder {
    name: String,
    matched: bool,
    control_duration: Duration,
    candidate_duration: Duration,
    order: ExecutionOrder,
    control_failed: bool,
    candidate_failed: bool,
    observed_at: DateTime<Utc>,
}

impl ObservationBuilder {
    /// Create a new builder. Defaults to an unmatched, zero-duration,
    /// control-first observation stamped with the current time.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matched: false,
            control_duration: Duration::ZERO,
            candidate_duration: Duration::ZERO,
            order: ExecutionOrder::ControlFirst,
            control_failed: false,
            candidate_failed: false,
            observed_at: Utc::now(),
        }
    }

    /// Set the comparison result.
    #[must_use]
    pub const fn matched(mut self, matched: bool) -> Self {
        self.matched = matched;
        self
    }

    /// Set both measured durations.
    #[must_use]
    pub const fn durations(mut self, control: Duration, candidate: Duration) -> Self {
        self.control_duration = control;
        self.candidate_duration = candidate;
        self
    }

    /// Set the execution order.
    #[must_use]
    pub const fn order(mut self, order: ExecutionOrder) -> Self {
        self.order = order;
        self
    }

    /// Record which sides failed.
    #[must_use]
    pub const fn failures(mut self, control_failed: bool, candidate_failed: bool) -> Self {
        self.control_failed = control_failed;
        self.candidate_failed = candidate_failed;
        self
    }

    /// Set a custom timestamp (useful for deserialization/testing).
    #[must_use]
    pub const fn observed_at(mut self, observed_at: DateTime<Utc>) -> Self {
        self.observed_at = observed_at;
        self
    }

    /// Build the `Observation`.
    #[must_use]
    pub fn build(self) -> Observation {
        Observation {
            name: self.name,
            matched: self.matched,
            control_duration: self.control_duration,
            candidate_duration: self.candidate_duration,
            order: self.order,
            control_failed: self.control_failed,
            candidate_failed: self.candidate_failed,
            observed_at: self.observed_at,
        }
    }
}
