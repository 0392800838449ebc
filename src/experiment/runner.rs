//! Experiment runner - paired execution, comparison, publish, return control

use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use super::order::OrderSource;
use super::{ExecutionOrder, Experiment, Failure, Observation, Outcome};
use crate::config::RunnerConfig;
use crate::publish::Publisher;

/// Runs experiments and publishes one observation per run.
///
/// Each [`run`](Self::run) is self-contained: nothing carries over between
/// calls except the order generator, so one runner can serve many
/// concurrent runs of the same or different experiments.
///
/// # Example
///
/// ```rust
/// use trueno_scientist::experiment::{Experiment, ExperimentRunner};
/// use trueno_scientist::publish::InMemoryPublisher;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let experiment = Experiment::<u32, String>::builder("exp1")
///     .control(|| async { Ok(42) })
///     .candidate(|| async { Ok(42) })
///     .build()?;
///
/// let runner = ExperimentRunner::new(InMemoryPublisher::new());
/// assert_eq!(runner.run(&experiment).await?, 42);
/// assert!(runner.publisher().latest("exp1").unwrap().matched());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ExperimentRunner<P> {
    publisher: P,
    config: RunnerConfig,
    order: OrderSource,
}

impl<P: Publisher> ExperimentRunner<P> {
    /// Create a runner with the default configuration (random order).
    #[must_use]
    pub fn new(publisher: P) -> Self {
        Self::with_config(publisher, RunnerConfig::default())
    }

    /// Create a runner with an explicit configuration.
    #[must_use]
    pub fn with_config(publisher: P, config: RunnerConfig) -> Self {
        Self {
            publisher,
            config,
            order: OrderSource::from_policy(config.order()),
        }
    }

    /// Get the publisher.
    #[must_use]
    pub const fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run both sides of `experiment` and return the control's result.
    ///
    /// The two operations execute one after the other, never concurrently,
    /// in an order chosen per call. The observation is published, and the
    /// publish call awaited, before this returns.
    ///
    /// # Errors
    ///
    /// Returns exactly the error the control operation returned. Candidate
    /// failures, publish errors and publisher panics are never surfaced.
    ///
    /// # Panics
    ///
    /// Resumes the control's panic, with its original payload, after the
    /// observation has been published. Also panics if the experiment's
    /// custom comparer panics, in which case nothing is published.
    pub async fn run<T, E>(&self, experiment: &Experiment<T, E>) -> Result<T, E> {
        let order = self.order.next();

        let (control, candidate) = match order {
            ExecutionOrder::ControlFirst => {
                let control = Outcome::capture(|| experiment.control()).await;
                let candidate = Outcome::capture(|| experiment.candidate()).await;
                (control, candidate)
            }
            ExecutionOrder::CandidateFirst => {
                let candidate = Outcome::capture(|| experiment.candidate()).await;
                let control = Outcome::capture(|| experiment.control()).await;
                (control, candidate)
            }
        };

        let observation = observe(experiment, order, &control, &candidate);

        tracing::debug!(
            experiment = experiment.name(),
            order = order.as_str(),
            matched = observation.matched(),
            control_ns = u64::try_from(control.duration().as_nanos()).unwrap_or(u64::MAX),
            candidate_ns = u64::try_from(candidate.duration().as_nanos()).unwrap_or(u64::MAX),
            "experiment run complete"
        );
        if let Some(failure) = candidate.failure() {
            tracing::debug!(
                experiment = experiment.name(),
                panicked = failure.is_panic(),
                "candidate failure absorbed"
            );
        }

        // A broken sink must not break the control path, whether it errors or panics.
        let published = AssertUnwindSafe(self.publisher.publish(&observation))
            .catch_unwind()
            .await;
        match published {
            Ok(Ok(())) => {}
            Ok(Err(err)) => tracing::warn!(
                experiment = experiment.name(),
                error = %err,
                "dropping observation after publish failure"
            ),
            Err(payload) => {
                let panic = Failure::<crate::Error>::Panic(payload);
                tracing::warn!(
                    experiment = experiment.name(),
                    panic = panic.panic_message().unwrap_or("<non-string payload>"),
                    "dropping observation after publisher panic"
                );
            }
        }

        match control.into_result() {
            Ok(value) => Ok(value),
            Err(Failure::Error(err)) => Err(err),
            Err(Failure::Panic(payload)) => std::panic::resume_unwind(payload),
        }
    }
}

fn observe<T, E>(
    experiment: &Experiment<T, E>,
    order: ExecutionOrder,
    control: &Outcome<T, E>,
    candidate: &Outcome<T, E>,
) -> Observation {
    // Failures are not compared: two failed sides never count as a match,
    // even when the failures are identical.
    let matched = if control.is_failure() && candidate.is_failure() {
        false
    } else {
        experiment
            .comparator()
            .matches(control.value(), candidate.value())
    };

    Observation::builder(experiment.name())
        .matched(matched)
        .durations(control.duration(), candidate.duration())
        .order(order)
        .failures(control.is_failure(), candidate.is_failure())
        .build()
}
