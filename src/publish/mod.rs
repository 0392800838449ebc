//! Observation sinks
//!
//! A [`Publisher`] receives one [`Observation`] per experiment run. The
//! runner awaits each `publish` call before handing the control's result
//! back to its caller, so a sink can rely on observations arriving before
//! the instrumented call site moves on.
//!
//! # Example
//!
//! ```rust,no_run
//! use trueno_scientist::experiment::Observation;
//! use trueno_scientist::publish::{InMemoryPublisher, Publisher};
//!
//! # async fn example() -> trueno_scientist::Result<()> {
//! let publisher = InMemoryPublisher::new();
//!
//! publisher.publish(&Observation::builder("exp").matched(true).build()).await?;
//! assert_eq!(publisher.observations("exp").len(), 1);
//! # Ok(())
//! # }
//! ```

mod log;
mod memory;

pub use log::TracingPublisher;
pub use memory::InMemoryPublisher;

use crate::experiment::Observation;
use crate::Result;
use std::future::Future;
use std::sync::Arc;

/// Sink for experiment observations (storage, metrics export, logging).
///
/// Returning an error does not affect the experiment's caller: the runner
/// logs the failure and drops it.
pub trait Publisher: Send + Sync {
    /// Publish one observation.
    fn publish(&self, observation: &Observation) -> impl Future<Output = Result<()>> + Send;
}

impl<P: Publisher> Publisher for Arc<P> {
    fn publish(&self, observation: &Observation) -> impl Future<Output = Result<()>> + Send {
        (**self).publish(observation)
    }
}

/// Publisher that discards every observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPublisher;

impl Publisher for NoopPublisher {
    async fn publish(&self, _observation: &Observation) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_publisher() {
        let observation = Observation::builder("noop").build();
        NoopPublisher.publish(&observation).await.unwrap();
    }

    #[tokio::test]
    async fn test_arc_publisher_delegates() {
        let publisher = Arc::new(InMemoryPublisher::new());
        let shared = Arc::clone(&publisher);

        shared
            .publish(&Observation::builder("arc").build())
            .await
            .unwrap();

        assert_eq!(publisher.len(), 1);
    }
}
