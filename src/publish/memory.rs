//! In-memory publisher using `DashMap`.
//!
//! Observations are lost on process restart. Intended for tests and for
//! short-lived inspection of recent runs.

use super::Publisher;
use crate::experiment::Observation;
use crate::Result;
use dashmap::DashMap;

/// In-memory observation sink keyed by experiment name.
///
/// Thread-safe; concurrent runs publish without contending on a global lock.
///
/// # Example
///
/// ```rust
/// use trueno_scientist::experiment::Observation;
/// use trueno_scientist::publish::{InMemoryPublisher, Publisher};
///
/// # async fn example() -> trueno_scientist::Result<()> {
/// let publisher = InMemoryPublisher::new();
/// publisher.publish(&Observation::builder("exp").build()).await?;
/// assert!(publisher.latest("exp").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct InMemoryPublisher {
    observations: DashMap<String, Vec<Observation>>,
}

impl InMemoryPublisher {
    /// Create an empty publisher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observations: DashMap::new(),
        }
    }

    /// All observations recorded for an experiment, in publish order.
    #[must_use]
    pub fn observations(&self, name: &str) -> Vec<Observation> {
        self.observations
            .get(name)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Most recent observation for an experiment.
    #[must_use]
    pub fn latest(&self, name: &str) -> Option<Observation> {
        self.observations
            .get(name)
            .and_then(|entry| entry.value().last().cloned())
    }

    /// Names of every experiment with at least one observation.
    #[must_use]
    pub fn experiment_names(&self) -> Vec<String> {
        self.observations
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Total number of observations across all experiments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.iter().map(|entry| entry.value().len()).sum()
    }

    /// Check if nothing has been published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Drop all recorded observations.
    pub fn clear(&self) {
        self.observations.clear();
    }
}

impl Default for InMemoryPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl Publisher for InMemoryPublisher {
    async fn publish(&self, observation: &Observation) -> Result<()> {
        self.observations
            .entry(observation.name().to_string())
            .or_default()
            .push(observation.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_memory_publish_and_get() {
        let publisher = InMemoryPublisher::new();

        publisher
            .publish(&Observation::builder("exp").matched(true).build())
            .await
            .unwrap();

        let observations = publisher.observations("exp");
        assert_eq!(observations.len(), 1);
        assert!(observations[0].matched());
    }

    #[tokio::test]
    async fn test_memory_unknown_experiment() {
        let publisher = InMemoryPublisher::new();

        assert!(publisher.observations("missing").is_empty());
        assert!(publisher.latest("missing").is_none());
    }

    #[tokio::test]
    async fn test_memory_preserves_publish_order() {
        let publisher = InMemoryPublisher::new();

        publisher
            .publish(&Observation::builder("exp").matched(false).build())
            .await
            .unwrap();
        publisher
            .publish(&Observation::builder("exp").matched(true).build())
            .await
            .unwrap();

        let observations = publisher.observations("exp");
        assert!(!observations[0].matched());
        assert!(observations[1].matched());
        assert!(publisher.latest("exp").unwrap().matched());
    }

    #[tokio::test]
    async fn test_memory_len_and_clear() {
        let publisher = InMemoryPublisher::new();
        assert!(publisher.is_empty());

        publisher.publish(&Observation::builder("a").build()).await.unwrap();
        publisher.publish(&Observation::builder("a").build()).await.unwrap();
        publisher.publish(&Observation::builder("b").build()).await.unwrap();

        assert_eq!(publisher.len(), 3);
        let mut names = publisher.experiment_names();
        names.sort();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);

        publisher.clear();
        assert!(publisher.is_empty());
        assert_eq!(publisher.len(), 0);
    }

    #[tokio::test]
    async fn test_memory_concurrent_publish() {
        let publisher = Arc::new(InMemoryPublisher::new());
        let mut handles = vec![];

        for i in 0..100 {
            let publisher = Arc::clone(&publisher);
            handles.push(tokio::spawn(async move {
                let name = format!("exp{}", i % 4);
                publisher
                    .publish(&Observation::builder(name).build())
                    .await
                    .unwrap();
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(publisher.len(), 100);
        assert_eq!(publisher.observations("exp0").len(), 25);
    }
}
