//! Experiment definition - named control/candidate pair plus comparator

use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;
use futures::FutureExt;

use super::Comparator;
use crate::{Error, Result};

/// Zero-argument async operation producing a result, callable repeatedly.
pub type Operation<T, E> =
    Box<dyn Fn() -> BoxFuture<'static, std::result::Result<T, E>> + Send + Sync>;

fn boxed<T, E, F, Fut>(operation: F) -> Operation<T, E>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
{
    Box::new(move || operation().boxed())
}

/// A named experiment: a trusted control, a candidate under test, and the
/// comparator that decides whether their values agree.
///
/// The definition is read-only while a run is in flight and may be run any
/// number of times.
///
/// # Example
///
/// ```rust
/// use trueno_scientist::experiment::Experiment;
///
/// let experiment = Experiment::<u32, String>::builder("checksum-rewrite")
///     .control(|| async { Ok(42) })
///     .candidate(|| async { Ok(42) })
///     .build()?;
///
/// assert_eq!(experiment.name(), "checksum-rewrite");
/// # Ok::<(), trueno_scientist::Error>(())
/// ```
pub struct Experiment<T, E> {
    name: String,
    control: Operation<T, E>,
    candidate: Operation<T, E>,
    comparator: Comparator<T>,
}

impl<T, E> Experiment<T, E> {
    /// Create a builder for an experiment with the given name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ExperimentBuilder<T, E> {
        ExperimentBuilder::new(name)
    }

    /// Get the experiment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the comparator.
    #[must_use]
    pub const fn comparator(&self) -> &Comparator<T> {
        &self.comparator
    }

    /// Start one execution of the control operation.
    #[must_use]
    pub fn control(&self) -> BoxFuture<'static, std::result::Result<T, E>> {
        (self.control)()
    }

    /// Start one execution of the candidate operation.
    #[must_use]
    pub fn candidate(&self) -> BoxFuture<'static, std::result::Result<T, E>> {
        (self.candidate)()
    }
}

impl<T, E> fmt::Debug for Experiment<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Experiment")
            .field("name", &self.name)
            .field("comparator", &self.comparator)
            .finish_non_exhaustive()
    }
}

/// Builder for `Experiment`.
pub struct ExperimentBuilder<T, E> {
    name: String,
    control: Option<Operation<T, E>>,
    candidate: Option<Operation<T, E>>,
    comparator: Option<Comparator<T>>,
}

impl<T, E> ExperimentBuilder<T, E> {
    /// Create a new builder with the experiment name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            control: None,
            candidate: None,
            comparator: None,
        }
    }

    /// Set the control operation, whose result the caller always receives.
    #[must_use]
    pub fn control<F, Fut>(mut self, operation: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
    {
        self.control = Some(boxed(operation));
        self
    }

    /// Set the candidate operation under test.
    #[must_use]
    pub fn candidate<F, Fut>(mut self, operation: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
    {
        self.candidate = Some(boxed(operation));
        self
    }

    /// Set a custom equivalence predicate, overriding `PartialEq`.
    #[must_use]
    pub fn comparer<F>(mut self, comparer: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.comparator = Some(Comparator::custom(comparer));
        self
    }

    /// Set a prepared comparator.
    #[must_use]
    pub fn comparator(mut self, comparator: Comparator<T>) -> Self {
        self.comparator = Some(comparator);
        self
    }

    /// Build the experiment, falling back to `PartialEq` when no comparer was set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExperiment`] if the name is blank or either
    /// operation is missing.
    pub fn build(mut self) -> Result<Experiment<T, E>>
    where
        T: PartialEq + 'static,
    {
        let comparator = self.comparator.take().unwrap_or_default();
        self.finish(comparator)
    }

    /// Build the experiment for a result type without `PartialEq`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExperiment`] if the name is blank or either
    /// operation is missing.
    pub fn build_with_comparer<F>(self, comparer: F) -> Result<Experiment<T, E>>
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.finish(Comparator::custom(comparer))
    }

    fn finish(self, comparator: Comparator<T>) -> Result<Experiment<T, E>> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidExperiment(
                "experiment name must not be blank".to_string(),
            ));
        }
        let control = self.control.ok_or_else(|| {
            Error::InvalidExperiment(format!("'{}' has no control operation", self.name))
        })?;
        let candidate = self.candidate.ok_or_else(|| {
            Error::InvalidExperiment(format!("'{}' has no candidate operation", self.name))
        })?;

        Ok(Experiment {
            name: self.name,
            control,
            candidate,
            comparator,
        })
    }
}

impl<T, E> fmt::Debug for ExperimentBuilder<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExperimentBuilder")
            .field("name", &self.name)
            .field("has_control", &self.control.is_some())
            .field("has_candidate", &self.candidate.is_some())
            .field("comparator", &self.comparator)
            .finish()
    }
}
