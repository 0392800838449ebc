//! Result comparator - equivalence between control and candidate values

use std::fmt;
use std::sync::Arc;

type CompareFn<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Decides whether a control value and a candidate value are equivalent.
///
/// Null handling always runs first, so the equality function is only ever
/// invoked with two present values:
///
/// 1. both absent: match
/// 2. exactly one absent: no match
/// 3. otherwise: the caller's comparer if one was supplied, else `PartialEq`
///
/// The default is picked at the type level: [`Comparator::equality`] only
/// exists for `T: PartialEq`. Result types without `PartialEq` must bring a
/// comparer via [`Comparator::custom`].
pub struct Comparator<T> {
    compare: CompareFn<T>,
    custom: bool,
}

impl<T> Comparator<T> {
    /// Comparator backed by `PartialEq`.
    #[must_use]
    pub fn equality() -> Self
    where
        T: PartialEq + 'static,
    {
        Self {
            compare: Arc::new(|control: &T, candidate: &T| control == candidate),
            custom: false,
        }
    }

    /// Comparator backed by a caller-supplied predicate.
    ///
    /// The predicate overrides default equality entirely. It must not panic:
    /// a panic here is not caught and propagates out of the experiment run.
    #[must_use]
    pub fn custom<F>(comparer: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            compare: Arc::new(comparer),
            custom: true,
        }
    }

    /// Whether a caller-supplied predicate is in use.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.custom
    }

    /// Compare the value portions of two outcomes.
    ///
    /// # Panics
    ///
    /// Panics if the custom comparer panics.
    #[must_use]
    pub fn matches(&self, control: Option<&T>, candidate: Option<&T>) -> bool {
        match (control, candidate) {
            (None, None) => true,
            (Some(_), None) | (None, Some(_)) => false,
            (Some(control), Some(candidate)) => (self.compare)(control, candidate),
        }
    }
}

impl<U: 'static> Comparator<Option<U>> {
    /// Comparator for results that may legitimately be `None`.
    ///
    /// Applies the same null rules to the inner `Option` before calling
    /// `comparer`, so the predicate only ever sees two present values.
    #[must_use]
    pub fn nullable<F>(comparer: F) -> Self
    where
        F: Fn(&U, &U) -> bool + Send + Sync + 'static,
    {
        let inner = Comparator::custom(comparer);
        Self::custom(move |control: &Option<U>, candidate: &Option<U>| {
            inner.matches(control.as_ref(), candidate.as_ref())
        })
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            compare: Arc::clone(&self.compare),
            custom: self.custom,
        }
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("custom", &self.custom)
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq + 'static> Default for Comparator<T> {
    fn default() -> Self {
        Self::equality()
    }
}
