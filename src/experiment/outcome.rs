//! Timed execution of a single operation

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::{Duration, Instant};

use futures::FutureExt;

/// Panic payload captured from an operation.
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// Why an operation did not produce a value.
pub enum Failure<E> {
    /// The operation returned `Err`.
    Error(E),
    /// The operation panicked while being polled.
    Panic(PanicPayload),
}

impl<E> Failure<E> {
    /// Returns the error if this failure is an `Err` return.
    #[must_use]
    pub const fn as_error(&self) -> Option<&E> {
        match self {
            Self::Error(err) => Some(err),
            Self::Panic(_) => None,
        }
    }

    /// Whether the operation panicked.
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panic(_))
    }

    /// Best-effort panic message, for logging.
    #[must_use]
    pub fn panic_message(&self) -> Option<&str> {
        let Self::Panic(payload) = self else {
            return None;
        };
        payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
    }
}

impl<E: fmt::Debug> fmt::Debug for Failure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(err) => f.debug_tuple("Error").field(err).finish(),
            Self::Panic(_) => f
                .debug_tuple("Panic")
                .field(&self.panic_message().unwrap_or("<non-string payload>"))
                .finish(),
        }
    }
}

/// Captured result of one timed execution.
///
/// Holds either the produced value or the caught failure, never both,
/// together with the wall-clock time of that execution alone.
#[derive(Debug)]
pub struct Outcome<T, E> {
    result: Result<T, Failure<E>>,
    duration: Duration,
}

impl<T, E> Outcome<T, E> {
    /// Run `operation` exactly once and capture what it produced.
    ///
    /// The clock starts just before the operation is invoked and stops as
    /// soon as its future resolves or panics. Both `Err` returns and panics
    /// are captured; nothing propagates from here.
    pub async fn capture<F, Fut>(operation: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let started = Instant::now();
        // Invoke inside the async block so a panic in the call itself is caught too.
        let polled = AssertUnwindSafe(async move { operation().await })
            .catch_unwind()
            .await;
        let duration = started.elapsed();

        let result = match polled {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(Failure::Error(err)),
            Err(payload) => Err(Failure::Panic(payload)),
        };

        Self { result, duration }
    }

    /// The produced value, absent if the operation failed.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    /// The captured failure, absent if the operation succeeded.
    #[must_use]
    pub fn failure(&self) -> Option<&Failure<E>> {
        self.result.as_ref().err()
    }

    /// Whether the operation failed (error or panic).
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.result.is_err()
    }

    /// Elapsed time of this execution.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Consume the outcome, yielding the tagged result.
    pub fn into_result(self) -> Result<T, Failure<E>> {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_capture_value() {
        let outcome: Outcome<i32, String> = Outcome::capture(|| async { Ok(42) }).await;

        assert_eq!(outcome.value(), Some(&42));
        assert!(outcome.failure().is_none());
        assert!(!outcome.is_failure());
    }

    #[tokio::test]
    async fn test_capture_error() {
        let outcome: Outcome<i32, String> =
            Outcome::capture(|| async { Err("boom".to_string()) }).await;

        assert!(outcome.value().is_none());
        assert!(outcome.is_failure());
        let failure = outcome.failure().unwrap();
        assert_eq!(failure.as_error(), Some(&"boom".to_string()));
        assert!(!failure.is_panic());
    }

    #[tokio::test]
    async fn test_capture_panic_while_polled() {
        async fn explode() -> Result<i32, String> {
            panic!("candidate exploded")
        }

        let outcome = Outcome::capture(explode).await;

        let failure = outcome.failure().unwrap();
        assert!(failure.is_panic());
        assert_eq!(failure.panic_message(), Some("candidate exploded"));
        assert!(failure.as_error().is_none());
    }

    #[tokio::test]
    async fn test_capture_panic_in_call() {
        fn explode() -> std::future::Ready<Result<i32, String>> {
            panic!("{}", String::from("before the future existed"));
        }

        let outcome = Outcome::capture(explode).await;

        let failure = outcome.failure().unwrap();
        assert_eq!(failure.panic_message(), Some("before the future existed"));
    }

    #[tokio::test]
    async fn test_capture_invokes_once() {
        let calls = AtomicUsize::new(0);

        let _outcome: Outcome<(), ()> = Outcome::capture(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_capture_measures_duration() {
        let outcome: Outcome<(), ()> = Outcome::capture(|| async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(())
        })
        .await;

        assert!(outcome.duration() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_into_result() {
        let outcome: Outcome<&str, ()> = Outcome::capture(|| async { Ok("value") }).await;
        assert!(matches!(outcome.into_result(), Ok("value")));
    }

    #[test]
    fn test_failure_debug() {
        let failure: Failure<&str> = Failure::Error("bad");
        assert_eq!(format!("{failure:?}"), "Error(\"bad\")");

        let failure: Failure<&str> = Failure::Panic(Box::new(42_u8));
        assert!(format!("{failure:?}").contains("<non-string payload>"));
    }
}
