//! Control/candidate experiments
//!
//! An experiment pairs a trusted **control** operation with a **candidate**
//! that is meant to replace it. Running it executes both, times each,
//! compares their values and publishes an [`Observation`], while the caller
//! only ever sees the control's result.
//!
//! ## Run Overview
//!
//! ```text
//! ExperimentRunner::run(&Experiment)
//!     │
//!     ├── ExecutionOrder (random per run)
//!     ├── Outcome::capture(control)   ┐ sequential, in the chosen order
//!     ├── Outcome::capture(candidate) ┘
//!     ├── Comparator::matches(values)
//!     ├── Publisher::publish(&Observation)   (awaited)
//!     └── control value / control error / control panic
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use trueno_scientist::experiment::{Experiment, ExperimentRunner};
//! use trueno_scientist::publish::InMemoryPublisher;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let experiment = Experiment::<String, std::io::Error>::builder("greeting")
//!     .control(|| async { Ok("Hello".to_string()) })
//!     .candidate(|| async { Ok("hello".to_string()) })
//!     .comparer(|a, b| a.eq_ignore_ascii_case(b))
//!     .build()?;
//!
//! let runner = ExperimentRunner::new(InMemoryPublisher::new());
//! let greeting = runner.run(&experiment).await?;
//!
//! assert_eq!(greeting, "Hello");
//! assert!(runner.publisher().latest("greeting").unwrap().matched());
//! # Ok(())
//! # }
//! ```

mod comparator;
mod definition;
mod observation;
mod order;
mod outcome;
mod runner;

pub use comparator::Comparator;
pub use definition::{Experiment, ExperimentBuilder, Operation};
pub use observation::{Observation, ObservationBuilder};
pub use order::{ExecutionOrder, OrderPolicy};
pub use outcome::{Failure, Outcome, PanicPayload};
pub use runner::ExperimentRunner;
