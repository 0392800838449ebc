//! # Trueno-Scientist: Control/Candidate Experiments for Safe Rewrites
//!
//! **Version**: 0.1.0
//!
//! Trueno-Scientist runs a rewritten code path (the *candidate*) next to the
//! path it replaces (the *control*) on real traffic. Both are executed and
//! timed, their results are compared, and an [`Observation`](experiment::Observation)
//! is published. The caller always gets the control's result, including its
//! error, so a broken candidate can never break the call site.
//!
//! ## Design Principles (Toyota Way Aligned)
//!
//! - **Jidoka**: Every run checks candidate == control and records the verdict
//! - **Poka-Yoke safety**: Candidate errors and panics are absorbed, never surfaced
//! - **Genchi Genbutsu**: Each side is timed on its own; execution order is randomized
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use trueno_scientist::experiment::{Experiment, ExperimentRunner};
//! use trueno_scientist::publish::TracingPublisher;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let experiment = Experiment::<u64, std::io::Error>::builder("sum-rewrite")
//!     .control(|| async { Ok((1..=100_u64).sum()) })
//!     .candidate(|| async { Ok(100 * 101 / 2) })
//!     .build()?;
//!
//! let runner = ExperimentRunner::new(TracingPublisher::new());
//! let total = runner.run(&experiment).await?;
//! assert_eq!(total, 5050);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod error;
pub mod experiment;
pub mod logging;
pub mod publish;

pub use error::{Error, Result};
