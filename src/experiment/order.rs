//! Execution order - which side of an experiment runs first

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Process-wide order generator, seeded once from OS entropy on first use.
static SHARED_RNG: Lazy<Mutex<StdRng>> = Lazy::new(|| Mutex::new(StdRng::from_entropy()));

/// Relative order of the two executions in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionOrder {
    /// Control executes, then candidate.
    ControlFirst,
    /// Candidate executes, then control.
    CandidateFirst,
}

impl ExecutionOrder {
    /// Draw an order uniformly at random from the shared generator.
    #[must_use]
    pub fn random() -> Self {
        Self::draw(&mut *SHARED_RNG.lock())
    }

    fn draw<R: Rng>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Self::ControlFirst
        } else {
            Self::CandidateFirst
        }
    }

    /// Get order name as string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ControlFirst => "control_first",
            Self::CandidateFirst => "candidate_first",
        }
    }
}

/// How a runner picks the execution order for each run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPolicy {
    /// Uniformly random per run, from the process-wide generator (default)
    #[default]
    Random,
    /// Uniformly random per run, from a generator owned by the runner
    Seeded(u64),
    /// Always run the control first
    ControlFirst,
    /// Always run the candidate first
    CandidateFirst,
}

/// Order source held by a runner, built from an [`OrderPolicy`].
#[derive(Debug)]
pub(crate) enum OrderSource {
    Shared,
    Seeded(Mutex<StdRng>),
    Fixed(ExecutionOrder),
}

impl OrderSource {
    pub(crate) fn from_policy(policy: OrderPolicy) -> Self {
        match policy {
            OrderPolicy::Random => Self::Shared,
            OrderPolicy::Seeded(seed) => Self::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
            OrderPolicy::ControlFirst => Self::Fixed(ExecutionOrder::ControlFirst),
            OrderPolicy::CandidateFirst => Self::Fixed(ExecutionOrder::CandidateFirst),
        }
    }

    pub(crate) fn next(&self) -> ExecutionOrder {
        match self {
            Self::Shared => ExecutionOrder::random(),
            Self::Seeded(rng) => ExecutionOrder::draw(&mut *rng.lock()),
            Self::Fixed(order) => *order,
        }
    }
}
