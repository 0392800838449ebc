//! Runner configuration
//!
//! Configuration is plain data (`serde`), so it can be embedded in a larger
//! application config file or loaded on its own:
//!
//! ```rust
//! use trueno_scientist::config::RunnerConfig;
//! use trueno_scientist::experiment::OrderPolicy;
//!
//! let config = RunnerConfig::from_json(r#"{ "order": { "seeded": 42 } }"#)?;
//! assert_eq!(config.order(), OrderPolicy::Seeded(42));
//! # Ok::<(), trueno_scientist::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::experiment::OrderPolicy;
use crate::Result;

/// Settings for an [`ExperimentRunner`](crate::experiment::ExperimentRunner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    order: OrderPolicy,
}

impl RunnerConfig {
    /// Create the default configuration (random order per run).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the input is not valid JSON, has
    /// unknown fields, or names an unknown order policy.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the order policy.
    #[must_use]
    pub const fn with_order(mut self, order: OrderPolicy) -> Self {
        self.order = order;
        self
    }

    /// Get the order policy.
    #[must_use]
    pub const fn order(&self) -> OrderPolicy {
        self.order
    }
}
