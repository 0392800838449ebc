//! Shadow-run a rewritten price calculation against the legacy one
//!
//! Run with: cargo run --example shadow_rewrite
//!
//! Set `RUST_LOG=trueno_scientist::observation=warn` to see only mismatches.

use std::time::Duration;

use anyhow::{bail, Result};
use trueno_scientist::experiment::{Experiment, ExperimentRunner};
use trueno_scientist::logging::{init_tracing, LogFormat};
use trueno_scientist::publish::TracingPublisher;

/// Legacy price calculation: integer cents, rounding half up
async fn legacy_price(quantity: u32) -> Result<u64> {
    tokio::time::sleep(Duration::from_millis(2)).await;
    if quantity == 0 {
        bail!("quantity must be positive");
    }
    Ok((u64::from(quantity) * 1_999 * 108 + 50) / 100)
}

/// Rewritten calculation: faster, but truncates instead of rounding
async fn rewritten_price(quantity: u32) -> Result<u64> {
    if quantity == 0 {
        bail!("quantity must be positive");
    }
    Ok(u64::from(quantity) * 1_999 * 108 / 100)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("info", LogFormat::Text)?;

    let runner = ExperimentRunner::new(TracingPublisher::new());

    println!("=== Shadow-running price rewrite ===\n");
    for quantity in [0, 1, 2, 3, 10] {
        let experiment = Experiment::<u64, anyhow::Error>::builder("price-rewrite")
            .control(move || legacy_price(quantity))
            .candidate(move || rewritten_price(quantity))
            .build()?;

        match runner.run(&experiment).await {
            Ok(cents) => println!("quantity {quantity:>2}: {cents} cents"),
            Err(e) => println!("quantity {quantity:>2}: error: {e}"),
        }
    }

    Ok(())
}
