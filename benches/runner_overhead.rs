//! Experiment runner overhead benchmarks
//!
//! Measures what the harness adds on top of calling the control directly:
//! - direct control call (baseline)
//! - full run with a no-op publisher
//! - full run with the in-memory publisher
//! - custom comparer vs `PartialEq`
//!
//! Toyota Way: Measure before optimizing (Genchi Genbutsu)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tokio::runtime::Runtime;
use trueno_scientist::experiment::{Experiment, ExperimentRunner};
use trueno_scientist::publish::{InMemoryPublisher, NoopPublisher};

/// Sum a vector: cheap enough that harness overhead dominates
fn vector_experiment(len: usize) -> Experiment<u64, ()> {
    let data: Vec<u64> = (0..len as u64).collect();
    let control_data = data.clone();
    Experiment::builder("vector-sum")
        .control(move || {
            let sum: u64 = control_data.iter().sum();
            async move { Ok(sum) }
        })
        .candidate(move || {
            let sum = data.iter().fold(0u64, |acc, x| acc + x);
            async move { Ok(sum) }
        })
        .build()
        .unwrap()
}

fn bench_direct_vs_run(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("run_overhead");

    for len in [16, 1_024, 65_536] {
        let experiment = vector_experiment(len);

        group.bench_with_input(BenchmarkId::new("direct_control", len), &len, |b, _| {
            b.to_async(&rt).iter(|| async { black_box(experiment.control().await) });
        });

        let noop = ExperimentRunner::new(NoopPublisher);
        group.bench_with_input(BenchmarkId::new("run_noop", len), &len, |b, _| {
            b.to_async(&rt).iter(|| async { black_box(noop.run(&experiment).await) });
        });
    }

    group.finish();
}

fn bench_in_memory_publisher(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let experiment = vector_experiment(1_024);
    let runner = ExperimentRunner::new(InMemoryPublisher::new());

    c.bench_function("run_in_memory_publisher", |b| {
        b.to_async(&rt).iter(|| async {
            let result = runner.run(&experiment).await;
            runner.publisher().clear();
            black_box(result)
        });
    });
}

fn bench_comparer(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let runner = ExperimentRunner::new(NoopPublisher);

    let equality = Experiment::<String, ()>::builder("equality")
        .control(|| async { Ok("Mixed Case Value".to_string()) })
        .candidate(|| async { Ok("mixed case value".to_string()) })
        .build()
        .unwrap();
    let custom = Experiment::<String, ()>::builder("custom")
        .control(|| async { Ok("Mixed Case Value".to_string()) })
        .candidate(|| async { Ok("mixed case value".to_string()) })
        .comparer(|a, b| a.eq_ignore_ascii_case(b))
        .build()
        .unwrap();

    let mut group = c.benchmark_group("comparer");
    group.bench_function("partial_eq", |b| {
        b.to_async(&rt).iter(|| async { black_box(runner.run(&equality).await) });
    });
    group.bench_function("custom", |b| {
        b.to_async(&rt).iter(|| async { black_box(runner.run(&custom).await) });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_direct_vs_run,
    bench_in_memory_publisher,
    bench_comparer
);
criterion_main!(benches);
