use criterion::*;
use positional_histogram::histogram::PositionalHistogram;
use positional_histogram::report::write_report;
use positional_histogram::summary::summarize;
use positional_histogram::ReportMode;

// Benchmark group configuration
#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

#[cfg(not(target_os = "windows"))]
pub fn get_benchmark_config() -> Criterion {
    Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

#[cfg(target_os = "windows")]
pub fn get_benchmark_config() -> Criterion {
    Criterion::default()
}

// Main benchmark function
pub fn run_report_benchmarks(c: &mut Criterion) {
    const SIZE: usize = 1048576;
    const BLOCK_SIZE: usize = 16;

    // Skewed data, so sorting actually has to move columns around.
    let data: Vec<u8> = (0..SIZE).map(|i| (i.wrapping_mul(i) >> 7) as u8).collect();
    let histogram = PositionalHistogram::from_bytes(&data, BLOCK_SIZE, 256).unwrap();
    let summaries = summarize(&histogram);

    // The speed of this should be constant; the table size doesn't depend on the input length.
    let mut group = c.benchmark_group("report");
    for (name, sorted, mode) in [
        ("counts", false, ReportMode::Counts),
        ("counts_sorted", true, ReportMode::Counts),
        ("frequency", false, ReportMode::Frequency { precision: 4 }),
        ("frequency_sorted", true, ReportMode::Frequency { precision: 4 }),
    ] {
        group.bench_function(BenchmarkId::new(name, BLOCK_SIZE), |b| {
            let mut out = Vec::with_capacity(1 << 20);
            b.iter(|| {
                out.clear();
                write_report(&mut out, black_box(&histogram), &summaries, sorted, mode)
            })
        });
    }

    group.bench_function("summarize", |b| b.iter(|| summarize(black_box(&histogram))));
    group.finish();
}

criterion_group! {
    name = benches;
    config = get_benchmark_config();
    targets = run_report_benchmarks
}

criterion_main!(benches);
