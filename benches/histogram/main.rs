use criterion::*;
use positional_histogram::histogram::PositionalHistogram;
use std::io::Cursor;
use std::path::Path;

// Payload sizes for benchmarking
pub const PAYLOAD_SIZES: &[usize] = &[
    256,     // 256 bytes
    65536,   // 64 KiB
    1048576, // 1 MiB
    8388608, // 8 MiB
];

// Block sizes, 1 is the plain global histogram.
pub const BLOCK_SIZES: &[usize] = &[1, 8, 64];

// Generate test data of specified size
pub fn generate_test_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

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
pub fn run_histogram_benchmarks(c: &mut Criterion) {
    for &size in PAYLOAD_SIZES {
        let mut group = c.benchmark_group("tally");
        group.throughput(Throughput::Bytes(size as u64));

        // Prepare test data
        let data = generate_test_data(size);

        for &block_size in BLOCK_SIZES {
            group.bench_with_input(
                BenchmarkId::new(format!("from_bytes/block{block_size}"), size),
                &data,
                |b, data| {
                    b.iter(|| PositionalHistogram::from_bytes(black_box(data), block_size, 256))
                },
            );

            // Reference impl.
            #[cfg(feature = "bench")]
            group.bench_with_input(
                BenchmarkId::new(format!("reference/block{block_size}"), size),
                &data,
                |b, data| {
                    b.iter(|| {
                        positional_histogram::histogram::tally_bytes_reference(
                            black_box(data),
                            block_size,
                            256,
                        )
                    })
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("reader/block{block_size}"), size),
                &data,
                |b, data| {
                    b.iter(|| {
                        PositionalHistogram::tally_reader(
                            &mut Cursor::new(black_box(data)),
                            Path::new("bench"),
                            block_size,
                            256,
                        )
                    })
                },
            );
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = get_benchmark_config();
    targets = run_histogram_benchmarks
}

criterion_main!(benches);
