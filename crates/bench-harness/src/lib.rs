//! Lightweight benchmark harness with optimization barrier.
//!
//! Two halves:
//!
//! - [`bench`] / [`bench_print`]: warmup-then-measure loops for benchmark
//!   binaries (`harness = false`).
//! - [`LatencySamples`]: an accumulator for per-call wall-clock durations,
//!   used wherever the pipeline needs mean/max/percentile latency over a
//!   run rather than a synthetic loop.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Benchmark result containing timing statistics.
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub name: String,
    pub iterations: u32,
    pub total: Duration,
    pub per_iter: Duration,
}

impl BenchResult {
    /// Format result as a table row.
    pub fn as_row(&self) -> String {
        format!(
            "{:30} {:>10.2?} total, {:>10.2?}/iter ({} iters)",
            self.name, self.total, self.per_iter, self.iterations
        )
    }
}

/// Run a benchmark with warmup and return results.
///
/// The closure must return a value so the compiler cannot eliminate the
/// computation as dead code.
pub fn bench<F, R>(name: &str, iterations: u32, mut f: F) -> BenchResult
where
    F: FnMut() -> R,
{
    // Warmup: prime caches, trigger any lazy initialization
    for _ in 0..3 {
        black_box(f());
    }

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(f());
    }
    let total = start.elapsed();
    let per_iter = total / iterations;

    BenchResult {
        name: name.to_string(),
        iterations,
        total,
        per_iter,
    }
}

/// Run a benchmark and print the result immediately.
pub fn bench_print<F, R>(name: &str, iterations: u32, f: F)
where
    F: FnMut() -> R,
{
    let result = bench(name, iterations, f);
    println!("{}", result.as_row());
}

/// Print a section header for organizing benchmark output.
pub fn section(name: &str) {
    println!("\n--- {} ---", name);
}

/// Print a benchmark suite header.
pub fn header(name: &str) {
    println!("=== {} ===\n", name);
}

/// Print a benchmark suite footer.
pub fn footer() {
    println!("\n=== Benchmark Complete ===");
}

// ============================================================================
// Latency samples
// ============================================================================

/// Accumulator for individual wall-clock latency samples.
///
/// Unlike [`bench`], which times a closure in a loop, this collects
/// durations measured elsewhere (one per real call) and summarizes them.
#[derive(Debug, Clone, Default)]
pub struct LatencySamples {
    samples: Vec<Duration>,
}

impl LatencySamples {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample.
    pub fn record(&mut self, elapsed: Duration) {
        self.samples.push(elapsed);
    }

    /// Number of samples recorded.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples have been recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Mean sample, or zero when empty.
    pub fn mean(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.samples.iter().sum();
        total / self.samples.len() as u32
    }

    /// Largest sample, or zero when empty.
    pub fn max(&self) -> Duration {
        self.samples.iter().copied().max().unwrap_or(Duration::ZERO)
    }

    /// Nearest-rank percentile, `p` in `[0, 1]`. Zero when empty.
    pub fn percentile(&self, p: f64) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        let mut sorted = self.samples.clone();
        sorted.sort();
        let rank = ((p.clamp(0.0, 1.0) * sorted.len() as f64).ceil() as usize)
            .saturating_sub(1)
            .min(sorted.len() - 1);
        sorted[rank]
    }
}
