//! Performance benchmarks for the evaluation module

use bench_harness::{bench_print, footer, header, section};
use evaluation::{ground_truth, EvaluationHarness, HarnessConfig, SeriesPool};
use monitor::{Observation, OracleConfig, ResidualOracle, SeriesKey};

fn generate_pool(series: usize, points: usize) -> SeriesPool {
    let mut pool = SeriesPool::new();
    for s in 0..series {
        let data: Vec<Observation> = (0..points)
            .map(|i| {
                let t = i as f64;
                let base = 100.0 + 10.0 * (t * 0.05).sin();
                let value = if i > 0 && i % 97 == 0 { base + 500.0 } else { base };
                Observation::new(i as i64, value)
            })
            .collect();
        pool.insert(SeriesKey::new(format!("machine-{s}"), "volt"), data);
    }
    pool
}

fn main() {
    header("evaluation Performance Benchmarks");

    let oracle = ResidualOracle::default();
    let oracle_config = OracleConfig::default();

    let small = generate_pool(4, 500);
    let large = generate_pool(16, 2_000);

    section("Batch ground truth");
    bench_print("ground_truth 4x500", 50, || {
        ground_truth(&small, &oracle, &oracle_config, 5.0).unwrap()
    });
    bench_print("ground_truth 16x2K", 10, || {
        ground_truth(&large, &oracle, &oracle_config, 5.0).unwrap()
    });

    section("Harness runs");
    let truth_small = ground_truth(&small, &oracle, &oracle_config, 5.0).unwrap();
    let truth_large = ground_truth(&large, &oracle, &oracle_config, 5.0).unwrap();
    let harness = EvaluationHarness::new();

    bench_print("run 50 trials (4x500)", 10, || {
        harness
            .run(
                &small,
                &truth_small,
                &oracle,
                &oracle_config,
                &HarnessConfig::new(100, 50).with_seed(1),
            )
            .unwrap()
    });
    bench_print("run 200 trials (16x2K)", 5, || {
        harness
            .run(
                &large,
                &truth_large,
                &oracle,
                &oracle_config,
                &HarnessConfig::new(200, 200).with_seed(1),
            )
            .unwrap()
    });

    footer();
}
