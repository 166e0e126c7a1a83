//! Basic example demonstrating an end-to-end evaluation run
//!
//! Run with: cargo run --example basic -p evaluation-facade

use evaluation::{ground_truth, EvaluationHarness, HarnessConfig, SeriesPool};
use monitor::{Observation, OracleConfig, ResidualOracle, SeriesKey};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== evaluation Basic Example ===\n");

    // 1. Build a small pool of sensor telemetry with periodic spikes
    let mut pool = SeriesPool::new();
    for machine in ["pump-a", "pump-b"] {
        let series: Vec<Observation> = (0..300)
            .map(|i| {
                let value = if i > 0 && i % 75 == 0 { 400.0 } else { 48.0 };
                Observation::new(i as i64, value)
            })
            .collect();
        pool.insert(SeriesKey::new(machine, "volt"), series);
    }
    println!("1. Pool: {} series, {} points each\n", pool.len(), 300);

    // 2. Batch ground truth over the full smoothed histories
    let oracle = ResidualOracle::default();
    let oracle_config = OracleConfig::default();
    let config = HarnessConfig::new(60, 40).with_seed(7);

    let truth = ground_truth(&pool, &oracle, &oracle_config, config.center_of_mass)?;
    for (key, flags) in &truth {
        println!("2. Batch flags for {}: {:?}", key, flags);
    }

    // 3. Evaluate the windowed online detector against that truth
    let report = EvaluationHarness::new().run(&pool, &truth, &oracle, &oracle_config, &config)?;

    println!("\n3. Report over {} trials ({} failed)", report.trials, report.failed_trials);
    println!("   tp={} fp={} tn={} fn={}",
        report.true_positives,
        report.false_positives,
        report.true_negatives,
        report.false_negatives,
    );
    println!("   precision = {:.3}", report.precision());
    println!("   recall    = {:.3}", report.recall());
    println!("   f1        = {:.3}", report.f1());
    println!("   mean detection latency = {:?}", report.mean_latency);

    println!("\n=== Example Complete ===");
    Ok(())
}
