//! Basic example demonstrating windowed anomaly monitoring
//!
//! Run with: cargo run --example basic -p monitor-facade

use monitor::{Observation, OracleConfig, ResidualOracle, SeriesKey, SeriesMonitor, WindowConfig};
use smoothing::EwmaSmoother;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== monitor Basic Example ===\n");

    let oracle = ResidualOracle::default();
    let config = OracleConfig::default();

    let mut mon = SeriesMonitor::new(
        SeriesKey::new("machine-001", "volt"),
        EwmaSmoother::new(2.0)?,
        &WindowConfig::new(24),
    );

    println!("Streaming 80 readings with spikes at t=50 and t=70...\n");
    for t in 0..80 {
        let value = match t {
            50 | 70 => 400.0,
            _ => 170.0 + ((t % 5) as f64) * 0.2,
        };

        if let Some(verdict) = mon.observe(Observation::new(t, value), &oracle, &config)? {
            if verdict.is_anomaly {
                println!(
                    "   t={:>3}  ANOMALY  (oracle took {:?})",
                    verdict.timestamp, verdict.elapsed
                );
            }
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
