//! Basic example demonstrating online smoothing
//!
//! Run with: cargo run --example basic -p smoothing-facade

use smoothing::{EwmaSmoother, ScoreRequest, Scorer, Smoother};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== smoothing Basic Examples ===\n");

    let readings = vec![21.0, 21.4, 20.9, 35.0, 21.2, 21.1, 20.8];
    println!("Sensor readings: {:?}\n", readings);

    // 1. Exponentially weighted smoothing
    println!("1. EWMA (center of mass = 2.0)");
    let mut ewma = EwmaSmoother::new(2.0)?;
    let smoothed: Vec<String> = readings
        .iter()
        .map(|&v| format!("{:.3}", ewma.update(v)))
        .collect();
    println!("   Smoothed: {:?}\n", smoothed);

    // 2. Scoring entrypoint with the default window of 5
    println!("2. Scorer (default window)");
    let mut scorer = Scorer::new();
    for &value in &readings {
        let avg = scorer.score(&ScoreRequest::new(value));
        println!("   value={:>5.1}  running average={:.4}", value, avg);
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
