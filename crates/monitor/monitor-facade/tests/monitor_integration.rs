//! Integration tests for the monitoring module

use monitor::{
    Observation, OracleConfig, ResidualOracle, SlidingWindow, WindowedDetector,
};

fn steady_series(n: usize) -> Vec<Observation> {
    (0..n)
        .map(|i| Observation::new(i as i64, 20.0 + ((i % 4) as f64) * 0.05))
        .collect()
}

#[test]
fn test_window_feeds_detector() {
    let oracle = ResidualOracle::default();
    let detector = WindowedDetector::new();
    let config = OracleConfig::default();

    let mut window = SlidingWindow::new(40);
    for obs in steady_series(60) {
        window.push(obs);
    }
    // Inject a spike as the newest point
    window.push(Observation::new(60, 200.0));

    let snapshot = window.snapshot();
    assert_eq!(snapshot.len(), 40);

    let verdict = detector.evaluate(&snapshot, &oracle, &config).unwrap();
    assert!(verdict.is_anomaly);
    assert_eq!(verdict.timestamp, 60);
}

#[test]
fn test_interior_spike_not_reported() {
    let oracle = ResidualOracle::default();
    let detector = WindowedDetector::new();
    let config = OracleConfig::default();

    let mut window = SlidingWindow::new(40);
    for mut obs in steady_series(40) {
        if obs.timestamp == 20 {
            obs.value += 200.0;
        }
        window.push(obs);
    }

    let verdict = detector
        .evaluate(&window.snapshot(), &oracle, &config)
        .unwrap();
    // The spike sits inside the window; only the newest point matters.
    assert!(!verdict.is_anomaly);
    assert_eq!(verdict.timestamp, 39);
}

#[test]
fn test_undersized_window_is_conservative() {
    let oracle = ResidualOracle::new(7); // needs 15 points
    let detector = WindowedDetector::new();
    let config = OracleConfig::default();

    let mut window = SlidingWindow::new(50);
    for obs in steady_series(5) {
        window.push(obs);
    }

    let verdict = detector
        .evaluate(&window.snapshot(), &oracle, &config)
        .unwrap();
    assert!(!verdict.is_anomaly);
}

#[test]
fn test_elapsed_is_recorded() {
    let oracle = ResidualOracle::default();
    let detector = WindowedDetector::new();
    let config = OracleConfig::default();

    let mut window = SlidingWindow::new(30);
    for obs in steady_series(30) {
        window.push(obs);
    }

    let verdict = detector
        .evaluate(&window.snapshot(), &oracle, &config)
        .unwrap();
    // Wall-clock timing; the only portable assertion is that it was measured.
    assert!(verdict.elapsed > std::time::Duration::ZERO);
}

#[test]
fn test_memory_stays_bounded_over_long_stream() {
    let mut window = SlidingWindow::new(100);
    for i in 0..100_000 {
        window.push(Observation::new(i, i as f64));
    }
    assert_eq!(window.len(), 100);
    assert_eq!(window.snapshot().first().unwrap().timestamp, 99_900);
}
