//! # telemetry-cli
//!
//! Command-line interface for the telemetry-ts pipeline: smooth a series,
//! monitor it for anomalies, or evaluate windowed detection against batch
//! ground truth.

use clap::{Parser, Subcommand, ValueEnum};
use evaluation::{ground_truth, EvaluationHarness, HarnessConfig, Scoring, SeriesPool};
use monitor::{
    Direction, Observation, OracleConfig, ResidualOracle, SeriesKey, SeriesMonitor, WindowConfig,
};
use smoothing::{EwmaSmoother, ScoreRequest, Scorer, Smoother};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "telemetry")]
#[command(about = "Online telemetry smoothing and anomaly detection CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Up,
    Down,
    Both,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Up => Direction::Positive,
            DirectionArg::Down => Direction::Negative,
            DirectionArg::Both => Direction::Both,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ScoringArg {
    Precision,
    Recall,
    F1,
}

impl From<ScoringArg> for Scoring {
    fn from(arg: ScoringArg) -> Self {
        match arg {
            ScoringArg::Precision => Scoring::Precision,
            ScoringArg::Recall => Scoring::Recall,
            ScoringArg::F1 => Scoring::F1,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Smooth a series and print the running averages
    Score {
        /// Input file (JSON array of numbers, or objects with a value field)
        #[arg(short, long)]
        input: PathBuf,

        /// Center of mass for exponential smoothing
        #[arg(short, long, default_value = "5.0")]
        center_of_mass: f64,

        /// Use the truncated-mean scorer with this window instead of EWMA
        #[arg(short, long)]
        window: Option<usize>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Stream a series through the windowed anomaly monitor
    Detect {
        /// Input file (JSON array of numbers, or objects with a value field)
        #[arg(short, long)]
        input: PathBuf,

        /// Sliding window capacity
        #[arg(short, long, default_value = "100")]
        window: usize,

        /// Center of mass for exponential smoothing
        #[arg(short, long, default_value = "5.0")]
        center_of_mass: f64,

        /// Oracle significance level
        #[arg(short, long, default_value = "0.05")]
        significance: f64,

        /// Upper bound on the fraction of points the oracle may flag
        #[arg(long, default_value = "0.1")]
        max_anomaly_fraction: f64,

        /// Direction of deviations to report
        #[arg(short, long, value_enum, default_value_t = DirectionArg::Both)]
        direction: DirectionArg,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Evaluate windowed detection against batch ground truth
    Evaluate {
        /// Input file (JSON object mapping series names to arrays)
        #[arg(short, long)]
        input: PathBuf,

        /// Trailing window length per trial
        #[arg(short, long, default_value = "100")]
        window: usize,

        /// Number of sampled trials
        #[arg(short, long, default_value = "50")]
        trials: usize,

        /// Probability of steering a trial toward a known anomaly
        #[arg(long, default_value = "0.5")]
        anomaly_bias: f64,

        /// RNG seed for reproducible trial sequences
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Aggregate exposed as the headline score
        #[arg(long, value_enum, default_value_t = ScoringArg::F1)]
        scoring: ScoringArg,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Load one series from a JSON file.
///
/// Accepts a bare array of numbers, an array of objects with a `value`
/// (and optional `timestamp`) field, or an object wrapping such an array
/// under `data`/`values`/`series`.
fn load_series(path: &PathBuf) -> CliResult<Vec<Observation>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse JSON: {}", e))?;

    let arr = json
        .as_array()
        .or_else(|| {
            json.as_object().and_then(|obj| {
                ["data", "values", "series"]
                    .iter()
                    .find_map(|key| obj.get(*key).and_then(|v| v.as_array()))
            })
        })
        .ok_or_else(|| "Could not find a series array in JSON".to_string())?;

    let series = parse_observations(arr)?;
    if series.is_empty() {
        return Err("No numeric data found in input".to_string());
    }
    Ok(series)
}

fn parse_observations(arr: &[serde_json::Value]) -> CliResult<Vec<Observation>> {
    let mut series = Vec::with_capacity(arr.len());
    for (i, item) in arr.iter().enumerate() {
        if let Some(value) = item.as_f64() {
            series.push(Observation::new(i as i64, value));
        } else if let Some(obj) = item.as_object() {
            let value = obj
                .get("value")
                .and_then(|v| v.as_f64())
                .ok_or_else(|| format!("Entry {} has no numeric 'value' field", i))?;
            let timestamp = obj
                .get("timestamp")
                .and_then(|v| v.as_i64())
                .unwrap_or(i as i64);
            series.push(Observation::new(timestamp, value));
        } else {
            return Err(format!("Entry {} is neither a number nor an object", i));
        }
    }
    Ok(series)
}

/// Load a pool of named series from a JSON object.
///
/// Keys of the form "machine/sensor" split into the two key parts; plain
/// names become the machine with a default sensor.
fn load_pool(path: &PathBuf) -> CliResult<SeriesPool> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse JSON: {}", e))?;

    let obj = json
        .as_object()
        .ok_or_else(|| "Expected a JSON object mapping series names to arrays".to_string())?;

    let mut pool = SeriesPool::new();
    for (name, value) in obj {
        let arr = value
            .as_array()
            .ok_or_else(|| format!("Series '{}' is not an array", name))?;
        let series = parse_observations(arr)?;
        let key = match name.split_once('/') {
            Some((machine, sensor)) => SeriesKey::new(machine, sensor),
            None => SeriesKey::new(name.as_str(), "value"),
        };
        pool.insert(key, series);
    }

    if pool.is_empty() {
        return Err("Input contained no series".to_string());
    }
    Ok(pool)
}

fn write_json(json: &serde_json::Value, output: Option<&PathBuf>) -> CliResult<()> {
    if let Some(path) = output {
        let mut file =
            File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, json)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Results written to {:?}", path);
    } else {
        let text = serde_json::to_string_pretty(json)
            .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
        println!("{}", text);
    }
    Ok(())
}

/// Run score command
fn run_score(
    input: PathBuf,
    center_of_mass: f64,
    window: Option<usize>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let series = load_series(&input)?;
    println!(
        "Loaded {} data points from {:?}",
        series.len(),
        input.file_name().unwrap_or_default()
    );

    let (smoothed, method) = match window {
        Some(w) => {
            let mut scorer = Scorer::new();
            let smoothed: Vec<f64> = series
                .iter()
                .map(|obs| scorer.score(&ScoreRequest::with_window(obs.value, w)))
                .collect();
            (smoothed, format!("truncated mean (window {})", w))
        }
        None => {
            let mut smoother = EwmaSmoother::new(center_of_mass).map_err(|e| e.to_string())?;
            let smoothed: Vec<f64> = series
                .iter()
                .map(|obs| smoother.update(obs.value))
                .collect();
            (smoothed, format!("ewma (center of mass {})", center_of_mass))
        }
    };

    println!("Method: {}", method);
    for (obs, avg) in series.iter().zip(&smoothed).take(10) {
        println!("  t={:<6} value={:>10.4}  smoothed={:>10.4}", obs.timestamp, obs.value, avg);
    }
    if series.len() > 10 {
        println!("  ... {} more points", series.len() - 10);
    }

    let json = serde_json::json!({
        "method": method,
        "points": series.len(),
        "smoothed": smoothed,
    });
    write_json(&json, output.as_ref())
}

/// Run detect command
fn run_detect(
    input: PathBuf,
    window: usize,
    center_of_mass: f64,
    significance: f64,
    max_anomaly_fraction: f64,
    direction: DirectionArg,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let series = load_series(&input)?;
    println!(
        "Loaded {} data points from {:?}",
        series.len(),
        input.file_name().unwrap_or_default()
    );

    let smoother = EwmaSmoother::new(center_of_mass).map_err(|e| e.to_string())?;
    let mut monitor = SeriesMonitor::new(
        SeriesKey::new("cli", "input"),
        smoother,
        &WindowConfig::new(window),
    );
    let oracle = ResidualOracle::default();
    let oracle_config = OracleConfig {
        significance,
        max_anomaly_fraction,
        direction: direction.into(),
    };

    let mut anomalies = Vec::new();
    for obs in &series {
        let verdict = monitor
            .observe(*obs, &oracle, &oracle_config)
            .map_err(|e| e.to_string())?;
        if let Some(verdict) = verdict {
            if verdict.is_anomaly {
                anomalies.push((verdict.timestamp, obs.value));
            }
        }
    }

    println!("Window capacity: {}", window);
    println!("Significance: {}", significance);
    println!("Anomalies found: {}", anomalies.len());
    for (timestamp, value) in &anomalies {
        println!("  t={}: value={:.4}", timestamp, value);
    }

    let json = serde_json::json!({
        "total_points": series.len(),
        "window": window,
        "significance": significance,
        "anomaly_count": anomalies.len(),
        "anomalies": anomalies.iter().map(|(t, v)| {
            serde_json::json!({ "timestamp": t, "value": v })
        }).collect::<Vec<_>>(),
    });
    write_json(&json, output.as_ref())
}

/// Run evaluate command
#[allow(clippy::too_many_arguments)]
fn run_evaluate(
    input: PathBuf,
    window: usize,
    trials: usize,
    anomaly_bias: f64,
    seed: u64,
    scoring: ScoringArg,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let pool = load_pool(&input)?;
    println!(
        "Loaded {} series from {:?}",
        pool.len(),
        input.file_name().unwrap_or_default()
    );

    let oracle = ResidualOracle::default();
    let oracle_config = OracleConfig::default();
    let config = HarnessConfig::new(window, trials)
        .with_seed(seed)
        .with_anomaly_bias(anomaly_bias)
        .with_scoring(scoring.into());

    let truth = ground_truth(&pool, &oracle, &oracle_config, config.center_of_mass)
        .map_err(|e| e.to_string())?;
    let flagged: usize = truth.values().map(|flags| flags.len()).sum();
    println!("Batch ground truth: {} flagged timestamps", flagged);

    let report = EvaluationHarness::new()
        .run(&pool, &truth, &oracle, &oracle_config, &config)
        .map_err(|e| e.to_string())?;

    println!("\n=== Evaluation Results ===");
    println!("Trials: {} ({} failed)", report.trials, report.failed_trials);
    println!(
        "Confusion: tp={} fp={} tn={} fn={}",
        report.true_positives,
        report.false_positives,
        report.true_negatives,
        report.false_negatives
    );
    println!("Precision: {:.3}", report.precision());
    println!("Recall: {:.3}", report.recall());
    println!("F1: {:.3}", report.f1());
    println!("Score: {:.3}", report.score());
    println!("Mean detection latency: {:?}", report.mean_latency);

    let json = serde_json::json!({
        "trials": report.trials,
        "failed_trials": report.failed_trials,
        "true_positives": report.true_positives,
        "false_positives": report.false_positives,
        "true_negatives": report.true_negatives,
        "false_negatives": report.false_negatives,
        "precision": report.precision(),
        "recall": report.recall(),
        "f1": report.f1(),
        "score": report.score(),
        "mean_latency_micros": report.mean_latency.as_micros() as u64,
    });
    write_json(&json, output.as_ref())
}

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            input,
            center_of_mass,
            window,
            output,
        } => run_score(input, center_of_mass, window, output),

        Commands::Detect {
            input,
            window,
            center_of_mass,
            significance,
            max_anomaly_fraction,
            direction,
            output,
        } => run_detect(
            input,
            window,
            center_of_mass,
            significance,
            max_anomaly_fraction,
            direction,
            output,
        ),

        Commands::Evaluate {
            input,
            window,
            trials,
            anomaly_bias,
            seed,
            scoring,
            output,
        } => run_evaluate(input, window, trials, anomaly_bias, seed, scoring, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
