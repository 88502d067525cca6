// scripts/benchmark.rs
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::Command;
use wiener_paths::analytics::moments;
use wiener_paths::math_utils::Timer;
use wiener_paths::mc::ensemble::{ensemble_statistics, EnsembleConfig, StatsConfig};
use wiener_paths::models::brownian::DriftedBrownian;
use wiener_paths::rng::RngFactory;
use wiener_paths::simulator::{PathConfig, PathSimulator};
use wiener_paths::solvers::Scheme;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        let rust_version = Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string());

        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version,
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    paths: usize,
    steps: usize,
    time_ms: f64,
    throughput_steps_per_sec: f64,
    value: f64,
    analytic_value: Option<f64>,
}

impl BenchmarkResult {
    fn abs_error(&self) -> Option<f64> {
        self.analytic_value.map(|a| (self.value - a).abs())
    }
}

fn throughput(paths: usize, steps: usize, time_ms: f64) -> f64 {
    (paths * steps) as f64 / (time_ms / 1000.0)
}

fn run_ensemble_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    for &paths in &[1_000, 10_000, 100_000] {
        println!("Running ensemble benchmark with {} paths...", paths);

        let cfg = EnsembleConfig {
            paths,
            seed: 42,
            path: PathConfig::new(1.0, 252).with_drift(0.05).with_volatility(0.2),
            stats: StatsConfig::TERMINAL_VARIANCE,
        };

        let mut timer = Timer::new();
        timer.start();
        let stats = match ensemble_statistics(&cfg) {
            Ok(stats) => stats,
            Err(e) => {
                eprintln!("Ensemble benchmark failed: {}", e);
                continue;
            }
        };
        let time_ms = timer.elapsed_ms();

        results.push(BenchmarkResult {
            name: format!("Ensemble Var[X_T] ({}k paths)", paths / 1000),
            paths,
            steps: cfg.path.steps,
            time_ms,
            throughput_steps_per_sec: throughput(paths, cfg.path.steps, time_ms),
            value: stats.terminal_variance.unwrap_or(f64::NAN),
            analytic_value: Some(moments::terminal_variance(&cfg.path)),
        });
    }

    results
}

fn run_scheme_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    let schemes = [
        (Scheme::EulerMaruyama, "Euler-Maruyama"),
        (Scheme::Milstein, "Milstein"),
    ];
    let cfg = PathConfig::new(1.0, 252).with_drift(0.05).with_volatility(0.2);
    let gbm = DriftedBrownian::new(cfg.x0, cfg.mu, cfg.sigma)
        .expect("Valid parameters")
        .exponential_dynamics();
    let paths = 20_000;

    for (scheme, scheme_name) in &schemes {
        println!("Benchmarking {} on the Ito's lemma GBM...", scheme_name);

        let factory = RngFactory::new(42);
        let mut timer = Timer::new();
        timer.start();

        let mut total = 0.0;
        for i in 0..paths {
            let mut simulator = PathSimulator::from_rng(factory.create_std_rng(i as u64));
            match simulator.integrate(&gbm, gbm.s0, &cfg, *scheme) {
                Ok(path) => total += path.terminal(),
                Err(e) => {
                    eprintln!("Integration failed: {}", e);
                    break;
                }
            }
        }
        let time_ms = timer.elapsed_ms();

        results.push(BenchmarkResult {
            name: format!("{} E[exp(X_T)]", scheme_name),
            paths,
            steps: cfg.steps,
            time_ms,
            throughput_steps_per_sec: throughput(paths, cfg.steps, time_ms),
            value: total / paths as f64,
            analytic_value: Some(moments::exp_terminal_mean(&cfg)),
        });
    }

    results
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);

    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;

    writeln!(
        file,
        "Benchmark,Paths,Steps,Time_ms,Throughput_steps_per_sec,Value,Analytic_Value,Abs_Error"
    )?;
    for result in results {
        writeln!(
            file,
            "{},{},{},{:.2},{:.0},{:.6},{},{}",
            result.name,
            result.paths,
            result.steps,
            result.time_ms,
            result.throughput_steps_per_sec,
            result.value,
            result
                .analytic_value
                .map(|v| format!("{:.6}", v))
                .unwrap_or_else(|| "N/A".to_string()),
            result
                .abs_error()
                .map(|e| format!("{:.6}", e))
                .unwrap_or_else(|| "N/A".to_string())
        )?;
    }
    file.flush()
}

fn main() {
    println!("wiener-paths Benchmark Suite");
    println!("============================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let mut all_results = run_ensemble_benchmarks();
    all_results.extend(run_scheme_benchmarks());

    println!("\n{:=<96}", "");
    println!(
        "{:<36} {:>8} {:>6} {:>12} {:>14} {:>10} {:>10}",
        "Benchmark", "Paths", "Steps", "Time (ms)", "Steps/sec", "Value", "Abs Error"
    );
    println!("{:-<96}", "");
    for result in &all_results {
        println!(
            "{:<36} {:>8} {:>6} {:>12.2} {:>14.0} {:>10.4} {:>10}",
            result.name,
            result.paths,
            result.steps,
            result.time_ms,
            result.throughput_steps_per_sec,
            result.value,
            result
                .abs_error()
                .map(|e| format!("{:.2e}", e))
                .unwrap_or_else(|| "N/A".to_string())
        );
    }
    println!("{:=<96}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    match write_results_to_csv(&all_results, &system_info, &filename) {
        Ok(()) => println!("\nResults saved to: {}", filename),
        Err(e) => eprintln!("Error writing benchmark results: {}", e),
    }
}
