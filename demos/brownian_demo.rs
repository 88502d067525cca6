// demos/brownian_demo.rs
use std::fs;
use wiener_paths::analytics::moments;
use wiener_paths::mc::ensemble::{ensemble_statistics, simulate_ensemble, EnsembleConfig};
use wiener_paths::output;
use wiener_paths::simulator::{exponentiate, PathConfig, PathSimulator};

fn main() {
    println!("Brownian Motion and Geometric Brownian Motion");
    println!("=============================================\n");

    // Standard Brownian motion on [0, 1], 500 steps, seeded once
    let cfg = PathConfig::new(1.0, 500);
    let mut simulator = PathSimulator::new(42);

    let path = match simulator.simulate(&cfg) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            return;
        }
    };
    let gbm = exponentiate(&path);

    println!("1. Single path ({} points, δt = {})", path.len(), path.dt());
    println!("   W_T               = {:.6}", path.terminal());
    println!("   exp(W_T)          = {:.6}", gbm.terminal());
    println!(
        "   [W]_T (realised)  = {:.6}  (limit {})",
        path.quadratic_variation(),
        moments::quadratic_variation_limit(&cfg)
    );

    // Ensemble: drift and volatility, compared with closed-form moments
    let ensemble_cfg = EnsembleConfig {
        paths: 10_000,
        path: PathConfig::new(1.0, 252).with_drift(0.05).with_volatility(0.2),
        ..Default::default()
    };

    println!("\n2. Ensemble of {} paths", ensemble_cfg.paths);
    match ensemble_statistics(&ensemble_cfg) {
        Ok(stats) => {
            let rows = [
                ("E[X_T]", stats.terminal_mean, moments::terminal_mean(&ensemble_cfg.path)),
                ("Var[X_T]", stats.terminal_variance, moments::terminal_variance(&ensemble_cfg.path)),
                (
                    "[X]_T",
                    stats.quadratic_variation,
                    moments::quadratic_variation_limit(&ensemble_cfg.path),
                ),
                (
                    "E[exp(X_T)]",
                    stats.exp_terminal_mean,
                    moments::exp_terminal_mean(&ensemble_cfg.path),
                ),
            ];
            for (name, simulated, analytic) in rows {
                if let Some(simulated) = simulated {
                    println!(
                        "   {:<12} simulated {:>10.6}  analytic {:>10.6}",
                        name, simulated, analytic
                    );
                }
            }
        }
        Err(e) => eprintln!("   Ensemble statistics failed: {}", e),
    }

    // CSV output for an external charting tool
    if let Err(e) = fs::create_dir_all("results") {
        eprintln!("Could not create results directory: {}", e);
        return;
    }

    let path_csv = "results/path.csv";
    match output::write_path_to_csv(path_csv, &path) {
        Ok(_) => println!("\nPath written to {}", path_csv),
        Err(e) => eprintln!("Error writing path: {}", e),
    }

    let fan_cfg = EnsembleConfig {
        paths: 20,
        path: cfg,
        ..Default::default()
    };
    let fan_csv = "results/ensemble.csv";
    match simulate_ensemble(&fan_cfg) {
        Ok(paths) => match output::write_ensemble_to_csv(fan_csv, &paths) {
            Ok(_) => println!("Ensemble written to {}", fan_csv),
            Err(e) => eprintln!("Error writing ensemble: {}", e),
        },
        Err(e) => eprintln!("Ensemble simulation failed: {}", e),
    }

    let terminal = path.terminal().to_string();
    let qv = path.quadratic_variation().to_string();
    let summary = [
        ("metric", "value"),
        ("terminal", terminal.as_str()),
        ("quadratic_variation", qv.as_str()),
    ];
    let summary_csv = "results/summary.csv";
    match output::write_summary_to_csv(summary_csv, &summary) {
        Ok(_) => println!("Summary written to {}", summary_csv),
        Err(e) => eprintln!("Error writing summary: {}", e),
    }
}
