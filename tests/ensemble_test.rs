use wiener_paths::analytics::moments;
use wiener_paths::mc::ensemble::{
    ensemble_statistics, simulate_ensemble, EnsembleConfig, StatsConfig,
};
use wiener_paths::simulator::PathConfig;

fn drifted_config(paths: usize) -> EnsembleConfig {
    EnsembleConfig {
        paths,
        seed: 42,
        path: PathConfig::new(1.0, 50).with_drift(0.1).with_volatility(0.3),
        stats: StatsConfig::all(),
    }
}

#[test]
fn test_ensemble_moments_vs_analytic() {
    let cfg = drifted_config(20_000);
    let stats = ensemble_statistics(&cfg).expect("Valid configuration");

    let mean = stats.terminal_mean.expect("requested");
    let variance = stats.terminal_variance.expect("requested");
    let qv = stats.quadratic_variation.expect("requested");
    let exp_mean = stats.exp_terminal_mean.expect("requested");

    println!("\nTerminal mean: {} (analytic {})", mean, moments::terminal_mean(&cfg.path));
    println!(
        "Terminal variance: {} (analytic {})",
        variance,
        moments::terminal_variance(&cfg.path)
    );
    println!(
        "Quadratic variation: {} (limit {})",
        qv,
        moments::quadratic_variation_limit(&cfg.path)
    );
    println!(
        "E[exp(X_T)]: {} (analytic {})",
        exp_mean,
        moments::exp_terminal_mean(&cfg.path)
    );

    assert!((mean - moments::terminal_mean(&cfg.path)).abs() < 0.01);
    assert!((variance - moments::terminal_variance(&cfg.path)).abs() < 0.005);
    assert!((qv - moments::quadratic_variation_limit(&cfg.path)).abs() < 0.002);
    assert!((exp_mean - moments::exp_terminal_mean(&cfg.path)).abs() < 0.015);
}

#[test]
fn test_exceedance_probability_vs_analytic() {
    let cfg = drifted_config(10_000);
    let paths = simulate_ensemble(&cfg).expect("Valid configuration");
    let level = 0.2;

    let hits = paths.iter().filter(|p| p.terminal() > level).count();
    let empirical = hits as f64 / paths.len() as f64;
    let analytic = moments::prob_exceeds(&cfg.path, level);

    println!("\nP(X_T > {}): empirical {}, analytic {}", level, empirical, analytic);
    assert!((empirical - analytic).abs() < 0.02);
}

#[test]
fn test_ensemble_is_reproducible() {
    let cfg = drifted_config(64);
    let a = simulate_ensemble(&cfg).expect("Valid configuration");
    let b = simulate_ensemble(&cfg).expect("Valid configuration");
    assert_eq!(a, b);
    assert_eq!(
        ensemble_statistics(&cfg).expect("Valid configuration"),
        ensemble_statistics(&cfg).expect("Valid configuration")
    );
}

#[test]
fn test_ensemble_independent_of_thread_count() {
    let cfg = drifted_config(64);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .expect("thread pool");

    let single = pool.install(|| simulate_ensemble(&cfg).expect("Valid configuration"));
    let parallel = simulate_ensemble(&cfg).expect("Valid configuration");
    assert_eq!(single, parallel);
}

#[test]
fn test_ensemble_paths_are_distinct() {
    let cfg = drifted_config(8);
    let paths = simulate_ensemble(&cfg).expect("Valid configuration");

    assert_eq!(paths.len(), 8);
    for path in &paths {
        assert_eq!(path.len(), 51);
        assert_eq!(path.initial(), 0.0);
    }
    assert_ne!(paths[0], paths[1]);
}
