use wiener_paths::models::brownian::DriftedBrownian;
use wiener_paths::rng;
use wiener_paths::simulator::{simulate_with_draws, PathConfig, PathSimulator};
use wiener_paths::solvers::{integrate_path, Scheme};

fn brownian_increments(draws: &[f64], dt: f64) -> Vec<f64> {
    draws.iter().map(|z| z * dt.sqrt()).collect()
}

#[test]
fn test_euler_maruyama_reproduces_wiener_path() {
    let cfg = PathConfig::new(1.0, 64)
        .with_drift(0.3)
        .with_volatility(0.8);
    let model = DriftedBrownian::new(cfg.x0, cfg.mu, cfg.sigma).expect("Valid parameters");

    let draws = rng::normal_draws(&mut rng::seed_rng_from_u64(17), cfg.steps);
    let direct = simulate_with_draws(&cfg, &draws).expect("Valid configuration");
    let integrated = integrate_path(
        &model,
        cfg.x0,
        cfg.t,
        &brownian_increments(&draws, cfg.dt()),
        Scheme::EulerMaruyama,
    )
    .expect("Valid configuration");

    assert_eq!(direct.times(), integrated.times());
    for (a, b) in direct.values().iter().zip(integrated.values().iter()) {
        assert!((a - b).abs() < 1e-12, "direct {} vs integrated {}", a, b);
    }
}

#[test]
fn test_exact_gbm_step_matches_exponentiated_path() {
    let cfg = PathConfig::new(2.0, 100)
        .with_drift(0.05)
        .with_volatility(0.25);
    let gbm = DriftedBrownian::new(cfg.x0, cfg.mu, cfg.sigma)
        .expect("Valid parameters")
        .exponential_dynamics();

    let draws = rng::normal_draws(&mut rng::seed_rng_from_u64(3), cfg.steps);
    let expected = simulate_with_draws(&cfg, &draws)
        .expect("Valid configuration")
        .exponentiate();

    let mut s = gbm.s0;
    for (k, dw) in brownian_increments(&draws, cfg.dt()).into_iter().enumerate() {
        s = gbm.exact_step_with_dw(s, cfg.dt(), dw);
        let want = expected.values()[k + 1];
        assert!(
            ((s - want) / want).abs() < 1e-10,
            "step {}: exact GBM {} vs exp(X) {}",
            k + 1,
            s,
            want
        );
    }
}

#[test]
fn test_ito_lemma_strong_convergence() {
    let t_end = 1.0;
    let mu = 0.05;
    let sigma = 0.4;
    let gbm = DriftedBrownian::new(0.0, mu, sigma)
        .expect("Valid parameters")
        .exponential_dynamics();
    let num_paths = 500;
    let step_counts = [10, 40, 160];

    let mut em_errors = Vec::new();
    let mut milstein_errors = Vec::new();
    for &num_steps in &step_counts {
        let cfg = PathConfig::new(t_end, num_steps)
            .with_drift(mu)
            .with_volatility(sigma);
        let mut em_sq = 0.0;
        let mut milstein_sq = 0.0;

        for i in 0..num_paths {
            let draws = rng::normal_draws(&mut rng::seed_rng_from_u64(42 + i as u64), num_steps);
            let dws = brownian_increments(&draws, cfg.dt());
            let exact = simulate_with_draws(&cfg, &draws)
                .expect("Valid configuration")
                .exponentiate()
                .terminal();

            let em = integrate_path(&gbm, gbm.s0, t_end, &dws, Scheme::EulerMaruyama)
                .expect("Valid configuration")
                .terminal();
            let milstein = integrate_path(&gbm, gbm.s0, t_end, &dws, Scheme::Milstein)
                .expect("Valid configuration")
                .terminal();

            em_sq += (em - exact).powi(2);
            milstein_sq += (milstein - exact).powi(2);
        }
        em_errors.push((em_sq / num_paths as f64).sqrt());
        milstein_errors.push((milstein_sq / num_paths as f64).sqrt());
    }

    println!("\nEuler-Maruyama RMSEs: {:?}", em_errors);
    println!("Milstein RMSEs: {:?}", milstein_errors);

    for i in 0..step_counts.len() {
        assert!(
            milstein_errors[i] < em_errors[i],
            "Milstein ({}) should beat Euler-Maruyama ({}) with {} steps",
            milstein_errors[i],
            em_errors[i],
            step_counts[i]
        );
    }

    // 16x more steps: strong order 0.5 → about 4x smaller, order 1 → about 16x
    let em_ratio = em_errors[0] / em_errors[2];
    let milstein_ratio = milstein_errors[0] / milstein_errors[2];
    assert!(em_ratio > 2.5, "Euler-Maruyama error ratio too small: {}", em_ratio);
    assert!(milstein_ratio > 8.0, "Milstein error ratio too small: {}", milstein_ratio);
}

#[test]
fn test_simulator_integrates_ito_process() {
    let cfg = PathConfig::new(1.0, 200);
    let gbm = DriftedBrownian::standard().exponential_dynamics();

    let mut simulator = PathSimulator::new(8);
    let path = simulator
        .integrate(&gbm, gbm.s0, &cfg, Scheme::Milstein)
        .expect("Valid configuration");

    assert_eq!(path.len(), 201);
    assert_eq!(path.initial(), 1.0);
    assert!(path.values().iter().all(|v| v.is_finite()));
}
