//! Discretized Wiener Path Simulation
//!
//! # Mathematical Framework
//!
//! Simulates the drifted, scaled Wiener process
//! ```text
//! X_t = x0 + μt + σW_t
//! ```
//! on the grid `t_k = k·δt`, `δt = T/N`, with increments
//! ```text
//! Δ_i = μ δt + σ √δt z_i,    z_i ~ N(0,1) i.i.d.
//! X_k = x0 + Σ_{i≤k} Δ_i
//! ```
//! The exponential of the path, `S_t = exp(X_t)`, depicts a geometric
//! Brownian motion (see [`exponentiate`]).
//!
//! # Random State
//!
//! The generator is always an explicit argument, or owned by a
//! [`PathSimulator`] seeded once. Identical seeds and parameters give
//! bit-identical paths.

use crate::error::{validation::*, SdeResult};
use crate::models::model::SDEModel;
use crate::path::SamplePath;
use crate::rng;
use crate::solvers::{integrate_path, Scheme};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

/// Parameters of a single simulated path
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathConfig {
    /// Horizon `T` (> 0)
    pub t: f64,
    /// Number of steps `N` (> 0); the path has `N + 1` points
    pub steps: usize,
    /// Additive origin of the path
    pub x0: f64,
    /// Drift `μ`
    pub mu: f64,
    /// Volatility `σ` (≥ 0)
    pub sigma: f64,
}

impl PathConfig {
    /// Standard Wiener process over `[0, t]` with `steps` steps
    pub fn new(t: f64, steps: usize) -> Self {
        PathConfig {
            t,
            steps,
            ..Default::default()
        }
    }

    pub fn with_drift(mut self, mu: f64) -> Self {
        self.mu = mu;
        self
    }

    pub fn with_volatility(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    pub fn with_origin(mut self, x0: f64) -> Self {
        self.x0 = x0;
        self
    }

    /// Validate the path configuration
    ///
    /// The horizon must be positive and finite so the grid `k·δt` is well
    /// formed. Drift and origin are not checked: non-finite values there flow
    /// through to the values of the path.
    pub fn validate(&self) -> SdeResult<()> {
        validate_steps(self.steps)?;
        validate_positive("t", self.t)?;
        validate_finite("t", self.t)?;
        validate_non_negative("sigma", self.sigma)?;
        Ok(())
    }

    /// Grid spacing `δt = T/N`
    pub fn dt(&self) -> f64 {
        self.t / self.steps as f64
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        PathConfig {
            t: 1.0,
            steps: 500,
            x0: 0.0,
            mu: 0.0,
            sigma: 1.0,
        }
    }
}

/// Increments `Δ_i = μ δt + σ √δt z_i` for the given standard normal draws
pub fn brownian_increments(cfg: &PathConfig, draws: &[f64]) -> Vec<f64> {
    let dt = cfg.dt();
    let drift = cfg.mu * dt;
    let scale = cfg.sigma * dt.sqrt();
    draws.iter().map(|z| drift + scale * z).collect()
}

/// Simulate a path from caller-supplied standard normal draws
///
/// # Errors
///
/// - `InvalidParameters` for `steps = 0`, `t ≤ 0`, non-finite `t` or `sigma < 0`
/// - `InvalidConfiguration` if `draws.len() != steps`
pub fn simulate_with_draws(cfg: &PathConfig, draws: &[f64]) -> SdeResult<SamplePath> {
    cfg.validate()?;
    validate_len("draws", draws.len(), cfg.steps)?;

    let increments = brownian_increments(cfg, draws);
    Ok(SamplePath::from_increments(cfg.x0, cfg.dt(), &increments))
}

/// Simulate a path of `X_t = x0 + μt + σW_t`, drawing `N` normals from `rng`
///
/// Validation happens before any draw, so a rejected configuration leaves the
/// generator untouched.
pub fn simulate<R: Rng + ?Sized>(cfg: &PathConfig, rng: &mut R) -> SdeResult<SamplePath> {
    cfg.validate()?;
    debug!(
        "simulating path: t={} steps={} x0={} mu={} sigma={}",
        cfg.t, cfg.steps, cfg.x0, cfg.mu, cfg.sigma
    );
    let draws = rng::normal_draws(rng, cfg.steps);
    simulate_with_draws(cfg, &draws)
}

/// Geometric Brownian motion depiction of a path: every value through `exp`
pub fn exponentiate(path: &SamplePath) -> SamplePath {
    path.exponentiate()
}

/// Simulation context owning its random generator
///
/// Seed it once; every call advances the same stream. For parallel work give
/// each thread its own simulator (see [`crate::rng::RngFactory`]).
pub struct PathSimulator<R: Rng = StdRng> {
    rng: R,
}

impl PathSimulator<StdRng> {
    pub fn new(seed: u64) -> Self {
        PathSimulator {
            rng: rng::seed_rng_from_u64(seed),
        }
    }
}

impl<R: Rng> PathSimulator<R> {
    pub fn from_rng(rng: R) -> Self {
        PathSimulator { rng }
    }

    pub fn simulate(&mut self, cfg: &PathConfig) -> SdeResult<SamplePath> {
        simulate(cfg, &mut self.rng)
    }

    /// Simulate `X_t` and return `exp(X_t)`
    pub fn simulate_exponential(&mut self, cfg: &PathConfig) -> SdeResult<SamplePath> {
        self.simulate(cfg).map(|path| path.exponentiate())
    }

    /// Integrate an arbitrary Ito process from `x0` on the grid of `cfg`
    ///
    /// Only `t` and `steps` of `cfg` are used; drift and volatility come from
    /// `model`.
    pub fn integrate<M: SDEModel + ?Sized>(
        &mut self,
        model: &M,
        x0: f64,
        cfg: &PathConfig,
        scheme: Scheme,
    ) -> SdeResult<SamplePath> {
        validate_steps(cfg.steps)?;
        validate_positive("t", cfg.t)?;
        validate_finite("t", cfg.t)?;
        let sqrt_dt = cfg.dt().sqrt();
        let dws: Vec<f64> = rng::normal_draws(&mut self.rng, cfg.steps)
            .into_iter()
            .map(|z| sqrt_dt * z)
            .collect();
        integrate_path(model, x0, cfg.t, &dws, scheme)
    }

    pub fn into_rng(self) -> R {
        self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdeError;

    #[test]
    fn test_default_config() {
        let cfg = PathConfig::default();
        assert_eq!(cfg.x0, 0.0);
        assert_eq!(cfg.mu, 0.0);
        assert_eq!(cfg.sigma, 1.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_builder_helpers() {
        let cfg = PathConfig::new(2.0, 8)
            .with_drift(0.1)
            .with_volatility(0.3)
            .with_origin(-1.0);
        assert_eq!(cfg.t, 2.0);
        assert_eq!(cfg.steps, 8);
        assert_eq!(cfg.mu, 0.1);
        assert_eq!(cfg.sigma, 0.3);
        assert_eq!(cfg.x0, -1.0);
        assert!((cfg.dt() - 0.25).abs() < 1e-15);
    }

    #[test]
    fn test_increments_formula() {
        let cfg = PathConfig::new(1.0, 4).with_drift(0.4).with_volatility(2.0);
        let incs = brownian_increments(&cfg, &[1.0, -1.0, 0.0, 0.5]);
        // μδt = 0.1, σ√δt = 1.0
        let expected = [1.1, -0.9, 0.1, 0.6];
        for (got, want) in incs.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_infinite_horizon_is_rejected() {
        let cfg = PathConfig::new(f64::INFINITY, 4);
        assert!(matches!(
            cfg.validate(),
            Err(SdeError::InvalidParameters { .. })
        ));
        assert!(matches!(
            simulate(&cfg, &mut rng::seed_rng_from_u64(0)),
            Err(SdeError::InvalidParameters { .. })
        ));

        let model = crate::models::brownian::DriftedBrownian::standard();
        assert!(PathSimulator::new(0)
            .integrate(&model, 0.0, &cfg, Scheme::Milstein)
            .is_err());
    }

    #[test]
    fn test_draw_count_mismatch() {
        let cfg = PathConfig::new(1.0, 4);
        let err = simulate_with_draws(&cfg, &[0.1, 0.2]).unwrap_err();
        assert!(matches!(err, SdeError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_invalid_config_consumes_no_draws() {
        let mut rng_a = rng::seed_rng_from_u64(3);
        let mut rng_b = rng::seed_rng_from_u64(3);
        assert!(simulate(&PathConfig::new(-1.0, 10), &mut rng_a).is_err());

        let a = simulate(&PathConfig::new(1.0, 10), &mut rng_a).unwrap();
        let b = simulate(&PathConfig::new(1.0, 10), &mut rng_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_simulator_stream_advances() {
        let cfg = PathConfig::new(1.0, 16);
        let mut sim = PathSimulator::new(11);
        let first = sim.simulate(&cfg).unwrap();
        let second = sim.simulate(&cfg).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_simulate_exponential_starts_at_one() {
        let mut sim = PathSimulator::new(5);
        let gbm = sim.simulate_exponential(&PathConfig::new(1.0, 32)).unwrap();
        assert_eq!(gbm.initial(), 1.0);
        assert!(gbm.values().iter().all(|&v| v > 0.0));
    }
}
