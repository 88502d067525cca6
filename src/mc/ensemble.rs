// src/mc/ensemble.rs
use crate::error::{validation::*, SdeError, SdeResult};
use crate::math_utils::mean_and_variance;
use crate::path::SamplePath;
use crate::rng::RngFactory;
use crate::simulator::{simulate, PathConfig};
use bitflags::bitflags;
use log::{debug, warn};
use rayon::prelude::*;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatsConfig: u32 {
        const NONE                = 0;
        const TERMINAL_MEAN       = 1 << 0;
        const TERMINAL_VARIANCE   = 1 << 1;
        const QUADRATIC_VARIATION = 1 << 2;
        const EXP_TERMINAL_MEAN   = 1 << 3;
    }
}

#[derive(Clone, Debug)]
pub struct EnsembleConfig {
    pub paths: usize,
    pub seed: u64,
    pub path: PathConfig,
    pub stats: StatsConfig,
}

impl EnsembleConfig {
    /// Validate the ensemble configuration
    pub fn validate(&self) -> SdeResult<()> {
        validate_paths(self.paths)?;
        self.path.validate()?;
        if self.path.sigma == 0.0 {
            warn!(
                "ensemble of {} paths with zero volatility: every path is identical",
                self.paths
            );
        }
        Ok(())
    }
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        EnsembleConfig {
            paths: 1_000,
            seed: 12345,
            path: PathConfig::default(),
            stats: StatsConfig::all(),
        }
    }
}

/// Statistics requested through `StatsConfig`; unrequested entries are `None`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnsembleStats {
    pub paths: usize,
    /// Sample mean of `X_T`
    pub terminal_mean: Option<f64>,
    /// Unbiased sample variance of `X_T`
    pub terminal_variance: Option<f64>,
    /// Average realised quadratic variation `Σ (ΔX)²`
    pub quadratic_variation: Option<f64>,
    /// Sample mean of `exp(X_T)`
    pub exp_terminal_mean: Option<f64>,
}

/// Simulate `cfg.paths` independent paths in parallel
///
/// Path `i` is driven by its own generator seeded from `(seed, i)`, so the
/// result is identical for any number of worker threads.
pub fn simulate_ensemble(cfg: &EnsembleConfig) -> SdeResult<Vec<SamplePath>> {
    cfg.validate()?;
    debug!(
        "simulating ensemble: paths={} steps={} seed={}",
        cfg.paths, cfg.path.steps, cfg.seed
    );
    let factory = RngFactory::new(cfg.seed);

    (0..cfg.paths)
        .into_par_iter()
        .map(|i| {
            let mut rng = factory.create_std_rng(i as u64);
            simulate(&cfg.path, &mut rng)
        })
        .collect()
}

/// Compute the requested ensemble statistics
///
/// Paths are reduced to their terminal value and quadratic variation inside
/// the parallel map, so the full ensemble is never held in memory.
///
/// # Errors
///
/// `NumericalInstability` if a requested statistic is not finite.
pub fn ensemble_statistics(cfg: &EnsembleConfig) -> SdeResult<EnsembleStats> {
    cfg.validate()?;
    let factory = RngFactory::new(cfg.seed);

    let summaries: Vec<(f64, f64)> = (0..cfg.paths)
        .into_par_iter()
        .map(|i| -> SdeResult<(f64, f64)> {
            let mut rng = factory.create_std_rng(i as u64);
            let path = simulate(&cfg.path, &mut rng)?;
            Ok((path.terminal(), path.quadratic_variation()))
        })
        .collect::<SdeResult<Vec<_>>>()?;

    let terminals: Vec<f64> = summaries.iter().map(|(x_t, _)| *x_t).collect();
    let (terminal_mean, terminal_variance) = mean_and_variance(&terminals);

    let mut stats = EnsembleStats {
        paths: cfg.paths,
        ..Default::default()
    };

    if cfg.stats.contains(StatsConfig::TERMINAL_MEAN) {
        stats.terminal_mean = Some(check_finite("terminal mean", terminal_mean)?);
    }
    if cfg.stats.contains(StatsConfig::TERMINAL_VARIANCE) {
        stats.terminal_variance = Some(check_finite("terminal variance", terminal_variance)?);
    }
    if cfg.stats.contains(StatsConfig::QUADRATIC_VARIATION) {
        let qv = summaries.iter().map(|(_, qv)| qv).sum::<f64>() / cfg.paths as f64;
        stats.quadratic_variation = Some(check_finite("quadratic variation", qv)?);
    }
    if cfg.stats.contains(StatsConfig::EXP_TERMINAL_MEAN) {
        let exp_mean = terminals.iter().map(|x| x.exp()).sum::<f64>() / cfg.paths as f64;
        stats.exp_terminal_mean = Some(check_finite("exponential terminal mean", exp_mean)?);
    }

    Ok(stats)
}

fn check_finite(what: &str, value: f64) -> SdeResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SdeError::NumericalInstability {
            method: "ensemble_statistics".to_string(),
            reason: format!("{} is not finite ({})", what, value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_ensemble() {
        let cfg = EnsembleConfig {
            paths: 0,
            ..Default::default()
        };
        assert!(matches!(
            simulate_ensemble(&cfg),
            Err(SdeError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_invalid_path_config_propagates() {
        let cfg = EnsembleConfig {
            paths: 4,
            path: PathConfig::new(1.0, 10).with_volatility(-0.5),
            ..Default::default()
        };
        assert!(matches!(
            ensemble_statistics(&cfg),
            Err(SdeError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_unrequested_stats_are_none() {
        let cfg = EnsembleConfig {
            paths: 16,
            path: PathConfig::new(1.0, 8),
            stats: StatsConfig::TERMINAL_MEAN,
            ..Default::default()
        };
        let stats = ensemble_statistics(&cfg).unwrap();
        assert_eq!(stats.paths, 16);
        assert!(stats.terminal_mean.is_some());
        assert!(stats.terminal_variance.is_none());
        assert!(stats.quadratic_variation.is_none());
        assert!(stats.exp_terminal_mean.is_none());
    }

    #[test]
    fn test_overflowing_exponential_is_reported() {
        let cfg = EnsembleConfig {
            paths: 4,
            path: PathConfig::new(1.0, 4).with_drift(1.0e6).with_volatility(0.0),
            stats: StatsConfig::EXP_TERMINAL_MEAN,
            ..Default::default()
        };
        assert!(matches!(
            ensemble_statistics(&cfg),
            Err(SdeError::NumericalInstability { .. })
        ));
    }
}
