//! Closed-form results for the drifted Wiener process
//!
//! # Mathematical Foundation
//!
//! For `X_t = x0 + μt + σW_t`, `X_t ~ N(x0 + μt, σ²t)`, hence
//! ```text
//! E[X_t]       = x0 + μt
//! Var[X_t]     = σ²t
//! E[exp(X_t)]  = exp(x0 + μt + σ²t/2)
//! P(X_t > L)   = 1 − Φ((L − x0 − μt) / (σ√t))
//! [X]_t        = σ²t          (quadratic variation)
//! ```
//! These are the reference values the simulated paths are checked against.

use crate::math_utils::norm_cdf;
use crate::simulator::PathConfig;

/// `E[X_t] = x0 + μt`
pub fn terminal_mean(cfg: &PathConfig) -> f64 {
    cfg.x0 + cfg.mu * cfg.t
}

/// `Var[X_t] = σ²t`
pub fn terminal_variance(cfg: &PathConfig) -> f64 {
    cfg.sigma * cfg.sigma * cfg.t
}

/// `E[exp(X_t)] = exp(x0 + μt + σ²t/2)`
///
/// The `σ²t/2` term is the same Ito correction that appears in the drift of
/// `exp(X)`.
pub fn exp_terminal_mean(cfg: &PathConfig) -> f64 {
    (terminal_mean(cfg) + 0.5 * terminal_variance(cfg)).exp()
}

/// Probability that `X_t` ends strictly above `level`
///
/// With zero volatility `X_t` is deterministic and this is 0 or 1.
pub fn prob_exceeds(cfg: &PathConfig, level: f64) -> f64 {
    let mean = terminal_mean(cfg);
    let std_dev = terminal_variance(cfg).sqrt();
    if std_dev == 0.0 {
        return if mean > level { 1.0 } else { 0.0 };
    }
    1.0 - norm_cdf((level - mean) / std_dev)
}

/// Limit of the realised quadratic variation as `δt → 0`: `σ²t`
pub fn quadratic_variation_limit(cfg: &PathConfig) -> f64 {
    terminal_variance(cfg)
}
