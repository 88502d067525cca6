//! Drifted, Scaled Wiener Process
//!
//! # Mathematical Framework
//!
//! ```text
//! dX_t = μ dt + σ dW_t,    X_0 = x0
//! X_t  = x0 + μt + σW_t
//! ```
//!
//! Drift and diffusion are constant, so an Euler-Maruyama step is exact and the
//! Milstein correction vanishes.
//!
//! # Ito's Lemma for the Exponential
//!
//! For `Y = f(X) = e^X`, with `f' = f'' = e^X`:
//! ```text
//! dY = f'(X) dX + ½ f''(X) σ² dt
//!    = Y (μ + σ²/2) dt + Y σ dW
//! ```
//! so `exp(X)` is a geometric Brownian motion with drift `μ + σ²/2`.

use super::gbm::Gbm;
use super::model::SDEModel;
use crate::error::{validation::*, SdeResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftedBrownian {
    pub x0: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl DriftedBrownian {
    /// Only the volatility is checked, as for `PathConfig`; a non-finite
    /// origin or drift flows through to the integrated values.
    pub fn new(x0: f64, mu: f64, sigma: f64) -> SdeResult<Self> {
        validate_non_negative("sigma", sigma)?;
        Ok(DriftedBrownian { x0, mu, sigma })
    }

    /// Standard Wiener process: `x0 = 0`, `μ = 0`, `σ = 1`
    pub fn standard() -> Self {
        DriftedBrownian {
            x0: 0.0,
            mu: 0.0,
            sigma: 1.0,
        }
    }

    /// Dynamics of `exp(X_t)` obtained through Ito's lemma
    pub fn exponential_dynamics(&self) -> Gbm {
        Gbm {
            s0: self.x0.exp(),
            mu: self.mu + 0.5 * self.sigma * self.sigma,
            sigma: self.sigma,
        }
    }
}

impl SDEModel for DriftedBrownian {
    fn drift(&self, _x: f64, _t: f64) -> f64 {
        self.mu
    }

    fn diffusion(&self, _x: f64, _t: f64) -> f64 {
        self.sigma
    }

    fn diffusion_derivative(&self, _x: f64, _t: f64) -> f64 {
        0.0
    }
}
