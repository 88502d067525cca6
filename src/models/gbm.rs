use super::model::SDEModel;
use crate::error::{validation::*, SdeResult};

/// Geometric Brownian motion `dS_t = μ S_t dt + σ S_t dW_t`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gbm {
    pub s0: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(s0: f64, mu: f64, sigma: f64) -> SdeResult<Self> {
        validate_positive("s0", s0)?;
        validate_finite("mu", mu)?;
        validate_non_negative("sigma", sigma)?;
        Ok(Gbm { s0, mu, sigma })
    }

    /// Exact log-space step `S_{t+δt} = S_t · exp((μ − σ²/2)δt + σ ΔW)`
    pub fn exact_step_with_dw(&self, s_t: f64, dt: f64, dw: f64) -> f64 {
        s_t * ((self.mu - 0.5 * self.sigma * self.sigma) * dt + self.sigma * dw).exp()
    }

    /// `E[S_t] = S_0 e^{μt}`
    pub fn expected_value(&self, t: f64) -> f64 {
        self.s0 * (self.mu * t).exp()
    }
}

impl SDEModel for Gbm {
    fn drift(&self, s: f64, _t: f64) -> f64 {
        self.mu * s
    }

    fn diffusion(&self, s: f64, _t: f64) -> f64 {
        self.sigma * s
    }

    fn diffusion_derivative(&self, _s: f64, _t: f64) -> f64 {
        self.sigma
    }
}
