// src/solvers/milstein.rs
//! Milstein Scheme for Higher-Order SDE Integration
//!
//! # Mathematical Framework
//!
//! For a scalar SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Milstein scheme includes an additional correction term:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) ΔW_n + ½ b(X_n, t_n) b'(X_n, t_n) [(ΔW_n)² - Δt]
//! ```
//!
//! `(ΔW_n)² - Δt` is the Itô correction; it vanishes in expectation because
//! `E[(ΔW)²] = Δt`, which is the discrete form of `(dW)² = dt`.
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 1.0 (vs 0.5 for Euler-Maruyama)
//! - **Weak convergence**: Order 1.0

use crate::models::model::SDEModel;

/// Milstein numerical scheme for SDE integration
pub struct Milstein;

impl Milstein {
    /// Single Milstein step driven by a given Brownian increment `dw`
    pub fn step_with_dw<M: SDEModel + ?Sized>(model: &M, x: &mut f64, t: f64, dt: f64, dw: f64) {
        let drift_val = model.drift(*x, t);
        let diffusion_val = model.diffusion(*x, t);
        let diffusion_derivative_val = model.diffusion_derivative(*x, t);

        // Milstein scheme: Euler + Itô correction
        *x += drift_val * dt
            + diffusion_val * dw
            + 0.5 * diffusion_val * diffusion_derivative_val * (dw * dw - dt);
    }
}
