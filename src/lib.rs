//! # wiener-paths: Discretized Brownian Motion for Stochastic Calculus
//!
//! A Rust library that simulates sample paths of a drifted, scaled Wiener
//! process, depicts geometric Brownian motion through its exponential, and
//! checks both against the results of Ito calculus.
//!
//! ## Key Features
//!
//! - **Wiener paths**: `X_t = x0 + μt + σW_t` on a uniform grid of `N + 1` points
//! - **Geometric Brownian motion**: the pure `exponentiate` transform
//! - **Ito processes**: Euler-Maruyama and Milstein integration of any scalar SDE
//! - **Ito's lemma**: the GBM dynamics of `exp(X)` with drift `μ + σ²/2`
//! - **Ensembles**: parallel, seed-reproducible batches of paths with statistics
//! - **Explicit random state**: every generator is passed in or owned by a simulator
//!
//! ## Quick Start
//!
//! ```rust
//! use wiener_paths::simulator::{exponentiate, PathConfig, PathSimulator};
//!
//! // Standard Brownian motion over [0, 1] in 4 steps
//! let cfg = PathConfig::new(1.0, 4);
//!
//! let mut simulator = PathSimulator::new(42);
//! let path = simulator.simulate(&cfg).expect("Valid configuration");
//! assert_eq!(path.len(), 5);
//! assert_eq!(path.initial(), 0.0);
//!
//! let gbm = exponentiate(&path);
//! assert_eq!(gbm.initial(), 1.0);
//! ```
//!
//! ## Mathematical Foundation
//!
//! With `δt = T/N` and `z_i ~ N(0,1)` i.i.d., the simulated values are the
//! cumulative sums of `Δ_i = μδt + σ√δt z_i`. By Ito's lemma `S = e^X` solves
//! `dS = S(μ + σ²/2)dt + SσdW`, a geometric Brownian motion.

// Module declarations
pub mod error;
pub mod rng;
pub mod math_utils;
pub mod path;
pub mod models;
pub mod solvers;
pub mod simulator;
pub mod mc;
pub mod analytics;
pub mod output;

// Re-export commonly used types for convenience
pub use error::{SdeError, SdeResult};
pub use path::SamplePath;
pub use simulator::{exponentiate, simulate, simulate_with_draws, PathConfig, PathSimulator};
