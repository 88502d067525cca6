//! Discretized Sample Paths
//!
//! A `SamplePath` is a sequence of `(t_k, X_k)` pairs on the uniform grid
//! ```text
//! t_k = k·δt,   k = 0..N,   δt = T/N
//! ```
//! so a path of `N` steps always holds `N + 1` points. Paths are immutable once
//! built; transforms such as [`SamplePath::exponentiate`] return a new path on
//! the same grid.

use ndarray::{s, Array1};

#[derive(Debug, Clone, PartialEq)]
pub struct SamplePath {
    dt: f64,
    times: Array1<f64>,
    values: Array1<f64>,
}

impl SamplePath {
    /// Build a path from its origin and a sequence of increments
    ///
    /// ```text
    /// X_0 = x0
    /// X_k = x0 + Σ_{i≤k} Δ_i
    /// ```
    ///
    /// The running sum is accumulated before the offset is added, so with
    /// `x0 = 0` the values are exactly the cumulative sums of the increments.
    pub(crate) fn from_increments(x0: f64, dt: f64, increments: &[f64]) -> Self {
        let mut values = Array1::zeros(increments.len() + 1);
        values[0] = x0;
        let mut running = 0.0;
        for (k, delta) in increments.iter().enumerate() {
            running += delta;
            values[k + 1] = x0 + running;
        }
        Self::from_values(dt, values)
    }

    /// Build a path from values already placed on the grid `k·dt`
    ///
    /// Callers guarantee at least one value and a positive, finite `dt`; the
    /// public routes to a path validate their configuration first.
    pub(crate) fn from_values(dt: f64, values: Array1<f64>) -> Self {
        let times = Array1::from_shape_fn(values.len(), |k| k as f64 * dt);
        SamplePath { dt, times, values }
    }

    /// Number of points (`steps + 1`)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of time steps `N`
    pub fn steps(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// Grid spacing `δt`
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Final time `T = N·δt`
    pub fn horizon(&self) -> f64 {
        self.steps() as f64 * self.dt
    }

    pub fn times(&self) -> &Array1<f64> {
        &self.times
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Iterate over `(time, value)` pairs in time order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.points().collect()
    }

    pub fn initial(&self) -> f64 {
        self.values[0]
    }

    pub fn terminal(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Per-step increments `X_k − X_{k−1}`, `N` values
    pub fn increments(&self) -> Array1<f64> {
        &self.values.slice(s![1..]) - &self.values.slice(s![..-1])
    }

    /// Realised quadratic variation `Σ (X_k − X_{k−1})²`
    ///
    /// For `X = μt + σW` this converges to `σ²T` as `δt → 0`.
    pub fn quadratic_variation(&self) -> f64 {
        self.increments().mapv(|d| d * d).sum()
    }

    /// Map every value through `exp`, keeping the time grid
    ///
    /// Applied to a drifted Wiener path this gives the geometric Brownian
    /// motion depiction `S_t = exp(X_t)`. No random draws; non-finite values
    /// pass straight through.
    pub fn exponentiate(&self) -> SamplePath {
        SamplePath {
            dt: self.dt,
            times: self.times.clone(),
            values: self.values.mapv(f64::exp),
        }
    }
}
