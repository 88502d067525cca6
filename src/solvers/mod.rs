//! Pathwise integration of scalar Ito processes
//!
//! The integrators take the Brownian increments as input instead of drawing
//! them, so one set of increments can drive several processes. This is how a
//! drifted Wiener path and the Ito's lemma dynamics of its exponential are
//! compared on the same underlying noise.

pub mod euler_maruyama;
pub mod milstein;

use crate::error::{validation::*, SdeResult};
use crate::models::model::SDEModel;
use crate::path::SamplePath;
use euler_maruyama::EulerMaruyama;
use log::warn;
use milstein::Milstein;
use ndarray::Array1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Scheme {
    #[default]
    EulerMaruyama,
    Milstein,
}

impl Scheme {
    pub fn step_with_dw<M: SDEModel + ?Sized>(
        self,
        model: &M,
        x: &mut f64,
        t: f64,
        dt: f64,
        dw: f64,
    ) {
        match self {
            Scheme::EulerMaruyama => EulerMaruyama::step_with_dw(model, x, t, dt, dw),
            Scheme::Milstein => Milstein::step_with_dw(model, x, t, dt, dw),
        }
    }
}

/// Integrate `model` from `x0` over `[0, horizon]` along the Brownian
/// increments `dws` (one per step, each `~ N(0, δt)`)
///
/// Returns a path of `dws.len() + 1` points. A state that becomes non-finite
/// is logged once and propagated unchanged.
pub fn integrate_path<M: SDEModel + ?Sized>(
    model: &M,
    x0: f64,
    horizon: f64,
    dws: &[f64],
    scheme: Scheme,
) -> SdeResult<SamplePath> {
    validate_positive("t", horizon)?;
    validate_finite("t", horizon)?;
    validate_steps(dws.len())?;

    let steps = dws.len();
    let dt = horizon / steps as f64;
    let mut values = Array1::zeros(steps + 1);
    values[0] = x0;

    let mut x = x0;
    let mut reported = false;
    for (k, &dw) in dws.iter().enumerate() {
        scheme.step_with_dw(model, &mut x, k as f64 * dt, dt, dw);
        if !x.is_finite() && !reported {
            warn!(
                "{:?} produced a non-finite state {} at step {} of {}",
                scheme,
                x,
                k + 1,
                steps
            );
            reported = true;
        }
        values[k + 1] = x;
    }

    Ok(SamplePath::from_values(dt, values))
}
