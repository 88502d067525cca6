/// Coefficients of a scalar Ito process `dX_t = a(X_t, t) dt + b(X_t, t) dW_t`
pub trait SDEModel {
    fn drift(&self, x: f64, t: f64) -> f64;
    fn diffusion(&self, x: f64, t: f64) -> f64;
    /// `∂b/∂x`, needed by the Milstein correction
    fn diffusion_derivative(&self, x: f64, t: f64) -> f64;
}
