use statrs::function::erf;
use statrs::statistics::Statistics;
use std::f64::consts::SQRT_2;

pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf::erf(x / SQRT_2))
}

/// Sample mean and unbiased sample variance. Variance is 0 for a single value.
pub fn mean_and_variance(data: &[f64]) -> (f64, f64) {
    let mean = data.iter().mean();
    if data.len() < 2 {
        return (mean, 0.0);
    }
    (mean, data.iter().variance())
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
