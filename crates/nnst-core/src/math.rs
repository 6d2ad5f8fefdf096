//! Mathematical utilities for non-stationarity analysis
//!
//! Descriptive statistics with Bessel's correction, decimal rounding, and the
//! normal-distribution helpers used by the run test.

/// Descriptive statistics over borrowed samples
pub mod descriptive {
    use crate::{Error, Result};
    use statrs::statistics::Statistics;

    /// Arithmetic mean of `data`.
    ///
    /// Fails on empty input instead of returning NaN.
    pub fn mean(data: &[f64]) -> Result<f64> {
        if data.is_empty() {
            return Err(Error::empty_input());
        }
        let m = data.mean();
        if !m.is_finite() {
            return Err(Error::non_finite("sample mean"));
        }
        Ok(m)
    }

    /// Sample standard deviation with Bessel's correction (divides by `n - 1`).
    ///
    /// Undefined for fewer than two samples, which is reported as a
    /// computation error rather than a fabricated zero.
    pub fn sample_std(data: &[f64]) -> Result<f64> {
        if data.len() < 2 {
            return Err(Error::Computation(format!(
                "sample standard deviation needs at least 2 samples, got {}",
                data.len()
            )));
        }
        let s = data.std_dev();
        if !s.is_finite() {
            return Err(Error::non_finite("sample standard deviation"));
        }
        Ok(s)
    }

    /// Round to a fixed number of decimal places.
    #[inline]
    pub fn round_to(value: f64, decimals: i32) -> f64 {
        let scale = 10f64.powi(decimals);
        (value * scale).round() / scale
    }

}

/// Distribution-related mathematical functions
pub mod distributions {
    /// Normal distribution utilities
    pub mod normal {
        use statrs::function::erf::erf;
        use std::f64::consts::SQRT_2;

        /// Cumulative distribution function of the standard normal distribution
        pub fn cdf(x: f64) -> f64 {
            0.5 * (1.0 + erf(x / SQRT_2))
        }

        /// Two-sided p-value of a standard normal test statistic
        pub fn two_sided_p_value(z: f64) -> f64 {
            2.0 * (1.0 - cdf(z.abs()))
        }

    }
}
