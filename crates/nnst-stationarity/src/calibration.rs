//! Run-test calibration
//!
//! Under the stationarity hypothesis the in/out-of-bounds labels behave as
//! independent outcomes, so for `N1` out-of-bounds and `N0` in-bounds
//! segments (`N = N1 + N0`) the run count is asymptotically normal with
//!
//! ```text
//! E[R]   = 2·N1·N0 / N + 1
//! Var[R] = 2·N1·N0·(2·N1·N0 − N) / (N²·(N − 1))
//! ```
//!
//! The observed run count is accepted when it lies within
//! `E[R] ± alpha·sqrt(Var[R])`.

use crate::runs::RunStatistics;
use crate::types::{ConfidenceLevel, Verdict};
use nnst_core::math::distributions::normal;
use nnst_core::{round_to, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ceiling applied to the index before rounding
pub const MAX_INDEX: f64 = 100.0;

/// Decimal places kept in the index and the percentage limits
const PCT_DECIMALS: i32 = 2;

/// Calibrated run-test outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    confidence: ConfidenceLevel,
    alpha: f64,
    expected_runs: f64,
    run_variance: f64,
    lower_limit: f64,
    upper_limit: f64,
    lower_pct: f64,
    upper_pct: f64,
    index: f64,
    verdict: Verdict,
    z_score: Option<f64>,
    p_value: Option<f64>,
}

impl Calibration {
    pub fn compute(runs: &RunStatistics, confidence: ConfidenceLevel) -> Result<Self> {
        let n1 = runs.out_of_bounds();
        let n0 = runs.in_bounds();
        let observed = runs.observed_runs() as f64;

        let expected_runs = expected_runs(n1, n0)?;
        let run_variance = run_variance(n1, n0)?;
        let alpha = confidence.alpha();
        let spread = alpha * run_variance.sqrt();

        let upper_limit = finite(expected_runs + spread, "upper run limit")?;
        let lower_limit = finite(expected_runs - spread, "lower run limit")?;
        let upper_pct = round_to(
            finite(100.0 * upper_limit / expected_runs, "upper limit percentage")?,
            PCT_DECIMALS,
        );
        let lower_pct = round_to(
            finite(100.0 * lower_limit / expected_runs, "lower limit percentage")?,
            PCT_DECIMALS,
        );

        let verdict = if (lower_limit..=upper_limit).contains(&observed) {
            Verdict::Stationary
        } else {
            Verdict::NonStationary
        };

        let raw_index = finite(100.0 * observed / expected_runs, "non-stationarity index")?;
        let index = round_to(raw_index.min(MAX_INDEX), PCT_DECIMALS);

        let z_score =
            (run_variance > 0.0).then(|| (observed - expected_runs) / run_variance.sqrt());
        let p_value = z_score.map(normal::two_sided_p_value);

        debug!(
            expected_runs,
            run_variance,
            lower_limit,
            upper_limit,
            index,
            ?verdict,
            "calibration"
        );

        Ok(Self {
            confidence,
            alpha,
            expected_runs,
            run_variance,
            lower_limit,
            upper_limit,
            lower_pct,
            upper_pct,
            index,
            verdict,
            z_score,
            p_value,
        })
    }

    pub fn confidence(&self) -> ConfidenceLevel {
        self.confidence
    }

    /// Critical value used for the limits
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Expected run count under stationarity
    pub fn expected_runs(&self) -> f64 {
        self.expected_runs
    }

    /// Variance of the run count under stationarity
    pub fn run_variance(&self) -> f64 {
        self.run_variance
    }

    /// Lower acceptance limit, in runs
    pub fn lower_limit(&self) -> f64 {
        self.lower_limit
    }

    /// Upper acceptance limit, in runs
    pub fn upper_limit(&self) -> f64 {
        self.upper_limit
    }

    /// `[lower, upper]` limits as percentages of the expected run count
    pub fn limits_pct(&self) -> [f64; 2] {
        [self.lower_pct, self.upper_pct]
    }

    /// Observed runs as a percentage of the expected count, capped at 100
    pub fn index(&self) -> f64 {
        self.index
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Standardized run count, `None` when the variance is zero
    pub fn z_score(&self) -> Option<f64> {
        self.z_score
    }

    /// Two-sided normal p-value of [`Self::z_score`]
    pub fn p_value(&self) -> Option<f64> {
        self.p_value
    }
}

/// `2·N1·N0 / N + 1`
pub fn expected_runs(n1: usize, n0: usize) -> Result<f64> {
    let n = n1 + n0;
    if n < 2 {
        return Err(Error::insufficient_segments(n));
    }
    let (n1, n0, n) = (n1 as f64, n0 as f64, n as f64);
    finite(2.0 * n1 * n0 / n + 1.0, "expected run count")
}

/// `2·N1·N0·(2·N1·N0 − N) / (N²·(N − 1))`, rejected when negative
pub fn run_variance(n1: usize, n0: usize) -> Result<f64> {
    let n = n1 + n0;
    if n < 2 {
        return Err(Error::insufficient_segments(n));
    }
    let (n1, n0, n) = (n1 as f64, n0 as f64, n as f64);
    let product = 2.0 * n1 * n0;
    let variance = finite(
        product * (product - n) / (n * n * (n - 1.0)),
        "run count variance",
    )?;
    if variance < 0.0 {
        return Err(Error::Computation(format!(
            "negative run count variance {variance} for N1 = {n1}, N0 = {n0}"
        )));
    }
    Ok(variance)
}

fn finite(value: f64, context: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::non_finite(context))
    }
}
