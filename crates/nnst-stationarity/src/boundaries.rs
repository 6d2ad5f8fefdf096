//! Acceptance band for segment dispersions

use nnst_core::{sample_std, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Absolute-amplitude band `reference_std ± dispersion_of_dispersions`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundaries {
    reference_std: f64,
    dispersion_of_dispersions: f64,
    lower: f64,
    upper: f64,
}

impl Boundaries {
    /// Center the band on the whole-signal standard deviation, with a
    /// half-width equal to the sample standard deviation of the segment
    /// dispersions.
    pub fn compute(signal_std: f64, segment_stds: &[f64]) -> Result<Self> {
        if segment_stds.len() < 2 {
            return Err(Error::insufficient_segments(segment_stds.len()));
        }
        if !signal_std.is_finite() {
            return Err(Error::non_finite("signal standard deviation"));
        }

        let dispersion_of_dispersions = sample_std(segment_stds)?;
        let bounds = Self {
            reference_std: signal_std,
            dispersion_of_dispersions,
            lower: signal_std - dispersion_of_dispersions,
            upper: signal_std + dispersion_of_dispersions,
        };

        debug!(
            lower = bounds.lower,
            upper = bounds.upper,
            dispersion_of_dispersions,
            "boundaries"
        );
        Ok(bounds)
    }

    /// Whole-signal standard deviation the band is centered on
    pub fn reference_std(&self) -> f64 {
        self.reference_std
    }

    /// Half-width of the band
    pub fn dispersion_of_dispersions(&self) -> f64 {
        self.dispersion_of_dispersions
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Strictly above the upper bound or strictly below the lower bound
    pub fn is_out_of_bounds(&self, value: f64) -> bool {
        value > self.upper || value < self.lower
    }
}
