//! Common types used in non-stationarity analysis

use nnst_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-sided confidence level of the run test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// 90% (alpha = 1.645)
    P90,

    /// 95% (alpha = 1.96)
    #[default]
    P95,

    /// 98% (alpha = 2.326)
    P98,

    /// 99% (alpha = 2.576)
    P99,
}

impl ConfidenceLevel {
    /// All supported levels, narrowest interval first
    pub const ALL: [ConfidenceLevel; 4] = [Self::P90, Self::P95, Self::P98, Self::P99];

    /// Look up a level by its percentage. Unsupported levels are an error.
    pub fn from_percent(percent: u32) -> Result<Self> {
        match percent {
            90 => Ok(Self::P90),
            95 => Ok(Self::P95),
            98 => Ok(Self::P98),
            99 => Ok(Self::P99),
            other => Err(Error::invalid_confidence(other)),
        }
    }

    /// The level as a percentage
    pub fn percent(self) -> u32 {
        match self {
            Self::P90 => 90,
            Self::P95 => 95,
            Self::P98 => 98,
            Self::P99 => 99,
        }
    }

    /// Standard normal critical value for this level
    pub fn alpha(self) -> f64 {
        match self {
            Self::P90 => 1.645,
            Self::P95 => 1.96,
            Self::P98 => 2.326,
            Self::P99 => 2.576,
        }
    }
}

impl TryFrom<u32> for ConfidenceLevel {
    type Error = Error;

    fn try_from(percent: u32) -> Result<Self> {
        Self::from_percent(percent)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Parameters for non-stationarity analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NnstParameters {
    /// Sampling frequency in Hz
    pub sampling_frequency: f64,

    /// Length of one window in seconds
    pub window_duration: f64,

    /// Fraction of a window shared with the previous one, in [0, 1)
    pub overlap: f64,

    /// Confidence level of the run test
    pub confidence: ConfidenceLevel,
}

impl NnstParameters {
    /// Parameters for a signal sampled at `sampling_frequency` Hz, with
    /// 2 second windows, no overlap and 95% confidence.
    pub fn new(sampling_frequency: f64) -> Self {
        Self {
            sampling_frequency,
            window_duration: 2.0,
            overlap: 0.0,
            confidence: ConfidenceLevel::P95,
        }
    }

    /// Set the window duration in seconds
    pub fn with_window_duration(mut self, seconds: f64) -> Self {
        self.window_duration = seconds;
        self
    }

    /// Set the overlap fraction
    pub fn with_overlap(mut self, overlap: f64) -> Self {
        self.overlap = overlap;
        self
    }

    /// Set the confidence level
    pub fn with_confidence(mut self, confidence: ConfidenceLevel) -> Self {
        self.confidence = confidence;
        self
    }

    /// Sampling interval in seconds
    pub fn dt(&self) -> f64 {
        1.0 / self.sampling_frequency
    }

    /// Check every parameter and their combination.
    pub fn validate(&self) -> Result<()> {
        let fs = self.sampling_frequency;
        if !fs.is_finite() || fs <= 0.0 {
            return Err(Error::Configuration(format!(
                "sampling frequency must be positive and finite, got {fs}"
            )));
        }

        let min_duration = 2.0 * self.dt();
        if !self.window_duration.is_finite() || self.window_duration <= min_duration {
            return Err(Error::Configuration(format!(
                "window duration must exceed 2/fs = {min_duration}s, got {}s",
                self.window_duration
            )));
        }

        if !self.overlap.is_finite() || !(0.0..1.0).contains(&self.overlap) {
            return Err(Error::Configuration(format!(
                "overlap must be in [0, 1), got {}",
                self.overlap
            )));
        }

        Ok(())
    }
}

/// Outcome of the run test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Observed runs fall inside the confidence interval
    Stationary,

    /// Observed runs fall outside the confidence interval
    NonStationary,
}

impl Verdict {
    /// Human-readable outcome, as shown in plot titles
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Stationary => "Stationary signal",
            Verdict::NonStationary => "Non-stationary signal",
        }
    }

    pub fn is_stationary(self) -> bool {
        matches!(self, Verdict::Stationary)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
