//! Per-segment and whole-signal dispersion statistics

use crate::windowing::WindowPlan;
use nnst_core::{mean, sample_std, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Statistics of the entire signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalStatistics {
    count: usize,
    sampling_frequency: f64,
    mean: f64,
    std_dev: f64,
}

impl SignalStatistics {
    /// Mean and Bessel-corrected standard deviation of `signal`.
    pub fn compute(signal: &[f64], sampling_frequency: f64) -> Result<Self> {
        Ok(Self {
            count: signal.len(),
            sampling_frequency,
            mean: mean(signal)?,
            std_dev: sample_std(signal)?,
        })
    }

    /// Number of samples
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sampling_frequency(&self) -> f64 {
        self.sampling_frequency
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Bessel-corrected standard deviation
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Time of the last sample, in seconds
    pub fn last_sample_time(&self) -> f64 {
        self.count.saturating_sub(1) as f64 / self.sampling_frequency
    }

    /// Sample times `i / fs` for every sample
    pub fn time_vector(&self) -> Vec<f64> {
        (0..self.count)
            .map(|i| i as f64 / self.sampling_frequency)
            .collect()
    }
}

/// Dispersion and location of every segment, in segment order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentStatistics {
    std_devs: Vec<f64>,
    means: Vec<f64>,
}

impl SegmentStatistics {
    /// Compute the statistics of every segment in `plan`.
    ///
    /// A segment shorter than two samples has no sample standard deviation
    /// and fails the computation.
    pub fn compute(signal: &[f64], plan: &WindowPlan) -> Result<Self> {
        if signal.len() != plan.signal_len() {
            return Err(Error::InvalidInput(format!(
                "window plan covers {} samples but the signal has {}",
                plan.signal_len(),
                signal.len()
            )));
        }

        let mut std_devs = Vec::with_capacity(plan.segment_count());
        let mut means = Vec::with_capacity(plan.segment_count());

        for (i, range) in plan.ranges().iter().enumerate() {
            let segment = &signal[range.clone()];
            let std = sample_std(segment).map_err(|e| match e {
                Error::Computation(msg) => {
                    Error::Computation(format!("segment {i} ({range:?}): {msg}"))
                }
                other => other,
            })?;
            std_devs.push(std);
            means.push(mean(segment)?);
        }

        debug!(segments = std_devs.len(), "segment statistics");
        Ok(Self { std_devs, means })
    }

    /// Bessel-corrected standard deviation of each segment
    pub fn std_devs(&self) -> &[f64] {
        &self.std_devs
    }

    /// Mean of each segment
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    pub fn len(&self) -> usize {
        self.std_devs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.std_devs.is_empty()
    }
}
