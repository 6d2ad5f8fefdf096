//! Segment labelling and run counting
//!
//! Each segment is labelled in-bounds or out-of-bounds against the
//! [`Boundaries`]. A run here is a change of label between two consecutive
//! segments, so a sequence of `n` labels has at most `n - 1` runs.

use crate::boundaries::Boundaries;
use nnst_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Classification of one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentLabel {
    /// Dispersion inside the band (label 0)
    InBounds,

    /// Dispersion outside the band (label 1)
    OutOfBounds,
}

impl SegmentLabel {
    pub fn classify(dispersion: f64, bounds: &Boundaries) -> Self {
        if bounds.is_out_of_bounds(dispersion) {
            SegmentLabel::OutOfBounds
        } else {
            SegmentLabel::InBounds
        }
    }

    /// 1 for out-of-bounds, 0 for in-bounds
    pub fn as_bit(self) -> u8 {
        match self {
            SegmentLabel::InBounds => 0,
            SegmentLabel::OutOfBounds => 1,
        }
    }
}

/// Labels and run counts for one signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    labels: Vec<SegmentLabel>,
    out_of_bounds: usize,
    in_bounds: usize,
    observed_runs: usize,
}

impl RunStatistics {
    /// Label every segment dispersion and count the runs.
    pub fn classify(segment_stds: &[f64], bounds: &Boundaries) -> Result<Self> {
        let labels = segment_stds
            .iter()
            .map(|&s| SegmentLabel::classify(s, bounds))
            .collect();
        Self::from_labels(labels)
    }

    /// Count runs over an existing label sequence.
    pub fn from_labels(labels: Vec<SegmentLabel>) -> Result<Self> {
        if labels.len() < 2 {
            return Err(Error::insufficient_segments(labels.len()));
        }

        let out_of_bounds = labels
            .iter()
            .filter(|&&l| l == SegmentLabel::OutOfBounds)
            .count();
        let stats = Self {
            out_of_bounds,
            in_bounds: labels.len() - out_of_bounds,
            observed_runs: count_transitions(&labels),
            labels,
        };

        debug!(
            n1 = stats.out_of_bounds,
            n0 = stats.in_bounds,
            runs = stats.observed_runs,
            "run statistics"
        );
        Ok(stats)
    }

    pub fn labels(&self) -> &[SegmentLabel] {
        &self.labels
    }

    /// Number of out-of-bounds segments (`N1`)
    pub fn out_of_bounds(&self) -> usize {
        self.out_of_bounds
    }

    /// Number of in-bounds segments (`N0`)
    pub fn in_bounds(&self) -> usize {
        self.in_bounds
    }

    /// Total number of segments (`N`)
    pub fn total(&self) -> usize {
        self.labels.len()
    }

    /// Number of label changes between consecutive segments (`Nr`)
    pub fn observed_runs(&self) -> usize {
        self.observed_runs
    }
}

/// Number of indices `i > 0` with `labels[i] != labels[i - 1]`
pub fn count_transitions(labels: &[SegmentLabel]) -> usize {
    labels.windows(2).filter(|w| w[0] != w[1]).count()
}
