//! Division of a signal into consecutive segments
//!
//! Each segment spans `stride` samples starting at `i * stride`, where the
//! stride is the window length minus the overlap. When the signal length is
//! not a multiple of the stride, the leftover samples form one shorter
//! trailing segment. A leftover of a single sample is dropped because its
//! dispersion is undefined.

use crate::types::NnstParameters;
use nnst_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::debug;

/// Concrete segmentation of a signal of known length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPlan {
    window_points: usize,
    overlap_points: usize,
    stride: usize,
    signal_len: usize,
    nominal_segment_count: usize,
    residual: usize,
    ranges: Vec<Range<usize>>,
}

impl WindowPlan {
    /// Segment a signal of `signal_len` samples.
    ///
    /// Fails with a configuration error for invalid parameters and with an
    /// insufficient-data error when fewer than two usable segments result.
    pub fn new(params: &NnstParameters, signal_len: usize) -> Result<Self> {
        let (window_points, overlap_points) = window_and_overlap_points(params)?;
        let stride = window_points - overlap_points;

        let full = signal_len / stride;
        let residual = signal_len % stride;
        let ranges = segment_ranges(signal_len, stride);

        let plan = Self {
            window_points,
            overlap_points,
            stride,
            signal_len,
            nominal_segment_count: full + usize::from(residual != 0),
            residual,
            ranges,
        };

        debug!(
            window_points,
            overlap_points,
            stride,
            segments = plan.segment_count(),
            residual,
            "window plan"
        );

        if plan.segment_count() < 2 {
            return Err(Error::insufficient_segments(plan.segment_count()));
        }
        Ok(plan)
    }

    /// Samples per window, `floor(fs * window_duration)`
    pub fn window_points(&self) -> usize {
        self.window_points
    }

    /// Samples shared with the previous window
    pub fn overlap_points(&self) -> usize {
        self.overlap_points
    }

    /// Distance in samples between consecutive segment starts
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn signal_len(&self) -> usize {
        self.signal_len
    }

    /// `ceil(signal_len / stride)`, counting a single-sample residual
    pub fn nominal_segment_count(&self) -> usize {
        self.nominal_segment_count
    }

    /// Number of usable segments
    pub fn segment_count(&self) -> usize {
        self.ranges.len()
    }

    /// `signal_len mod stride`
    pub fn residual(&self) -> usize {
        self.residual
    }

    /// True when the last segment is a shorter residual segment
    pub fn has_residual_segment(&self) -> bool {
        self.residual > 1
    }

    /// Samples not covered by any segment
    pub fn dropped_samples(&self) -> usize {
        usize::from(self.residual == 1)
    }

    /// Index ranges of the usable segments, in signal order
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Shortest signal that yields two usable segments for a given stride
    pub fn minimum_signal_len(stride: usize) -> usize {
        stride.saturating_add(stride.min(2))
    }
}

/// Window and overlap lengths in samples for validated parameters.
pub fn window_and_overlap_points(params: &NnstParameters) -> Result<(usize, usize)> {
    params.validate()?;

    let points = (params.sampling_frequency * params.window_duration).floor();
    if points >= usize::MAX as f64 {
        return Err(Error::Configuration(format!(
            "window of {points} samples exceeds the addressable signal length"
        )));
    }
    let window_points = points as usize;
    let overlap_points = (window_points as f64 * params.overlap).floor() as usize;
    if window_points - overlap_points.min(window_points) < 2 {
        return Err(Error::Configuration(format!(
            "overlap of {overlap_points} samples in a {window_points}-sample window leaves a stride \
             below 2 samples, so no segment has a defined dispersion"
        )));
    }
    Ok((window_points, overlap_points))
}

/// Index ranges `[i * stride, (i + 1) * stride)` covering `signal_len`
/// samples, plus a trailing `[signal_len - residual, signal_len)` range when
/// the residual holds more than one sample.
pub fn segment_ranges(signal_len: usize, stride: usize) -> Vec<Range<usize>> {
    debug_assert!(stride > 0);
    let full = signal_len / stride;
    let residual = signal_len % stride;

    let mut ranges: Vec<Range<usize>> = (0..full).map(|i| i * stride..(i + 1) * stride).collect();
    if residual > 1 {
        ranges.push(signal_len - residual..signal_len);
    }
    ranges
}
