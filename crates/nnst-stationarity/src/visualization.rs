//! Visualization interface for non-stationarity analysis
//!
//! The analyzer calls a [`NnstVisualizer`] at each stage so a plotting
//! layer can record the data it needs. Nothing here renders anything.
//!
//! # Example Implementation
//!
//! ```rust,ignore
//! use nnst_stationarity::visualization::{NnstVisualizer, NullNnstVisualizer};
//! use nnst_stationarity::NnstAnalyzer;
//!
//! // Null visualizer (default - no overhead)
//! let analyzer = NnstAnalyzer::new(params)?;
//!
//! // Or a custom visualizer
//! struct MyVisualizer { /* ... */ }
//! impl NnstVisualizer for MyVisualizer { /* ... */ }
//!
//! let analyzer = NnstAnalyzer::with_visualizer(MyVisualizer::new(), params)?;
//! ```

use crate::boundaries::Boundaries;
use crate::segments::{SegmentStatistics, SignalStatistics};
use crate::traits::NnstResult;
use crate::types::Verdict;
use nnst_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Receives the intermediate data of an analysis
pub trait NnstVisualizer: Send + Sync {
    /// Record the raw input signal and its sample times
    fn record_signal(&self, time: &[f64], signal: &[f64]) -> Result<()>;

    /// Record whole-signal statistics
    fn record_signal_statistics(&self, stats: &SignalStatistics) -> Result<()>;

    /// Record per-segment dispersions
    fn record_segments(&self, segments: &SegmentStatistics) -> Result<()>;

    /// Record the acceptance band
    fn record_boundaries(&self, boundaries: &Boundaries) -> Result<()>;

    /// Record the final index and verdict
    fn record_outcome(&self, index: f64, verdict: Verdict, limits: [f64; 2]) -> Result<()>;

    /// Whether the visualizer wants data at all
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Visualizer that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNnstVisualizer;

impl NullNnstVisualizer {
    pub fn new() -> Self {
        Self
    }
}

impl NnstVisualizer for NullNnstVisualizer {
    #[inline(always)]
    fn record_signal(&self, _time: &[f64], _signal: &[f64]) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_signal_statistics(&self, _stats: &SignalStatistics) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_segments(&self, _segments: &SegmentStatistics) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_boundaries(&self, _boundaries: &Boundaries) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_outcome(&self, _index: f64, _verdict: Verdict, _limits: [f64; 2]) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn is_enabled(&self) -> bool {
        false
    }
}

/// Series for the standard overview plot: the signal, the segment-wise
/// dispersion curve, the global standard deviation and both boundaries.
///
/// Dispersion lines are offset by the signal mean so they sit on the signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    /// Sample times in seconds
    pub time: Vec<f64>,

    /// Signal samples
    pub signal: Vec<f64>,

    /// Evenly spaced times for the segment curve, first to last sample
    pub segment_times: Vec<f64>,

    /// `mean + segment_std`
    pub segment_curve: Vec<f64>,

    /// `mean + std`
    pub std_line: f64,

    /// `mean + lower boundary`
    pub lower_line: f64,

    /// `mean + upper boundary`
    pub upper_line: f64,

    /// Time span of the horizontal lines
    pub span: (f64, f64),

    /// Index and verdict, two lines
    pub title: String,
}

impl PlotData {
    /// Assemble plot series from a result and the signal it was computed on.
    pub fn new(result: &NnstResult, signal: &[f64]) -> Result<Self> {
        if signal.len() != result.sample_count() {
            return Err(Error::InvalidInput(format!(
                "result covers {} samples but the signal has {}",
                result.sample_count(),
                signal.len()
            )));
        }

        let stats = result.signal_statistics();
        let mean = stats.mean();
        let end = stats.last_sample_time();
        let bounds = result.boundaries();

        Ok(Self {
            time: stats.time_vector(),
            signal: signal.to_vec(),
            segment_times: linspace(0.0, end, result.segment_std().len()),
            segment_curve: result.segment_std().iter().map(|s| mean + s).collect(),
            std_line: mean + stats.std_dev(),
            lower_line: mean + bounds.lower(),
            upper_line: mean + bounds.upper(),
            span: (0.0, end),
            title: format!("Index: {}%\n{}", result.index(), result.outcome()),
        })
    }
}

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_null_visualizer_is_disabled() {
        let viz = NullNnstVisualizer::new();
        assert!(!viz.is_enabled());
        assert!(viz.record_signal(&[0.0], &[1.0]).is_ok());
        assert!(viz.record_outcome(50.0, Verdict::Stationary, [70.0, 130.0]).is_ok());
    }
}
