//! Core traits for non-stationarity analysis
//!
//! An analyzer turns a complete, in-memory signal into an [`NnstResult`].
//! Analyzers hold only their validated parameters, so a single instance can
//! be shared across threads and reused for any number of signals.
//!
//! ```ignore
//! let analyzer = NnstAnalyzer::new(NnstParameters::new(400.0))?;
//! let result = analyzer.analyze(&signal)?;
//! println!("{}% ({})", result.index(), result.outcome());
//! ```

use crate::boundaries::Boundaries;
use crate::calibration::Calibration;
use crate::runs::RunStatistics;
use crate::segments::{SegmentStatistics, SignalStatistics};
use crate::types::{NnstParameters, Verdict};
use crate::windowing::WindowPlan;
use nnst_core::Result;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Intrinsic properties of an analyzer that don't depend on the signal
pub trait StationarityAnalyzerProperties {
    /// Get the name of the analysis method
    fn method_name(&self) -> &str;

    /// Shortest signal that yields a result with the current parameters
    fn minimum_samples(&self) -> usize;

    /// Check if the analyzer can handle the given sample size
    fn can_handle_size(&self, size: usize) -> bool {
        size >= self.minimum_samples()
    }
}

/// The main trait for stationarity analysis algorithms
pub trait StationarityAnalyzer: StationarityAnalyzerProperties {
    /// Analyze a complete signal
    fn analyze(&self, signal: &[f64]) -> Result<NnstResult>;
}

/// Result of one non-stationarity analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NnstResult {
    params: NnstParameters,
    plan: WindowPlan,
    signal: SignalStatistics,
    segments: SegmentStatistics,
    boundaries: Boundaries,
    runs: RunStatistics,
    calibration: Calibration,
    method: String,
}

impl NnstResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        params: NnstParameters,
        plan: WindowPlan,
        signal: SignalStatistics,
        segments: SegmentStatistics,
        boundaries: Boundaries,
        runs: RunStatistics,
        calibration: Calibration,
        method: String,
    ) -> Self {
        Self {
            params,
            plan,
            signal,
            segments,
            boundaries,
            runs,
            calibration,
            method,
        }
    }

    /// Non-stationarity index in percent, capped at 100
    pub fn index(&self) -> f64 {
        self.calibration.index()
    }

    pub fn verdict(&self) -> Verdict {
        self.calibration.verdict()
    }

    /// Verdict as display text
    pub fn outcome(&self) -> &'static str {
        self.verdict().as_str()
    }

    pub fn is_stationary(&self) -> bool {
        self.verdict().is_stationary()
    }

    /// `[lower, upper]` acceptance limits as percentages of the expected run count
    pub fn limits(&self) -> [f64; 2] {
        self.calibration.limits_pct()
    }

    /// Critical value of the chosen confidence level
    pub fn alpha(&self) -> f64 {
        self.calibration.alpha()
    }

    /// Number of samples analyzed
    pub fn sample_count(&self) -> usize {
        self.signal.count()
    }

    /// Sample times in seconds
    pub fn time_vector(&self) -> Vec<f64> {
        self.signal.time_vector()
    }

    /// Whole-signal Bessel-corrected standard deviation
    pub fn std_dev(&self) -> f64 {
        self.signal.std_dev()
    }

    /// Whole-signal mean
    pub fn mean(&self) -> f64 {
        self.signal.mean()
    }

    /// Number of label changes between consecutive segments
    pub fn run_count(&self) -> usize {
        self.runs.observed_runs()
    }

    /// Expected run count under stationarity
    pub fn expected_runs(&self) -> f64 {
        self.calibration.expected_runs()
    }

    /// Variance of the run count under stationarity
    pub fn run_variance(&self) -> f64 {
        self.calibration.run_variance()
    }

    /// Standard deviation of each segment
    pub fn segment_std(&self) -> &[f64] {
        self.segments.std_devs()
    }

    /// Index ranges of the segments
    pub fn segment_ranges(&self) -> &[Range<usize>] {
        self.plan.ranges()
    }

    pub fn parameters(&self) -> &NnstParameters {
        &self.params
    }

    pub fn window_plan(&self) -> &WindowPlan {
        &self.plan
    }

    pub fn signal_statistics(&self) -> &SignalStatistics {
        &self.signal
    }

    pub fn segments(&self) -> &SegmentStatistics {
        &self.segments
    }

    pub fn boundaries(&self) -> &Boundaries {
        &self.boundaries
    }

    pub fn runs(&self) -> &RunStatistics {
        &self.runs
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Method used for analysis
    pub fn method(&self) -> &str {
        &self.method
    }
}
