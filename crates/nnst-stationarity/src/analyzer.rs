//! Segmentation and run-test analyzer

use crate::boundaries::Boundaries;
use crate::calibration::Calibration;
use crate::runs::RunStatistics;
use crate::segments::{SegmentStatistics, SignalStatistics};
use crate::traits::{NnstResult, StationarityAnalyzer, StationarityAnalyzerProperties};
use crate::types::NnstParameters;
use crate::visualization::{NnstVisualizer, NullNnstVisualizer};
use crate::windowing::{window_and_overlap_points, WindowPlan};
use nnst_core::{Error, Result};
use tracing::{debug, instrument, warn};

/// Non-stationarity analyzer based on a run test over segment dispersions
///
/// The signal is cut into segments, the standard deviation of each segment is
/// compared to a band around the whole-signal standard deviation, and the
/// number of in/out-of-band changes is tested against its distribution under
/// stationarity.
///
/// # Type Parameters
///
/// - `V`: The visualizer type that implements `NnstVisualizer`
#[derive(Debug, Clone)]
pub struct NnstAnalyzer<V: NnstVisualizer = NullNnstVisualizer> {
    params: NnstParameters,
    stride: usize,
    visualizer: V,
}

impl NnstAnalyzer<NullNnstVisualizer> {
    /// Create an analyzer with the null visualizer
    pub fn new(params: NnstParameters) -> Result<Self> {
        Self::with_visualizer(NullNnstVisualizer::new(), params)
    }
}

impl<V: NnstVisualizer> NnstAnalyzer<V> {
    /// Create an analyzer with a custom visualizer
    pub fn with_visualizer(visualizer: V, params: NnstParameters) -> Result<Self> {
        let (window_points, overlap_points) = window_and_overlap_points(&params)?;
        Ok(Self {
            params,
            stride: window_points - overlap_points,
            visualizer,
        })
    }

    pub fn parameters(&self) -> &NnstParameters {
        &self.params
    }

    pub fn visualizer(&self) -> &V {
        &self.visualizer
    }

    /// Samples between consecutive segment starts
    pub fn stride(&self) -> usize {
        self.stride
    }

    fn check_signal(signal: &[f64]) -> Result<()> {
        if signal.is_empty() {
            return Err(Error::empty_input());
        }
        if let Some((i, v)) = signal.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidInput(format!("sample {i} is not finite ({v})")));
        }
        Ok(())
    }

    fn notify(&self, stage: &str, outcome: Result<()>) {
        if let Err(e) = outcome {
            warn!(stage, error = %e, "visualizer failed");
        }
    }
}

impl<V: NnstVisualizer> StationarityAnalyzerProperties for NnstAnalyzer<V> {
    fn method_name(&self) -> &str {
        "Segment Dispersion Run Test"
    }

    fn minimum_samples(&self) -> usize {
        WindowPlan::minimum_signal_len(self.stride)
    }
}

impl<V: NnstVisualizer> StationarityAnalyzer for NnstAnalyzer<V> {
    #[instrument(skip_all, fields(samples = signal.len(), confidence = %self.params.confidence))]
    fn analyze(&self, signal: &[f64]) -> Result<NnstResult> {
        Self::check_signal(signal)?;

        let plan = WindowPlan::new(&self.params, signal.len())?;
        let stats = SignalStatistics::compute(signal, self.params.sampling_frequency)?;
        let segments = SegmentStatistics::compute(signal, &plan)?;
        let boundaries = Boundaries::compute(stats.std_dev(), segments.std_devs())?;
        let runs = RunStatistics::classify(segments.std_devs(), &boundaries)?;
        let calibration = Calibration::compute(&runs, self.params.confidence)?;

        debug!(
            mean = stats.mean(),
            std_dev = stats.std_dev(),
            index = calibration.index(),
            verdict = %calibration.verdict(),
            "analysis complete"
        );

        if self.visualizer.is_enabled() {
            let viz = &self.visualizer;
            self.notify("signal", viz.record_signal(&stats.time_vector(), signal));
            self.notify("signal statistics", viz.record_signal_statistics(&stats));
            self.notify("segments", viz.record_segments(&segments));
            self.notify("boundaries", viz.record_boundaries(&boundaries));
            self.notify(
                "outcome",
                viz.record_outcome(calibration.index(), calibration.verdict(), calibration.limits_pct()),
            );
        }

        Ok(NnstResult::new(
            self.params,
            plan,
            stats,
            segments,
            boundaries,
            runs,
            calibration,
            self.method_name().to_string(),
        ))
    }
}

/// Run the full analysis on `signal` with `params`.
pub fn calc(signal: &[f64], params: &NnstParameters) -> Result<NnstResult> {
    NnstAnalyzer::new(*params)?.analyze(signal)
}
