//! # Non-stationarity Index
//!
//! This crate decides whether a sampled signal behaves like a single
//! stationary process by looking at how its local variance moves. It
//! implements a run test over segment dispersions:
//!
//! 1. **Windowing**: cut the signal into consecutive segments
//! 2. **Segment statistics**: standard deviation of every segment
//! 3. **Boundaries**: band of ± one dispersion-of-dispersions around the
//!    whole-signal standard deviation
//! 4. **Runs**: label segments in/out of the band and count label changes
//! 5. **Calibration**: compare the run count with its distribution under
//!    stationarity to get an index (0–100) and a verdict
//!
//! ## Usage
//!
//! ```rust
//! use nnst_stationarity::{calc, ConfidenceLevel, NnstParameters};
//!
//! // 20 seconds at 50 Hz of a signal whose amplitude grows over time
//! let signal: Vec<f64> = (0..1000)
//!     .map(|i| (i as f64 * 0.7).sin() * (1.0 + i as f64 / 100.0))
//!     .collect();
//!
//! let params = NnstParameters::new(50.0)
//!     .with_window_duration(2.0)
//!     .with_confidence(ConfidenceLevel::P95);
//! let result = calc(&signal, &params).unwrap();
//!
//! println!("Index: {}% ({})", result.index(), result.outcome());
//! assert!(result.index() <= 100.0);
//! ```

pub mod analyzer;
pub mod boundaries;
pub mod calibration;
pub mod runs;
pub mod segments;
pub mod traits;
pub mod types;
pub mod visualization;
pub mod windowing;

// Re-exports
pub use analyzer::{calc, NnstAnalyzer};
pub use boundaries::Boundaries;
pub use calibration::Calibration;
pub use runs::{RunStatistics, SegmentLabel};
pub use segments::{SegmentStatistics, SignalStatistics};
pub use traits::{NnstResult, StationarityAnalyzer, StationarityAnalyzerProperties};
pub use types::{ConfidenceLevel, NnstParameters, Verdict};
pub use visualization::{NnstVisualizer, NullNnstVisualizer, PlotData};
pub use windowing::WindowPlan;
