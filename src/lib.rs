//! # nnst
//!
//! Non-stationarity index of sampled signals.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`core`]: error type and numeric helpers shared by the analysis
//! - [`stationarity`]: windowing, segment statistics, run test and calibration
//!
//! ```rust
//! use nnst::prelude::*;
//!
//! let signal: Vec<f64> = (0..4000).map(|i| ((i * 37) % 101) as f64 / 101.0).collect();
//! let result = calc(&signal, &NnstParameters::new(200.0)).unwrap();
//! assert!((0.0..=100.0).contains(&result.index()));
//! ```

pub use nnst_core as core;
pub use nnst_stationarity as stationarity;

pub use nnst_core::{Error, Result};
pub use nnst_stationarity::{calc, NnstAnalyzer, NnstParameters, NnstResult, Verdict};

/// Commonly used items
pub mod prelude {
    pub use nnst_core::{Error, Result};
    pub use nnst_stationarity::{
        calc, ConfidenceLevel, NnstAnalyzer, NnstParameters, NnstResult, NnstVisualizer,
        NullNnstVisualizer, PlotData, StationarityAnalyzer, StationarityAnalyzerProperties,
        Verdict,
    };
}
