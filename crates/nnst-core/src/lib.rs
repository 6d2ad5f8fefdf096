//! Core error type and statistical helpers for non-stationarity analysis
//!
//! Everything here is a pure function over borrowed samples. The pipeline
//! stages themselves live in `nnst-stationarity`.
//!
//! # Example
//!
//! ```rust
//! use nnst_core::math::descriptive::{mean, sample_std};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let m = mean(&data).unwrap();
//! let s = sample_std(&data).unwrap();
//!
//! assert_eq!(m, 3.0);
//! assert!((s - 2.5f64.sqrt()).abs() < 1e-12);
//! ```

pub mod error;
pub mod math;

// Re-export core types
pub use error::{Error, Result};
pub use math::descriptive::{mean, round_to, sample_std};
