//! # ent-core
//!
//! Single-pass randomness metrics over a byte stream: Shannon entropy, the
//! chi-square statistic with its tail probability, arithmetic mean, a Monte
//! Carlo estimate of π, and the serial correlation coefficient.
//!
//! ## Quick Start
//!
//! ```
//! use ent_core::{Mode, analyze};
//!
//! let data: Vec<u8> = (0..=255).collect();
//! let report = analyze(&data, Mode::Byte);
//!
//! assert!((report.entropy - 8.0).abs() < 1e-9);
//! assert_eq!(report.chi_square, 0.0);
//! assert_eq!(report.mean, 127.5);
//! ```
//!
//! ## Architecture
//!
//! Bytes → [`Symbolizer`] → accumulators → [`EntReport`]
//!
//! - **Byte** mode analyzes 256 symbols, one per byte.
//! - **Bit** mode analyzes 2 symbols, eight per byte, least significant bit
//!   first.
//!
//! Monte Carlo coordinates are always assembled from whole bytes, so the π
//! estimate is identical in both modes. The engine keeps O(A) state and
//! never buffers input; reading, case folding, and report formatting belong
//! to the caller.

pub mod accumulate;
pub mod analyzer;
pub mod chisq;
pub mod mode;
pub mod report;
pub mod symbolizer;

pub use accumulate::{MonteCarloState, SerialCorrelationState, SymbolCounts};
pub use analyzer::{Analyzer, analyze};
pub use chisq::chi_square_tail;
pub use mode::Mode;
pub use report::{ChiSquareBucket, EntReport, TAIL_CEILING, TAIL_FLOOR};
pub use symbolizer::Symbolizer;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
