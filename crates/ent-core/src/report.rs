//! Finalized statistics for one stream.

use serde::Serialize;
use std::f64::consts::PI;

use crate::accumulate::SymbolCounts;
use crate::mode::Mode;

/// Tail probabilities below this are reported as a bound.
pub const TAIL_FLOOR: f64 = 0.0001;
/// Tail probabilities above this are reported as a bound.
pub const TAIL_CEILING: f64 = 0.9999;

/// Everything computed from a single pass over the input.
#[derive(Debug, Clone, Serialize)]
pub struct EntReport {
    pub mode: Mode,
    /// Input bytes consumed.
    pub bytes: u64,
    /// Symbols analyzed (n). Equals `bytes` in byte mode, `8 · bytes` in bit mode.
    pub symbols: u64,
    pub counts: SymbolCounts,
    /// Shannon entropy, bits per symbol.
    pub entropy: f64,
    pub chi_square: f64,
    /// `P(X² ≥ chi_square)` with `A - 1` degrees of freedom.
    pub chi_square_p: f64,
    /// Arithmetic mean of symbol values; 0 for an empty stream.
    pub mean: f64,
    /// `None` until at least one full six-byte pair was seen.
    pub monte_carlo_pi: Option<f64>,
    pub monte_carlo_pairs: u64,
    pub monte_carlo_in_circle: u64,
    /// Circular lag-1 correlation; `None` when all symbols are equal.
    pub serial_correlation: Option<f64>,
}

/// How a chi-square tail probability is phrased.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChiSquareBucket {
    /// p < 0.0001
    Below,
    /// p > 0.9999
    Above,
    /// Percentage, `p · 100`.
    Within(f64),
}

impl EntReport {
    /// Relative error of the pi estimate against π, in percent.
    pub fn pi_error_percent(&self) -> Option<f64> {
        self.monte_carlo_pi.map(|pi| 100.0 * (PI - pi).abs() / PI)
    }

    pub fn chi_square_bucket(&self) -> ChiSquareBucket {
        let p = self.chi_square_p;
        if p < TAIL_FLOOR {
            ChiSquareBucket::Below
        } else if p > TAIL_CEILING {
            ChiSquareBucket::Above
        } else {
            ChiSquareBucket::Within(p * 100.0)
        }
    }
}
