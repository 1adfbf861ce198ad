//! Running accumulators updated once per symbol (or per byte).
//!
//! Three independent pieces of state make up an analysis:
//!
//! - [`SymbolCounts`]: the frequency histogram over the symbol alphabet.
//! - [`MonteCarloState`]: byte-aligned assembly of 24-bit (x, y) coordinates
//!   for the quarter-circle pi estimate. Always fed whole input bytes, even
//!   in bit mode.
//! - [`SerialCorrelationState`]: exact sums for the circular lag-1
//!   correlation over the symbol stream.
//!
//! Memory is O(A) for the histogram and O(1) for everything else.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Frequency
// ---------------------------------------------------------------------------

/// Occurrence count for each symbol value `0..A`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolCounts {
    bins: Vec<u64>,
    total: u64,
}

impl SymbolCounts {
    pub fn new(alphabet_size: usize) -> Self {
        Self {
            bins: vec![0; alphabet_size],
            total: 0,
        }
    }

    /// Count one occurrence. Symbols outside the alphabet are ignored and
    /// leave the total unchanged.
    pub fn record(&mut self, symbol: u8) {
        if let Some(bin) = self.bins.get_mut(usize::from(symbol)) {
            *bin += 1;
            self.total += 1;
        }
    }

    /// Count for `symbol`, zero when outside the alphabet.
    pub fn get(&self, symbol: usize) -> u64 {
        self.bins.get(symbol).copied().unwrap_or(0)
    }

    /// Total symbols recorded (n).
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn alphabet_size(&self) -> usize {
        self.bins.len()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.bins
    }

    /// `(symbol, count)` for every symbol in the alphabet, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.bins.iter().copied().enumerate()
    }
}

// ---------------------------------------------------------------------------
// Monte Carlo pi
// ---------------------------------------------------------------------------

/// Bytes per coordinate. Six bytes make one (x, y) pair.
const COORD_BYTES: u8 = 3;

/// 2^24: maps a 24-bit coordinate into [0, 1).
const COORD_SCALE: f64 = 16_777_216.0;

/// Partial and completed state of the quarter-circle estimator.
#[derive(Debug, Clone, Default)]
pub struct MonteCarloState {
    accum: u32,
    bytes_in_coord: u8,
    awaiting_y: bool,
    x: f64,
    pairs: u64,
    in_circle: u64,
}

impl MonteCarloState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift one big-endian byte into the current coordinate.
    pub fn push_byte(&mut self, byte: u8) {
        self.accum = (self.accum << 8) | u32::from(byte);
        self.bytes_in_coord += 1;
        if self.bytes_in_coord < COORD_BYTES {
            return;
        }

        let coord = f64::from(self.accum) / COORD_SCALE;
        self.accum = 0;
        self.bytes_in_coord = 0;

        if self.awaiting_y {
            // 24-bit fractions square exactly in f64.
            if self.x * self.x + coord * coord <= 1.0 {
                self.in_circle += 1;
            }
            self.pairs += 1;
        } else {
            self.x = coord;
        }
        self.awaiting_y = !self.awaiting_y;
    }

    /// Completed (x, y) pairs.
    pub fn pairs(&self) -> u64 {
        self.pairs
    }

    /// Completed pairs with x² + y² ≤ 1.
    pub fn in_circle(&self) -> u64 {
        self.in_circle
    }

    /// Bytes belonging to an unfinished pair. These never contribute.
    pub fn pending_bytes(&self) -> u8 {
        let x_bytes = if self.awaiting_y { COORD_BYTES } else { 0 };
        x_bytes + self.bytes_in_coord
    }

    /// `4 · in_circle / pairs`, or `None` before the first complete pair.
    pub fn estimate(&self) -> Option<f64> {
        if self.pairs == 0 {
            None
        } else {
            Some(4.0 * self.in_circle as f64 / self.pairs as f64)
        }
    }
}

// ---------------------------------------------------------------------------
// Serial correlation
// ---------------------------------------------------------------------------

/// Exact integer sums for the lag-1 correlation over the symbol ring.
///
/// Symbols are at most 255, so `u128` sums cannot overflow for any stream a
/// `u64` counter can describe.
#[derive(Debug, Clone, Default)]
pub struct SerialCorrelationState {
    count: u64,
    sum: u128,
    sum_sq: u128,
    sum_cross: u128,
    first: u8,
    last: u8,
}

impl SerialCorrelationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_symbol(&mut self, symbol: u8) {
        let v = u128::from(symbol);
        if self.count == 0 {
            self.first = symbol;
        } else {
            self.sum_cross += u128::from(self.last) * v;
        }
        self.sum += v;
        self.sum_sq += v * v;
        self.last = symbol;
        self.count += 1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Circular cross-sum Σ x_i · x_{(i+1) mod n}, ring closed on the fly.
    fn ring_cross_sum(&self) -> u128 {
        self.sum_cross + u128::from(self.last) * u128::from(self.first)
    }

    /// `(n·Scp − S1²) / (n·S2 − S1²)`, or `None` when every symbol is equal.
    pub fn coefficient(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        let cross = self.ring_cross_sum();
        match exact_terms(self.count, self.sum, self.sum_sq, cross) {
            Some((_, 0)) => None,
            Some((num, den)) => Some(num as f64 / den as f64),
            None => {
                let n = self.count as f64;
                let s1 = self.sum as f64;
                let den = n * self.sum_sq as f64 - s1 * s1;
                if den <= 0.0 {
                    None
                } else {
                    Some((n * cross as f64 - s1 * s1) / den)
                }
            }
        }
    }
}

/// Numerator and denominator in `i128`, `None` if either overflows.
fn exact_terms(count: u64, sum: u128, sum_sq: u128, cross: u128) -> Option<(i128, i128)> {
    let n = i128::from(count);
    let s1 = i128::try_from(sum).ok()?;
    let s2 = i128::try_from(sum_sq).ok()?;
    let scp = i128::try_from(cross).ok()?;
    let s1_sq = s1.checked_mul(s1)?;
    let num = n.checked_mul(scp)?.checked_sub(s1_sq)?;
    let den = n.checked_mul(s2)?.checked_sub(s1_sq)?;
    Some((num, den))
}
