//! Single-pass driver: symbolizer, accumulators, and finalization.

use log::{debug, trace};

use crate::accumulate::{MonteCarloState, SerialCorrelationState, SymbolCounts};
use crate::chisq::chi_square_tail;
use crate::mode::Mode;
use crate::report::EntReport;
use crate::symbolizer::Symbolizer;

/// Streaming analysis of one byte sequence.
///
/// Feed bytes with [`ingest`](Self::ingest) or
/// [`ingest_slice`](Self::ingest_slice), then call
/// [`finalize`](Self::finalize) once the stream ends.
///
/// ```
/// use ent_core::{Analyzer, Mode};
///
/// let mut analyzer = Analyzer::new(Mode::Byte);
/// analyzer.ingest_slice(b"hello world");
/// let report = analyzer.finalize();
/// assert_eq!(report.symbols, 11);
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    symbolizer: Symbolizer,
    bytes: u64,
    counts: SymbolCounts,
    monte_carlo: MonteCarloState,
    serial: SerialCorrelationState,
}

impl Analyzer {
    pub fn new(mode: Mode) -> Self {
        Self {
            symbolizer: Symbolizer::new(mode),
            bytes: 0,
            counts: SymbolCounts::new(mode.alphabet_size()),
            monte_carlo: MonteCarloState::new(),
            serial: SerialCorrelationState::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.symbolizer.mode()
    }

    /// Consume one input byte.
    pub fn ingest(&mut self, byte: u8) {
        self.bytes += 1;
        for symbol in self.symbolizer.symbols(byte) {
            self.counts.record(symbol);
            self.serial.push_symbol(symbol);
        }
        self.monte_carlo.push_byte(byte);
    }

    pub fn ingest_slice(&mut self, data: &[u8]) {
        for &byte in data {
            self.ingest(byte);
        }
    }

    pub fn bytes_consumed(&self) -> u64 {
        self.bytes
    }

    pub fn symbols_consumed(&self) -> u64 {
        self.counts.total()
    }

    /// Close the stream and compute the published statistics.
    pub fn finalize(self) -> EntReport {
        let mode = self.mode();
        let n = self.counts.total();

        let pending = self.monte_carlo.pending_bytes();
        if pending > 0 {
            trace!("discarding {pending} bytes of an incomplete Monte Carlo pair");
        }

        let chi_square = chi_square(&self.counts);
        let chi_square_p = chi_square_tail(chi_square, mode.degrees_of_freedom());

        debug!(
            "finalize: mode={mode}, bytes={}, symbols={n}, pairs={}, in_circle={}",
            self.bytes,
            self.monte_carlo.pairs(),
            self.monte_carlo.in_circle()
        );

        EntReport {
            mode,
            bytes: self.bytes,
            symbols: n,
            entropy: entropy(&self.counts),
            chi_square,
            chi_square_p,
            mean: mean(&self.counts),
            monte_carlo_pi: self.monte_carlo.estimate(),
            monte_carlo_pairs: self.monte_carlo.pairs(),
            monte_carlo_in_circle: self.monte_carlo.in_circle(),
            serial_correlation: self.serial.coefficient(),
            counts: self.counts,
        }
    }
}

/// Analyze an in-memory buffer in one call.
pub fn analyze(data: &[u8], mode: Mode) -> EntReport {
    let mut analyzer = Analyzer::new(mode);
    analyzer.ingest_slice(data);
    analyzer.finalize()
}

// ---------------------------------------------------------------------------
// Finalization formulas
// ---------------------------------------------------------------------------

/// Shannon entropy in bits per symbol. Zero counts contribute nothing.
fn entropy(counts: &SymbolCounts) -> f64 {
    let n = counts.total();
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    let h: f64 = counts
        .iter()
        .filter(|&(_, c)| c > 0)
        .map(|(_, c)| {
            let p = c as f64 / n;
            -p * p.log2()
        })
        .sum();
    // A single populated bin sums to -0.0.
    if h > 0.0 { h } else { 0.0 }
}

/// Pearson statistic against the uniform distribution over the alphabet.
fn chi_square(counts: &SymbolCounts) -> f64 {
    let n = counts.total();
    if n == 0 {
        return 0.0;
    }
    let expected = n as f64 / counts.alphabet_size() as f64;
    counts
        .iter()
        .map(|(_, c)| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

fn mean(counts: &SymbolCounts) -> f64 {
    let n = counts.total();
    if n == 0 {
        return 0.0;
    }
    let total: u128 = counts
        .iter()
        .map(|(symbol, c)| symbol as u128 * u128::from(c))
        .sum();
    total as f64 / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn random_data_seeded(n: usize, seed: u64) -> Vec<u8> {
        let mut data = Vec::with_capacity(n);
        let mut state: u64 = seed;
        for _ in 0..n {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            data.push((state >> 33) as u8);
        }
        data
    }

    #[test]
    fn test_empty_stream() {
        let report = analyze(&[], Mode::Byte);
        assert_eq!(report.symbols, 0);
        assert_eq!(report.entropy, 0.0);
        assert_eq!(report.chi_square, 0.0);
        assert_eq!(report.chi_square_p, 1.0);
        assert_eq!(report.mean, 0.0);
        assert_eq!(report.monte_carlo_pi, None);
        assert_eq!(report.serial_correlation, None);
    }

    #[test]
    fn test_counts_follow_mode() {
        let mut a = Analyzer::new(Mode::Bit);
        a.ingest(0b0000_0111);
        assert_eq!(a.bytes_consumed(), 1);
        assert_eq!(a.symbols_consumed(), 8);
        let report = a.finalize();
        assert_eq!(report.counts.get(1), 3);
        assert_eq!(report.counts.get(0), 5);
    }

    #[test]
    fn test_entropy_of_two_equal_symbols() {
        let report = analyze(&[0, 1, 0, 1], Mode::Byte);
        assert!((report.entropy - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_symbol_chi_square() {
        let report = analyze(&[7u8; 100], Mode::Byte);
        assert_eq!(report.entropy, 0.0);
        assert!((report.chi_square - 100.0 * 255.0).abs() < 1e-6);
        assert_eq!(report.mean, 7.0);
        assert_eq!(report.serial_correlation, None);
    }

    #[test]
    fn test_random_data_looks_uniform() {
        let data = random_data_seeded(100_000, 0xdeadbeef);
        let report = analyze(&data, Mode::Byte);
        assert!(report.entropy > 7.99, "entropy = {}", report.entropy);
        assert!((report.mean - 127.5).abs() < 1.5);
        assert!(report.chi_square_p > 0.0001);
        let pi = report.monte_carlo_pi.unwrap();
        assert!((pi - std::f64::consts::PI).abs() < 0.1, "pi = {pi}");
        assert!(report.serial_correlation.unwrap().abs() < 0.02);
    }

    #[test]
    fn test_monte_carlo_byte_aligned_in_bit_mode() {
        let data = random_data_seeded(600, 7);
        let bytes = analyze(&data, Mode::Byte);
        let bits = analyze(&data, Mode::Bit);
        assert_eq!(bits.monte_carlo_pairs, 100);
        assert_eq!(bytes.monte_carlo_pairs, bits.monte_carlo_pairs);
        assert_eq!(bytes.monte_carlo_in_circle, bits.monte_carlo_in_circle);
        assert_eq!(bytes.monte_carlo_pi, bits.monte_carlo_pi);
    }

    #[test]
    fn test_streaming_matches_one_shot() {
        let data = random_data_seeded(4099, 99);
        let mut a = Analyzer::new(Mode::Byte);
        for chunk in data.chunks(17) {
            a.ingest_slice(chunk);
        }
        let streamed = a.finalize();
        let whole = analyze(&data, Mode::Byte);
        assert_eq!(streamed.counts, whole.counts);
        assert_eq!(streamed.serial_correlation, whole.serial_correlation);
        assert_eq!(streamed.monte_carlo_pi, whole.monte_carlo_pi);
    }
}
