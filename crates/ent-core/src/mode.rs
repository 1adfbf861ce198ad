//! Symbol alphabet selection.

use serde::Serialize;

/// How input bytes are projected into symbols.
///
/// Fixed for the lifetime of an [`Analyzer`](crate::Analyzer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Mode {
    /// One 8-bit symbol per input byte (alphabet of 256).
    #[default]
    Byte,
    /// Eight 1-bit symbols per input byte, least significant bit first.
    Bit,
}

impl Mode {
    /// Number of distinct symbol values (A).
    pub fn alphabet_size(self) -> usize {
        match self {
            Self::Byte => 256,
            Self::Bit => 2,
        }
    }

    /// Symbols emitted for every input byte.
    pub fn symbols_per_byte(self) -> u64 {
        match self {
            Self::Byte => 1,
            Self::Bit => 8,
        }
    }

    /// Chi-square degrees of freedom, A - 1.
    pub fn degrees_of_freedom(self) -> u32 {
        self.alphabet_size() as u32 - 1
    }

    /// Expected arithmetic mean of a uniform source, (A - 1) / 2.
    pub fn uniform_mean(self) -> f64 {
        (self.alphabet_size() - 1) as f64 / 2.0
    }

    /// Name of a single symbol, as used in reports.
    pub fn sample_name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Bit => "bit",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sample_name())
    }
}
