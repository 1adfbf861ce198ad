//! Projection of input bytes into analysis symbols.

use crate::mode::Mode;

/// Splits each input byte into the symbols of the configured [`Mode`].
#[derive(Debug, Clone, Copy)]
pub struct Symbolizer {
    mode: Mode,
}

impl Symbolizer {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Symbols carried by `byte`.
    ///
    /// Byte mode yields the byte itself. Bit mode yields
    /// `b & 1, (b >> 1) & 1, ..., (b >> 7) & 1`.
    pub fn symbols(&self, byte: u8) -> impl Iterator<Item = u8> {
        let (count, width) = match self.mode {
            Mode::Byte => (1, 8),
            Mode::Bit => (8, 1),
        };
        let mask = ((1u16 << width) - 1) as u8;
        (0..count).map(move |i| (byte >> (i * width)) & mask)
    }
}
