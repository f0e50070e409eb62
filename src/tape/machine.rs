//! Target machine configuration.
//!
//! The emitter needs to know one thing about the machine it targets: how wide
//! a cell is. With unbounded cells an `add` of `n` always emits `|n|` symbols.
//! With a fixed width the value is reduced modulo `2^bits` first, and the
//! shorter direction around the ring is taken.

use crate::core::error::ConfigError;

/// Largest supported fixed cell width.
pub const MAX_CELL_BITS: u32 = 32;

/// Validated fixed cell width, always within `1..=MAX_CELL_BITS`.
///
/// Only [`CellWidth::bits`] can build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBits(u32);

impl CellBits {
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Width of a single tape cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellWidth {
    /// Cells are unbounded signed counters.
    #[default]
    Unbounded,
    /// Cells wrap modulo `2^bits`.
    Bits(CellBits),
}

impl CellWidth {
    /// Fixed width of `bits` bits, validated against `1..=MAX_CELL_BITS`.
    pub fn bits(bits: u32) -> Result<Self, ConfigError> {
        if (1..=MAX_CELL_BITS).contains(&bits) {
            Ok(CellWidth::Bits(CellBits(bits)))
        } else {
            Err(ConfigError::InvalidCellWidth { bits })
        }
    }

    /// Number of bits per cell, if bounded.
    pub fn bit_count(self) -> Option<u32> {
        match self {
            CellWidth::Unbounded => None,
            CellWidth::Bits(bits) => Some(bits.get()),
        }
    }

    /// Number of distinct cell values, if bounded.
    pub fn modulus(self) -> Option<i64> {
        self.bit_count().map(|bits| 1i64 << bits)
    }

    /// Cheapest signed adjustment with the same effect as adding `value`.
    ///
    /// Ties (exactly half the ring) resolve to the positive direction.
    pub fn normalize(self, value: i64) -> i64 {
        let Some(modulus) = self.modulus() else {
            return value;
        };
        let residue = value.rem_euclid(modulus);
        if residue <= modulus / 2 {
            residue
        } else {
            residue - modulus
        }
    }
}

/// Configuration of the machine the emitted code will run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MachineConfig {
    pub cell_width: CellWidth,
}

impl MachineConfig {
    pub fn new(cell_width: CellWidth) -> Self {
        Self { cell_width }
    }

    /// Configuration for the common 8-bit wrapping machine.
    pub fn byte_cells() -> Self {
        Self::new(CellWidth::Bits(CellBits(8)))
    }
}
