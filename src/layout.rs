//! Bit layout of an Elias-Fano encoded sequence.
//!
//! # Theory
//!
//! A value $v$ is split at $L$ bits: the high part $v \gg L$ is stored in unary
//! as a single set bit at position $(v \gg L) + i + 1$ for the $i$-th element,
//! the low part $v \bmod 2^L$ as a fixed-width field.
//!
//! The high region holds $n + \lfloor U / 2^L \rfloor + 2$ bits and the low
//! region $n L$ bits, for a total close to $2n + n \log_2(U/n)$.
//!
//! $L$ is `round(log2(U / n))`, not the floor used in the textbook
//! description. Rounding is kept so that bit widths match existing encodings.

use std::fmt;

use crate::error::{Error, Result};

/// Fixed-width parameters derived from `(universe, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    universe: u64,
    n: u64,
    lower_bits: u64,
    mask: u64,
    higher_bits_length: u64,
    lower_bits_offset: u64,
    total_bits: u64,
}

impl Layout {
    /// Derive the layout for `n` elements no greater than `universe`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySequence`] if `n == 0`, [`Error::CapacityOverflow`] if the
    /// total bit length cannot be represented.
    pub fn new(universe: u64, n: u64) -> Result<Self> {
        if n == 0 {
            return Err(Error::EmptySequence);
        }

        let lower_bits = if universe > n {
            rounded_log2(universe / n)
        } else {
            0
        };
        let mask = low_mask(lower_bits);

        let overflow = Error::CapacityOverflow { universe, n };
        let higher_bits_length = n
            .checked_add(shr(universe, lower_bits))
            .and_then(|x| x.checked_add(2))
            .ok_or(overflow.clone())?;
        let lower_bits_offset = higher_bits_length;
        let total_bits = n
            .checked_mul(lower_bits)
            .and_then(|x| x.checked_add(lower_bits_offset))
            .ok_or(overflow.clone())?;
        if usize::try_from(total_bits.div_ceil(64)).is_err() {
            return Err(overflow);
        }

        Ok(Self {
            universe,
            n,
            lower_bits,
            mask,
            higher_bits_length,
            lower_bits_offset,
            total_bits,
        })
    }

    /// Upper bound on any element.
    pub fn universe(&self) -> u64 {
        self.universe
    }

    /// Number of elements.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Width of each low field.
    pub fn lower_bits(&self) -> u64 {
        self.lower_bits
    }

    /// `(1 << lower_bits) - 1`.
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Length of the high-bits region.
    pub fn higher_bits_length(&self) -> u64 {
        self.higher_bits_length
    }

    /// First bit of the low-bits region.
    pub fn lower_bits_offset(&self) -> u64 {
        self.lower_bits_offset
    }

    /// Total bit length of the encoded sequence.
    pub fn total_bits(&self) -> u64 {
        self.total_bits
    }

    /// Position of the high bit for element `index` holding `value`.
    #[inline]
    pub(crate) fn high_position(&self, index: u64, value: u64) -> u64 {
        shr(value, self.lower_bits) + index + 1
    }

    /// Start of the low field for element `index`.
    #[inline]
    pub(crate) fn low_offset(&self, index: u64) -> u64 {
        self.lower_bits_offset + index * self.lower_bits
    }

    /// Rebuild a value from its high-bit position and low field.
    #[inline]
    pub(crate) fn join(&self, index: u64, high_pos: u64, low: u64) -> u64 {
        let high = high_pos - index - 1;
        shl(high, self.lower_bits) | low
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Universe: {}", self.universe)?;
        writeln!(f, "Elements: {}", self.n)?;
        writeln!(f, "Lower_bits: {}", self.lower_bits)?;
        writeln!(f, "Higher_bits_length: {}", self.higher_bits_length)?;
        writeln!(f, "Mask: {:#b}", self.mask)?;
        writeln!(f, "Lower_bits offset: {}", self.lower_bits_offset)?;
        write!(f, "Bitvector length: {}", self.total_bits)
    }
}

/// `log2(x)` rounded half away from zero. `x` must be at least 1.
fn rounded_log2(x: u64) -> u64 {
    (x as f64).log2().round() as u64
}

fn low_mask(bits: u64) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

#[inline]
fn shr(v: u64, bits: u64) -> u64 {
    v.checked_shr(bits as u32).unwrap_or(0)
}

#[inline]
fn shl(v: u64, bits: u64) -> u64 {
    v.checked_shl(bits as u32).unwrap_or(0)
}
