//! Elias-Fano encoding for monotone sequences.
//!
//! A codec is built for a fixed `(universe, n)`, encoded exactly once with
//! [`EliasFano::compress`], and then read back by stepping forward or jumping
//! to an index.
//!
//! # Theory
//!
//! For $n$ sorted integers in $[0, U]$, each value is split at
//! $L \approx \log_2(U/n)$ bits. The high parts form a unary-coded monotone
//! bit sequence of about $n + U/2^L$ bits; the low parts are packed as $n$
//! fields of $L$ bits. Total space is about $2n + n \log_2(U/n)$ bits.
//!
//! # Example
//!
//! ```
//! use efcodec::{EliasFano, Error};
//!
//! let mut ef = EliasFano::new(1000, 5).unwrap();
//! ef.compress(&[0, 5, 9, 800, 1000]).unwrap();
//!
//! assert_eq!(ef.value(), 0);
//! assert_eq!(ef.move_to(4), Ok(1000));
//! ef.reset();
//! assert_eq!(ef.next(), Ok(5));
//! assert_eq!(ef.move_to(5), Err(Error::IndexOutOfBounds { index: 5, len: 5 }));
//! ```

use crate::bitvec::BitVector;
use crate::cursor::{Cursor, CursorState, Iter};
use crate::error::{Error, Result};
use crate::layout::Layout;

/// Elias-Fano codec: encoded storage plus a built-in cursor.
#[derive(Debug, Clone)]
pub struct EliasFano {
    layout: Layout,
    bits: BitVector,
    /// `None` until the sequence has been encoded.
    state: Option<CursorState>,
}

impl EliasFano {
    /// Create an empty codec for `n` elements no greater than `universe`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySequence`] if `n == 0`, [`Error::CapacityOverflow`] if the
    /// layout is too large to allocate.
    pub fn new(universe: u64, n: u64) -> Result<Self> {
        let layout = Layout::new(universe, n)?;
        Ok(Self {
            bits: BitVector::new(layout.total_bits()),
            layout,
            state: None,
        })
    }

    /// Build and encode a codec from a sorted slice in one step.
    pub fn from_sorted(universe: u64, values: &[u64]) -> Result<Self> {
        let mut ef = Self::new(universe, values.len() as u64)?;
        ef.compress(values)?;
        Ok(ef)
    }

    /// Encode `elems`, which must be sorted, hold exactly `n` values, and stay within the universe.
    ///
    /// The whole input is validated before any bit is written, so on error the
    /// codec stays unencoded.
    ///
    /// # Errors
    ///
    /// - [`Error::AlreadyEncoded`] if called a second time.
    /// - [`Error::LengthMismatch`] if `elems.len() != n`.
    /// - [`Error::NotSorted`] on the first decreasing element.
    /// - [`Error::ExceedsUniverse`] on the first element above the universe.
    pub fn compress(&mut self, elems: &[u64]) -> Result<()> {
        if self.state.is_some() {
            return Err(Error::AlreadyEncoded);
        }
        self.validate(elems)?;

        let lower_bits = self.layout.lower_bits();
        let mask = self.layout.mask();
        for (i, &v) in elems.iter().enumerate() {
            let i = i as u64;
            self.bits.set(self.layout.high_position(i, v));
            self.bits
                .write_bits(self.layout.low_offset(i), v & mask, lower_bits);
        }

        let first = elems[0];
        self.state = Some(CursorState {
            position: 0,
            value: first,
            high_bits_pos: self.layout.high_position(0, first),
        });

        log::debug!(
            "encoded {} elements (universe {}) into {} bits",
            self.layout.n(),
            self.layout.universe(),
            self.bitsize()
        );
        Ok(())
    }

    fn validate(&self, elems: &[u64]) -> Result<()> {
        let expected = self.layout.n();
        if elems.len() as u64 != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: elems.len() as u64,
            });
        }

        let universe = self.layout.universe();
        let mut previous = 0u64;
        for (i, &value) in elems.iter().enumerate() {
            if i > 0 && value < previous {
                return Err(Error::NotSorted {
                    index: i as u64,
                    value,
                    previous,
                });
            }
            if value > universe {
                return Err(Error::ExceedsUniverse {
                    index: i as u64,
                    value,
                    universe,
                });
            }
            previous = value;
        }
        Ok(())
    }

    /// Return true once [`compress`](Self::compress) has succeeded.
    pub fn is_encoded(&self) -> bool {
        self.state.is_some()
    }

    /// The bit layout of this codec.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub(crate) fn bits(&self) -> &BitVector {
        &self.bits
    }

    /// Move back to position 0, decoding the first value again. No-op before encoding.
    pub fn reset(&mut self) {
        if let Some(state) = self.state.as_mut() {
            state.reset(&self.layout, &self.bits);
        }
    }

    /// Advance to the next element and return it.
    ///
    /// # Errors
    ///
    /// [`Error::EndReached`] at the last element (state is unchanged),
    /// [`Error::NotEncoded`] before encoding.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<u64> {
        let state = self.state.as_mut().ok_or(Error::NotEncoded)?;
        state.next(&self.layout, &self.bits)
    }

    /// Position at `target` and return the value there.
    ///
    /// Moving forward scans only the gap; moving backward rescans from element 0.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `target >= n` (state is unchanged),
    /// [`Error::NotEncoded`] before encoding.
    pub fn move_to(&mut self, target: u64) -> Result<u64> {
        let state = self.state.as_mut().ok_or(Error::NotEncoded)?;
        state.move_to(&self.layout, &self.bits, target)
    }

    /// Value at the current position (0 before encoding).
    pub fn value(&self) -> u64 {
        self.state.map_or(0, |s| s.value)
    }

    /// Current position (0 before encoding).
    pub fn position(&self) -> u64 {
        self.state.map_or(0, |s| s.position)
    }

    /// Number of elements.
    pub fn size(&self) -> u64 {
        self.layout.n()
    }

    /// Bits of storage materialized for the encoded sequence.
    pub fn bitsize(&self) -> u64 {
        self.bits.storage_size_bits()
    }

    /// Value at `index`, without moving this codec's position.
    pub fn get(&self, index: u64) -> Result<u64> {
        if self.state.is_none() {
            return Err(Error::NotEncoded);
        }
        CursorState::at(&self.layout, &self.bits, index)
            .map(|s| s.value)
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.layout.n(),
            })
    }

    /// A new cursor at position 0, independent of this codec's own position.
    pub fn cursor(&self) -> Result<Cursor<'_>> {
        if self.state.is_none() {
            return Err(Error::NotEncoded);
        }
        Ok(Cursor::new(self))
    }

    /// Iterate over all values in order. Empty before encoding.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Log the layout parameters at info level.
    pub fn describe(&self) {
        log::info!("{}", self.layout);
    }
}

impl<'a> IntoIterator for &'a EliasFano {
    type Item = u64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
