//! Navigation over an encoded sequence.
//!
//! The decoder state is the triple `(position, value, high_bits_pos)`:
//! `high_bits_pos` is the set bit in the high region belonging to `position`
//! and is the resume point for the next forward scan. The high region only
//! supports scanning forward, so moving backwards restarts from element 0.
//!
//! [`Cursor`] and [`Iter`] borrow the encoded storage and keep their own
//! triple, so any number of them can read one [`EliasFano`] at once.

use crate::bitvec::BitVector;
use crate::elias_fano::EliasFano;
use crate::error::{Error, Result};
use crate::layout::Layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CursorState {
    pub(crate) position: u64,
    pub(crate) value: u64,
    pub(crate) high_bits_pos: u64,
}

impl CursorState {
    fn decode(layout: &Layout, bits: &BitVector, position: u64, high_bits_pos: u64) -> Self {
        let low = bits.read_bits(layout.low_offset(position), layout.lower_bits());
        Self {
            position,
            value: layout.join(position, high_bits_pos, low),
            high_bits_pos,
        }
    }

    /// State for element `index`, found by scanning the high region from bit 0.
    pub(crate) fn at(layout: &Layout, bits: &BitVector, index: u64) -> Option<Self> {
        if index >= layout.n() {
            return None;
        }
        let high = bits.select_from(0, index)?;
        Some(Self::decode(layout, bits, index, high))
    }

    /// State for element 0 of encoded storage.
    pub(crate) fn first(layout: &Layout, bits: &BitVector) -> Self {
        // Element 0 always owns a high bit at position >= 1.
        let high = bits.next_set_bit(0).unwrap_or(1);
        Self::decode(layout, bits, 0, high)
    }

    pub(crate) fn reset(&mut self, layout: &Layout, bits: &BitVector) {
        *self = Self::first(layout, bits);
    }

    pub(crate) fn next(&mut self, layout: &Layout, bits: &BitVector) -> Result<u64> {
        let position = self.position + 1;
        if position >= layout.n() {
            return Err(Error::EndReached);
        }
        let high = bits
            .next_set_bit(self.high_bits_pos + 1)
            .ok_or(Error::EndReached)?;
        *self = Self::decode(layout, bits, position, high);
        Ok(self.value)
    }

    pub(crate) fn move_to(&mut self, layout: &Layout, bits: &BitVector, target: u64) -> Result<u64> {
        let out_of_bounds = Error::IndexOutOfBounds {
            index: target,
            len: layout.n(),
        };
        if target >= layout.n() {
            return Err(out_of_bounds);
        }
        if target == self.position {
            return Ok(self.value);
        }

        let start = if target < self.position {
            log::trace!(
                "backward move {} -> {}: rescanning from element 0",
                self.position,
                target
            );
            Self::first(layout, bits)
        } else {
            *self
        };

        // Skip the high bits of the intermediate elements without decoding their low fields.
        let moved = if target == start.position {
            start
        } else {
            let high = bits
                .select_from(start.high_bits_pos + 1, target - start.position - 1)
                .ok_or(out_of_bounds)?;
            Self::decode(layout, bits, target, high)
        };
        *self = moved;
        Ok(self.value)
    }
}

/// An independent navigator over an encoded [`EliasFano`], created by [`EliasFano::cursor`].
///
/// Behaves like the codec's own navigation methods but keeps its own
/// position, so it only needs a shared reference.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    ef: &'a EliasFano,
    state: CursorState,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(ef: &'a EliasFano) -> Self {
        let state = CursorState::first(ef.layout(), ef.bits());
        Self { ef, state }
    }

    /// Value at the current position.
    pub fn value(&self) -> u64 {
        self.state.value
    }

    /// Current position.
    pub fn position(&self) -> u64 {
        self.state.position
    }

    /// Number of elements in the underlying sequence.
    pub fn len(&self) -> u64 {
        self.ef.size()
    }

    /// Always false: an encoded sequence holds at least one element.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Move back to position 0.
    pub fn reset(&mut self) {
        self.state.reset(self.ef.layout(), self.ef.bits());
    }

    /// Advance to the next element and return it.
    ///
    /// # Errors
    ///
    /// [`Error::EndReached`] at the last element; the cursor does not move.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<u64> {
        self.state.next(self.ef.layout(), self.ef.bits())
    }

    /// Position the cursor at `target` and return the value there.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `target >= len`; the cursor does not move.
    pub fn move_to(&mut self, target: u64) -> Result<u64> {
        self.state.move_to(self.ef.layout(), self.ef.bits(), target)
    }
}

/// Iterator over the values of an [`EliasFano`], created by [`EliasFano::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    ef: &'a EliasFano,
    state: Option<CursorState>,
    remaining: u64,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(ef: &'a EliasFano) -> Self {
        if !ef.is_encoded() {
            return Self {
                ef,
                state: None,
                remaining: 0,
            };
        }
        Self {
            ef,
            state: Some(CursorState::first(ef.layout(), ef.bits())),
            remaining: ef.size(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        let state = self.state.as_mut()?;
        let value = state.value;
        self.remaining -= 1;
        if self.remaining > 0 && state.next(self.ef.layout(), self.ef.bits()).is_err() {
            self.remaining = 0;
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter<'_> {}
