//! Fixed-length bit vector backing an encoded sequence.
//!
//! Bits are packed little-endian into 64-bit words: bit `i` lives in word
//! `i / 64` at offset `i % 64`. The vector is allocated once and never grows.
//!
//! There is no rank/select index. Forward select is answered by scanning
//! words from a resume point, skipping whole words by popcount, which is
//! enough for the cursor pattern used by the decoder (each step only looks at
//! the gap to the next set bit).

/// A fixed-length bit vector with forward select.
#[derive(Clone, PartialEq, Eq)]
pub struct BitVector {
    words: Vec<u64>,
    len: u64,
}

impl std::fmt::Debug for BitVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitVector")
            .field("len", &self.len)
            .field("ones", &self.count_ones())
            .finish()
    }
}

impl BitVector {
    /// Create a zeroed bit vector of `len` bits.
    pub fn new(len: u64) -> Self {
        let num_words = len.div_ceil(64) as usize;
        Self {
            words: vec![0u64; num_words],
            len,
        }
    }

    /// Return the number of bits in the vector.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Return true if the bit-vector has length 0.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bits actually materialized, rounded up to whole words.
    pub fn storage_size_bits(&self) -> u64 {
        self.words.len() as u64 * 64
    }

    /// Approximate heap memory usage in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.words.capacity() * 8
    }

    /// Total number of set bits.
    pub fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| w.count_ones() as u64).sum()
    }

    /// Set the bit at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len`.
    pub fn set(&mut self, i: u64) {
        assert!(i < self.len, "bit index {i} out of range for length {}", self.len);
        self.words[(i / 64) as usize] |= 1u64 << (i % 64);
    }

    /// Return true if the bit at index `i` is set.
    pub fn get(&self, i: u64) -> bool {
        if i >= self.len {
            return false;
        }
        (self.words[(i / 64) as usize] & (1u64 << (i % 64))) != 0
    }

    /// Smallest set-bit index `>= from`.
    #[inline]
    pub fn next_set_bit(&self, from: u64) -> Option<u64> {
        self.select_from(from, 0)
    }

    /// Position of the `k`-th (0-indexed) set bit at or after `from`.
    pub fn select_from(&self, from: u64, k: u64) -> Option<u64> {
        if from >= self.len {
            return None;
        }
        let mut word_idx = (from / 64) as usize;
        let mut word = self.words[word_idx] & (u64::MAX << (from % 64));
        let mut remaining = k;
        loop {
            let ones = word.count_ones() as u64;
            if remaining < ones {
                break;
            }
            remaining -= ones;
            word_idx += 1;
            if word_idx >= self.words.len() {
                return None;
            }
            word = self.words[word_idx];
        }
        let pos = word_idx as u64 * 64 + select_in_word(word, remaining);
        // Bits past `len` are never set, so `pos < len` holds.
        debug_assert!(pos < self.len);
        Some(pos)
    }

    /// Write the low `width` bits of `value` starting at `offset`, most significant bit first.
    ///
    /// # Panics
    ///
    /// Panics if the field extends past the end of the vector.
    pub fn write_bits(&mut self, offset: u64, value: u64, width: u64) {
        for j in 0..width {
            if (value >> (width - j - 1)) & 1 == 1 {
                self.set(offset + j);
            }
        }
    }

    /// Read a `width`-bit field starting at `offset`, most significant bit first.
    pub fn read_bits(&self, offset: u64, width: u64) -> u64 {
        let mut value = 0u64;
        for j in 0..width {
            value = (value << 1) | self.get(offset + j) as u64;
        }
        value
    }
}

/// Offset of the `k`-th set bit within `word`. `word` must have more than `k` ones.
fn select_in_word(word: u64, k: u64) -> u64 {
    #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
    {
        // SAFETY: guarded by the `bmi2` target feature.
        unsafe {
            let res = core::arch::x86_64::_pdep_u64(1u64 << k, word);
            return res.trailing_zeros() as u64;
        }
    }

    #[allow(unreachable_code)]
    {
        let mut w = word;
        for _ in 0..k {
            w &= w - 1;
        }
        w.trailing_zeros() as u64
    }
}
