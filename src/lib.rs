//! # Elias-Fano Codec
//!
//! *Sorted integers near their information-theoretic size, still readable in place.*
//!
//! ## Intuition First
//!
//! Picture a long corridor of numbered doors, with a few guests checked into
//! rooms along it. Writing down every room number costs $\log_2 U$ bits per
//! guest. But the guests are sorted: you can instead say "walk past this many
//! floors, then look at the last few digits on the door". Floors are cheap to
//! describe in unary, and the last digits have a fixed width.
//!
//! That is Elias-Fano: each value is split into a **high** part, recorded as
//! one set bit in a unary bit sequence, and a **low** part, stored as a fixed
//! width field. Walking the unary sequence recovers values in order, and
//! counting set bits jumps to any index without decoding everything before it.
//!
//! ## Historical Context
//!
//! ```text
//! 1971  Fano        Partitioning bits into a coarse and a fine part
//! 1974  Elias       Static storage of monotone sequences
//! 2013  Vigna       Quasi-succinct indices for posting lists
//! 2014  Ottaviano   Partitioned Elias-Fano indexes
//! ```
//!
//! ## Mathematical Formulation
//!
//! For $n$ values in $[0, U]$ and $L = \mathrm{round}(\log_2(U/n))$:
//! - element $i$ with value $v$ sets high bit $(v \gg L) + i + 1$;
//! - its low field holds $v \bmod 2^L$ in $L$ bits.
//!
//! The high region is $n + \lfloor U/2^L \rfloor + 2$ bits long, the low
//! region $nL$ bits.
//!
//! ## Complexity Analysis
//!
//! - **Space**: about $2n + n \log_2(U/n)$ bits.
//! - **Next**: proportional to the gap to the next set high bit.
//! - **Move**: forward moves scan the gap a word at a time; backward moves
//!   rescan from the first element.
//!
//! ## What Could Go Wrong
//!
//! 1. **Write once**: the structure cannot be updated after encoding.
//! 2. **Backward jumps**: the high region is only scanned forward, so moving
//!    back costs a scan from the start.
//! 3. **Bad input**: unsorted input or values above the universe are rejected
//!    with an [`Error`], never clamped.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`Layout`**: bit widths and offsets derived from `(universe, n)`.
//! - **`BitVector`**: fixed-length storage with forward select.
//! - **`EliasFano`**: the codec, with a built-in stateful cursor.
//! - **`Cursor`** / **`Iter`**: independent readers over shared encoded storage.
//!
//! ## References
//!
//! - Elias, P. (1974). "Efficient storage and retrieval by content and address of static files."
//! - Fano, R. M. (1971). "On the number of bits required to implement an associative memory."
//! - Vigna, S. (2013). "Quasi-succinct indices."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitvec;
pub mod cursor;
pub mod elias_fano;
pub mod error;
pub mod layout;

pub use bitvec::BitVector;
pub use cursor::{Cursor, Iter};
pub use elias_fano::EliasFano;
pub use error::{Error, Result};
pub use layout::Layout;
