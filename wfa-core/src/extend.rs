//! Greedy extension of the M wavefront along runs of matching characters.
//!
//! Extending a diagonal only depends on the two sequences and the starting
//! offset on that diagonal, so every diagonal is handled independently.
//! [`ExtendStrategy::Scalar`] compares one character at a time and is the
//! reference. [`ExtendStrategy::Packed`] compares 8 characters at a time and
//! must give exactly the same offsets.
use crate::wavefront::{offset_to_coords, Wavefront, WavefrontSet};
use clap::ValueEnum;
use pa_types::{Cost, Seq};
use serde::{Deserialize, Serialize};
use std::iter::zip;
use wfa_types::Fr;

#[derive(Debug, PartialEq, Eq, Default, Clone, Copy, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtendStrategy {
    /// Compare one character at a time.
    #[default]
    Scalar,
    /// Compare one `u64` word at a time.
    Packed,
}

/// The number of matching characters starting at `pattern[v]` and `text[h]`.
/// Positions at or past the end of a sequence match nothing.
#[inline]
pub fn extend_diagonal(pattern: Seq, text: Seq, v: usize, h: usize) -> usize {
    if v >= pattern.len() || h >= text.len() {
        return 0;
    }
    zip(&pattern[v..], &text[h..])
        .take_while(|(cp, ct)| cp == ct)
        .count()
}

const WORD: usize = std::mem::size_of::<u64>();

#[inline]
fn read_word(s: &[u8]) -> u64 {
    let mut buf = [0u8; WORD];
    buf.copy_from_slice(&s[..WORD]);
    u64::from_le_bytes(buf)
}

/// As [`extend_diagonal`], but compares one word at a time while both
/// sequences have at least a full word left.
///
/// Words are read as little endian, so the first mismatching character is
/// the lowest non-zero byte of the xor.
#[inline]
pub fn extend_diagonal_packed(pattern: Seq, text: Seq, v: usize, h: usize) -> usize {
    if v >= pattern.len() || h >= text.len() {
        return 0;
    }
    let (pattern, text) = (&pattern[v..], &text[h..]);
    let mut len = 0;
    while len + WORD <= pattern.len() && len + WORD <= text.len() {
        let cmp = read_word(&pattern[len..]) ^ read_word(&text[len..]);
        if cmp != 0 {
            return len + (cmp.trailing_zeros() / u8::BITS) as usize;
        }
        len += WORD;
    }
    len + extend_diagonal(pattern, text, len, len)
}

impl ExtendStrategy {
    #[inline]
    pub fn extend_diagonal(self, pattern: Seq, text: Seq, v: usize, h: usize) -> usize {
        match self {
            ExtendStrategy::Scalar => extend_diagonal(pattern, text, v, h),
            ExtendStrategy::Packed => extend_diagonal_packed(pattern, text, v, h),
        }
    }
}

/// Extend every tracked diagonal of `m` in place.
///
/// Returns the total number of matched characters.
/// Null wavefronts and unreachable diagonals (`OFFSET_NULL`) are skipped.
pub fn extend(m: &mut Wavefront, pattern: Seq, text: Seq, strategy: ExtendStrategy) -> usize {
    if m.is_null() {
        return 0;
    }
    let lo = m.lo();
    let mut matched = 0;
    for (k, offset) in (lo..).zip(m.offsets_mut()) {
        let (v, h) = offset_to_coords(k, *offset);
        let (Ok(v), Ok(h)) = (usize::try_from(v), usize::try_from(h)) else {
            continue;
        };
        let len = strategy.extend_diagonal(pattern, text, v, h);
        *offset += len as Fr;
        matched += len;
    }
    matched
}

/// Extend the M wavefront of score `s`, if there is one.
pub fn extend_wavefronts(
    set: &mut WavefrontSet,
    pattern: Seq,
    text: Seq,
    s: Cost,
    strategy: ExtendStrategy,
) -> usize {
    match set.m_mut(s) {
        Some(m) => extend(m, pattern, text, strategy),
        None => 0,
    }
}
