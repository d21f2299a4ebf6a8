//! Heuristic reduction of the tracked diagonals.
//!
//! After extending score `s`, diagonals at either edge of the M wavefront
//! whose remaining distance to the end is much larger than that of the best
//! diagonal are dropped. The I and D wavefronts of the same score are then
//! clipped to the new M range.
//!
//! This bounds the band for long, similar sequences, at the cost of
//! optimality: the score found is only an upper bound. The diagonals around
//! the end diagonal `k*` are never dropped, so the end stays reachable.
use crate::wavefront::{alignment_diagonal, offset_to_coords, Wavefront, WavefrontSet};
use log::debug;
use pa_types::Cost;
use std::cmp::{max, min};
use wfa_types::{Fr, ReductionConfig};

/// Remaining distance from diagonal `k` at `offset` to the bottom right
/// corner: the larger of the remaining pattern and text lengths.
#[inline]
pub fn compute_distance(pattern_length: Fr, text_length: Fr, offset: Fr, k: Fr) -> Fr {
    let (v, h) = offset_to_coords(k, offset);
    max(pattern_length - v, text_length - h)
}

/// The smallest remaining distance over all diagonals of `wf`.
/// Starts from `max(pattern_length, text_length)`, the distance at the start.
pub fn min_distance(wf: &Wavefront, pattern_length: Fr, text_length: Fr) -> Fr {
    wf.range()
        .zip(wf.offsets())
        .map(|(k, &offset)| compute_distance(pattern_length, text_length, offset, k))
        .fold(max(pattern_length, text_length), min)
}

/// Shrink `wf` from both ends while diagonals lag behind `min_distance` by
/// more than `max_distance_threshold`.
///
/// Only a prefix and a suffix of the range are dropped: the scan stops at the
/// first diagonal within the threshold. The scan from below stops before
/// `alignment_k - 1` and the scan from above before `alignment_k + 1`, so the
/// three diagonals around `alignment_k` are kept when they are tracked.
///
/// Returns the number of dropped diagonals.
pub fn reduce_wavefront_offsets(
    wf: &mut Wavefront,
    pattern_length: Fr,
    text_length: Fr,
    min_distance: Fr,
    max_distance_threshold: Fr,
    alignment_k: Fr,
) -> usize {
    if wf.is_null() {
        return 0;
    }
    let (old_lo, old_hi) = (wf.lo(), wf.hi());
    let lags = |k: Fr| {
        compute_distance(pattern_length, text_length, wf[k], k) - min_distance
            > max_distance_threshold
    };

    // Reduce from the bottom.
    let mut lo = old_lo;
    let top_limit = min(alignment_k - 1, old_hi);
    while lo < top_limit && lags(lo) {
        lo += 1;
    }
    // Reduce from the top.
    let mut hi = old_hi;
    let bottom_limit = max(alignment_k + 1, lo);
    while hi > bottom_limit && lags(hi) {
        hi -= 1;
    }

    wf.restrict(lo, hi);
    ((lo - old_lo) + (old_hi - hi)) as usize
}

/// Reduce the wavefronts of score `s`.
///
/// Does nothing unless the reduction is enabled, and skips M wavefronts that
/// are missing, null, or narrower than `min_wavefront_length`.
/// Otherwise, present I and D wavefronts are clipped to the M range, also when
/// M itself lost no diagonals, and become null when that leaves them empty.
///
/// Returns the number of diagonals dropped from M.
pub fn reduce_wavefronts(
    set: &mut WavefrontSet,
    pattern_length: Fr,
    text_length: Fr,
    s: Cost,
    config: &ReductionConfig,
) -> usize {
    if !config.is_enabled() {
        return 0;
    }
    let Some(layers) = set.layers_mut(s) else {
        return 0;
    };
    let Some(m) = layers.m.as_mut().filter(|m| !m.is_null()) else {
        return 0;
    };
    if m.len() < config.min_wavefront_length {
        return 0;
    }

    let min_distance = min_distance(m, pattern_length, text_length);
    let (old_lo, old_hi) = (m.lo(), m.hi());
    let pruned = reduce_wavefront_offsets(
        m,
        pattern_length,
        text_length,
        min_distance,
        config.max_distance_threshold,
        alignment_diagonal(pattern_length, text_length),
    );
    if pruned > 0 {
        debug!(
            "s={s}: reduced M from {old_lo}..={old_hi} to {:?} (min distance {min_distance})",
            m.range()
        );
    }

    // M keeps at least one diagonal.
    let (lo, hi) = (m.lo(), m.hi());
    for wf in [layers.i.as_mut(), layers.d.as_mut()].into_iter().flatten() {
        wf.restrict(lo, hi);
    }
    pruned
}
