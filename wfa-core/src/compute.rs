//! The gap-affine recurrence computing the wavefronts of the next score.
//!
//! With mismatch `x`, gap open `o` and gap extend `e`:
//! - `I[s][k] = max(M[s-o-e][k-1], I[s-e][k-1]) + 1`
//! - `D[s][k] = max(M[s-o-e][k+1], D[s-e][k+1])`
//! - `M[s][k] = max(M[s-x][k] + 1, I[s][k], D[s][k])`
//!
//! An insertion consumes a text character and moves to the next diagonal,
//! a deletion consumes a pattern character and moves to the previous one.
use crate::wavefront::{offset_to_coords, Wavefront, WavefrontLayers, WavefrontSet, OFFSET_NULL};
use pa_types::Cost;
use std::cmp::{max, min};
use wfa_types::{AffinePenalties, Fr};

/// Discards offsets that are unreachable or point past the end of either sequence.
#[inline]
fn trim(pattern_length: Fr, text_length: Fr, k: Fr, offset: Fr) -> Fr {
    let (v, h) = offset_to_coords(k, offset);
    if offset < 0 || v < 0 || v > pattern_length || h > text_length {
        OFFSET_NULL
    } else {
        offset
    }
}

#[inline]
fn get(wf: Option<&Wavefront>, k: Fr) -> Fr {
    wf.map_or(OFFSET_NULL, |wf| wf.get(k))
}

/// Compute the M, I and D wavefronts of score `s` from the lower scores in `set`.
///
/// The new range is the union of the source ranges, widened by one on each
/// side and clipped to the diagonals that exist. When no source wavefront
/// exists, all three layers are absent.
pub fn compute_next(set: &WavefrontSet, penalties: &AffinePenalties, s: Cost) -> WavefrontLayers {
    let m_sub = set.m(s - penalties.mismatch);
    let m_gap = set.m(s - penalties.gap_open_extend());
    let i_ext = set.i(s - penalties.gap_extension);
    let d_ext = set.d(s - penalties.gap_extension);

    let sources = [m_sub, m_gap, i_ext, d_ext];
    let Some(lo) = sources.iter().flatten().map(|wf| wf.lo()).min() else {
        return WavefrontLayers::default();
    };
    let Some(hi) = sources.iter().flatten().map(|wf| wf.hi()).max() else {
        return WavefrontLayers::default();
    };
    let (min_k, max_k) = set.diagonal_limits();
    let lo = max(lo - 1, min_k);
    let hi = min(hi + 1, max_k);

    let (p, t) = (set.pattern_length(), set.text_length());
    let mut m = Wavefront::allocate(lo, hi);
    let mut i = (m_gap.is_some() || i_ext.is_some()).then(|| Wavefront::allocate(lo, hi));
    let mut d = (m_gap.is_some() || d_ext.is_some()).then(|| Wavefront::allocate(lo, hi));

    for k in lo..=hi {
        let ins = trim(p, t, k, max(get(m_gap, k - 1), get(i_ext, k - 1)) + 1);
        let del = trim(p, t, k, max(get(m_gap, k + 1), get(d_ext, k + 1)));
        let sub = trim(p, t, k, get(m_sub, k) + 1);
        if let Some(i) = i.as_mut() {
            i[k] = ins;
        }
        if let Some(d) = d.as_mut() {
            d[k] = del;
        }
        m[k] = max(sub, max(ins, del));
    }

    WavefrontLayers {
        m: Some(m),
        i,
        d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_mismatch() {
        // Unit costs: score 1 is one edit away from the extended start.
        let mut set = WavefrontSet::new(4, 4);
        let mut start = WavefrontLayers::start();
        // Pretend "AC" matched on diagonal 0.
        if let Some(m) = start.m.as_mut() {
            m[0] = 2;
        }
        set.push(start);
        let next = compute_next(&set, &AffinePenalties::unit(), 1);
        let m = next.m.unwrap();
        assert_eq!(m.range(), -1..=1);
        // Deletion: (v, h) = (3, 2). Mismatch: (3, 3). Insertion: (2, 3).
        assert_eq!(m.offsets(), &[2, 3, 3]);
        assert_eq!(next.i.unwrap().offsets(), &[OFFSET_NULL, OFFSET_NULL, 3]);
        assert_eq!(next.d.unwrap().offsets(), &[2, OFFSET_NULL, OFFSET_NULL]);
    }

    #[test]
    fn gap_needs_open_cost() {
        let mut set = WavefrontSet::new(10, 10);
        set.push(WavefrontLayers::start());
        let penalties = AffinePenalties::default();
        for s in 1..=8 {
            let layers = compute_next(&set, &penalties, s);
            set.push(layers);
        }
        // x=4: only M at scores 4 and 8. o+e=8: gaps first appear at score 8.
        for s in [1, 2, 3, 5, 6, 7] {
            assert!(set.layers(s).unwrap().is_empty(), "score {s}");
        }
        assert!(set.m(4).is_some());
        assert!(set.i(4).is_none() && set.d(4).is_none());
        assert_eq!(set.i(8).map(|i| i.get(1)), Some(1));
        assert_eq!(set.d(8).map(|d| d.get(-1)), Some(0));
    }

    #[test]
    fn clipped_to_sequences() {
        // Empty pattern: only insertions are possible.
        let mut set = WavefrontSet::new(0, 2);
        set.push(WavefrontLayers::start());
        let next = compute_next(&set, &AffinePenalties::unit(), 1);
        let m = next.m.unwrap();
        assert_eq!(m.range(), 0..=1);
        assert_eq!(m.offsets(), &[OFFSET_NULL, 1]);
        assert!(next.d.unwrap().offsets().iter().all(|&o| o == OFFSET_NULL));
    }
}
