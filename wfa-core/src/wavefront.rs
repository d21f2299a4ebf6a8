//! Wavefronts and the per-score set of M/I/D wavefronts.
//!
//! Terminology and notation:
//! - `v`: position in the pattern, `h`: position in the text.
//! - `k`: diagonal index, `k = h - v`. `k=0` is the diagonal through the top left,
//!   `k* = |text| - |pattern|` is the diagonal through the bottom right.
//! - offset: the text position `h` reached on a diagonal. `v = offset - k`.
//! - `lo`/`hi`: the inclusive range of diagonals tracked by a wavefront.
//! - M/I/D: the match/mismatch, insertion and deletion wavefronts of a score.
use pa_types::Cost;
use std::cmp::{max, min};
use std::ops::{Index, IndexMut, RangeInclusive};
use wfa_types::Fr;

/// Offset of a diagonal that cannot be reached with the current score.
/// Far enough from `Fr::MIN` that adding small numbers does not overflow.
pub const OFFSET_NULL: Fr = Fr::MIN / 2;

/// Converts a (diagonal, offset) pair to a (pattern, text) position.
#[inline]
pub fn offset_to_coords(k: Fr, offset: Fr) -> (Fr, Fr) {
    (offset - k, offset)
}

/// The diagonal on which the alignment ends.
#[inline]
pub fn alignment_diagonal(pattern_length: Fr, text_length: Fr) -> Fr {
    text_length - pattern_length
}

/// The offsets of a single wavefront.
///
/// Storage is a contiguous buffer covering the range the wavefront was
/// allocated with. The index of diagonal `k` is `k - base`, where `base` is
/// the `lo` at allocation time. Since `lo..=hi` only ever shrinks, the buffer
/// never needs to move.
#[derive(Clone)]
pub struct Wavefront {
    lo: Fr,
    hi: Fr,
    null: bool,
    /// The diagonal stored at `offsets[0]`.
    base: Fr,
    offsets: Vec<Fr>,
}

impl std::fmt::Debug for Wavefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("Wavefront");
        if self.null {
            s.field("null", &true);
        } else {
            s.field("lo", &self.lo)
                .field("hi", &self.hi)
                .field("offsets", &self.offsets());
        }
        s.finish()
    }
}

impl Wavefront {
    /// A wavefront tracking `lo..=hi`, with all offsets unreachable.
    pub fn allocate(lo: Fr, hi: Fr) -> Self {
        if lo > hi {
            return Self::null();
        }
        Self {
            lo,
            hi,
            null: false,
            base: lo,
            offsets: vec![OFFSET_NULL; (hi - lo + 1) as usize],
        }
    }

    /// A wavefront without any diagonals.
    pub fn null() -> Self {
        Self {
            lo: 0,
            hi: -1,
            null: true,
            base: 0,
            offsets: vec![],
        }
    }

    /// A wavefront tracking `lo..lo+offsets.len()` with the given offsets.
    pub fn from_offsets(lo: Fr, offsets: &[Fr]) -> Self {
        let mut wf = Self::allocate(lo, lo + offsets.len() as Fr - 1);
        if !wf.null {
            wf.offsets.copy_from_slice(offsets);
        }
        wf
    }

    #[inline]
    pub fn lo(&self) -> Fr {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> Fr {
        self.hi
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.null
    }

    /// The tracked diagonals. Empty for null wavefronts.
    #[inline]
    pub fn range(&self) -> RangeInclusive<Fr> {
        if self.null {
            0..=-1
        } else {
            self.lo..=self.hi
        }
    }

    /// The number of tracked diagonals, `hi - lo + 1`.
    #[inline]
    pub fn len(&self) -> Fr {
        if self.null {
            0
        } else {
            self.hi - self.lo + 1
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(&self, k: Fr) -> bool {
        !self.null && self.lo <= k && k <= self.hi
    }

    /// The offset on diagonal `k`, or `OFFSET_NULL` when `k` is not tracked.
    #[inline]
    pub fn get(&self, k: Fr) -> Fr {
        if self.contains(k) {
            self.offsets[(k - self.base) as usize]
        } else {
            OFFSET_NULL
        }
    }

    /// The offsets of `lo..=hi`.
    #[inline]
    pub fn offsets(&self) -> &[Fr] {
        if self.null {
            &[]
        } else {
            &self.offsets[(self.lo - self.base) as usize..=(self.hi - self.base) as usize]
        }
    }

    /// Mutable offsets of `lo..=hi`.
    #[inline]
    pub fn offsets_mut(&mut self) -> &mut [Fr] {
        if self.null {
            &mut []
        } else {
            &mut self.offsets[(self.lo - self.base) as usize..=(self.hi - self.base) as usize]
        }
    }

    /// Narrow the tracked range to its intersection with `lo..=hi`.
    /// The wavefront becomes null when the intersection is empty.
    /// Bounds never grow, and a null wavefront stays null.
    pub fn restrict(&mut self, lo: Fr, hi: Fr) {
        if self.null {
            return;
        }
        self.lo = max(self.lo, lo);
        self.hi = min(self.hi, hi);
        if self.lo > self.hi {
            self.null = true;
        }
    }
}

impl Index<Fr> for Wavefront {
    type Output = Fr;

    #[inline]
    fn index(&self, k: Fr) -> &Fr {
        debug_assert!(self.contains(k), "diagonal {k} not in {:?}", self.range());
        &self.offsets[(k - self.base) as usize]
    }
}

impl IndexMut<Fr> for Wavefront {
    #[inline]
    fn index_mut(&mut self, k: Fr) -> &mut Fr {
        debug_assert!(self.contains(k), "diagonal {k} not in {:?}", self.range());
        &mut self.offsets[(k - self.base) as usize]
    }
}

/// The M, I and D wavefronts of one score. Each can be absent.
#[derive(Clone, Debug, Default)]
pub struct WavefrontLayers {
    pub m: Option<Wavefront>,
    pub i: Option<Wavefront>,
    pub d: Option<Wavefront>,
}

impl WavefrontLayers {
    /// The layers of score 0: only diagonal 0 with offset 0.
    pub fn start() -> Self {
        Self {
            m: Some(Wavefront::from_offsets(0, &[0])),
            i: None,
            d: None,
        }
    }

    /// True when none of the three wavefronts has any diagonal.
    pub fn is_empty(&self) -> bool {
        [&self.m, &self.i, &self.d]
            .into_iter()
            .all(|wf| wf.as_ref().map_or(true, |wf| wf.is_null()))
    }
}

/// All wavefronts computed for one alignment, indexed by score.
#[derive(Clone, Debug)]
pub struct WavefrontSet {
    pattern_length: Fr,
    text_length: Fr,
    layers: Vec<WavefrontLayers>,
    /// Layers below this score have been dropped.
    forgotten: usize,
}

impl WavefrontSet {
    pub fn new(pattern_length: usize, text_length: usize) -> Self {
        Self {
            pattern_length: pattern_length as Fr,
            text_length: text_length as Fr,
            layers: vec![],
            forgotten: 0,
        }
    }

    #[inline]
    pub fn pattern_length(&self) -> Fr {
        self.pattern_length
    }

    #[inline]
    pub fn text_length(&self) -> Fr {
        self.text_length
    }

    /// The diagonal through the bottom right corner.
    #[inline]
    pub fn alignment_diagonal(&self) -> Fr {
        alignment_diagonal(self.pattern_length, self.text_length)
    }

    /// The largest diagonal range any wavefront may track.
    #[inline]
    pub fn diagonal_limits(&self) -> (Fr, Fr) {
        (-self.pattern_length, self.text_length)
    }

    /// The highest score with allocated layers.
    pub fn max_score(&self) -> Option<Cost> {
        self.layers.len().checked_sub(1).map(|s| s as Cost)
    }

    /// Append the layers for the next score, and return its score.
    pub fn push(&mut self, layers: WavefrontLayers) -> Cost {
        self.layers.push(layers);
        self.layers.len() as Cost - 1
    }

    /// Drop the wavefronts of all scores below `s`. Their layers stay
    /// indexable, but are empty.
    pub fn forget_before(&mut self, s: Cost) {
        let end = usize::try_from(s).unwrap_or(0).min(self.layers.len());
        for layers in self.layers.iter_mut().take(end).skip(self.forgotten) {
            *layers = WavefrontLayers::default();
        }
        self.forgotten = self.forgotten.max(end);
    }

    /// The layers of score `s`. `None` for negative or not yet computed scores.
    #[inline]
    pub fn layers(&self, s: Cost) -> Option<&WavefrontLayers> {
        usize::try_from(s).ok().and_then(|s| self.layers.get(s))
    }

    #[inline]
    pub fn layers_mut(&mut self, s: Cost) -> Option<&mut WavefrontLayers> {
        usize::try_from(s).ok().and_then(|s| self.layers.get_mut(s))
    }

    /// The M wavefront of score `s`, when present and not null.
    #[inline]
    pub fn m(&self, s: Cost) -> Option<&Wavefront> {
        self.layers(s)?.m.as_ref().filter(|wf| !wf.is_null())
    }

    #[inline]
    pub fn i(&self, s: Cost) -> Option<&Wavefront> {
        self.layers(s)?.i.as_ref().filter(|wf| !wf.is_null())
    }

    #[inline]
    pub fn d(&self, s: Cost) -> Option<&Wavefront> {
        self.layers(s)?.d.as_ref().filter(|wf| !wf.is_null())
    }

    #[inline]
    pub fn m_mut(&mut self, s: Cost) -> Option<&mut Wavefront> {
        self.layers_mut(s)?.m.as_mut().filter(|wf| !wf.is_null())
    }

    /// True when the M wavefront of score `s` reaches the bottom right corner.
    pub fn reached_end(&self, s: Cost) -> bool {
        self.m(s)
            .map_or(false, |m| m.get(self.alignment_diagonal()) >= self.text_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_diagonals() {
        let mut wf = Wavefront::allocate(-3, 2);
        assert_eq!(wf.len(), 6);
        assert!(wf.offsets().iter().all(|&o| o == OFFSET_NULL));
        wf[-3] = 1;
        wf[2] = 5;
        assert_eq!(wf.get(-3), 1);
        assert_eq!(wf.get(2), 5);
        assert_eq!(wf.get(3), OFFSET_NULL);
        assert_eq!(wf.get(-4), OFFSET_NULL);
        assert_eq!(wf.offsets().first(), Some(&1));
        assert_eq!(wf.offsets().last(), Some(&5));
    }

    #[test]
    fn restrict_only_shrinks() {
        let mut wf = Wavefront::from_offsets(-2, &[0, 1, 2, 3, 4]);
        wf.restrict(-5, 1);
        assert_eq!(wf.range(), -2..=1);
        wf.restrict(0, 10);
        assert_eq!(wf.range(), 0..=1);
        assert_eq!(wf.offsets(), &[2, 3]);
        // Offsets outside the window are no longer visible.
        assert_eq!(wf.get(-1), OFFSET_NULL);
        wf.restrict(2, 2);
        assert!(wf.is_null());
        assert_eq!(wf.len(), 0);
        assert_eq!(wf.offsets(), &[] as &[Fr]);
        // Null is final.
        wf.restrict(-10, 10);
        assert!(wf.is_null());
    }

    #[test]
    fn set_indexing() {
        let mut set = WavefrontSet::new(4, 6);
        assert_eq!(set.max_score(), None);
        assert_eq!(set.alignment_diagonal(), 2);
        assert_eq!(set.push(WavefrontLayers::start()), 0);
        assert_eq!(set.push(WavefrontLayers::default()), 1);
        assert!(set.m(0).is_some());
        assert!(set.m(1).is_none());
        assert!(set.m(-1).is_none());
        assert!(set.m(2).is_none());
        assert!(set.layers(1).unwrap().is_empty());
        assert_eq!(set.max_score(), Some(1));
        assert!(!set.reached_end(0));
    }

    #[test]
    fn forget_before() {
        let mut set = WavefrontSet::new(4, 4);
        for _ in 0..4 {
            set.push(WavefrontLayers::start());
        }
        set.forget_before(-3);
        assert!(set.m(0).is_some());
        set.forget_before(2);
        assert!(set.m(0).is_none() && set.m(1).is_none());
        assert!(set.m(2).is_some() && set.m(3).is_some());
        // Scores past the end are clamped, and the set can still grow.
        set.forget_before(10);
        assert!(set.m(3).is_none());
        assert_eq!(set.push(WavefrontLayers::start()), 4);
        assert!(set.m(4).is_some());
        assert_eq!(set.max_score(), Some(4));
    }
}
