//! Score-only gap-affine wavefront alignment.
//!
//! For `s = 0, 1, 2, ...`: compute the wavefronts of score `s` from the lower
//! scores, extend the M wavefront along matches, reduce the band, and stop as
//! soon as M reaches the bottom right corner. No traceback is stored, so only
//! the score is returned.
use crate::compute::compute_next;
use crate::extend::{extend_wavefronts, ExtendStrategy};
use crate::reduction::reduce_wavefronts;
use crate::stats::WavefrontStats;
use crate::wavefront::{WavefrontLayers, WavefrontSet};
use log::{debug, trace};
use pa_types::{Aligner, Cigar, Cost, Seq};
use std::cmp::max;
use wfa_types::{AffinePenalties, ReductionConfig, Result};

/// Settings for the aligner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct WavefrontAligner {
    pub penalties: AffinePenalties,
    pub reduction: ReductionConfig,
    pub extend: ExtendStrategy,
}

impl WavefrontAligner {
    pub fn new(penalties: AffinePenalties, reduction: ReductionConfig) -> Self {
        Self {
            penalties,
            reduction,
            extend: ExtendStrategy::default(),
        }
    }

    /// As [`WavefrontAligner::new`], but rejects penalties and reduction
    /// settings that were assembled field by field or deserialized without
    /// going through their validating constructors.
    pub fn try_new(penalties: AffinePenalties, reduction: ReductionConfig) -> Result<Self> {
        penalties.validate()?;
        reduction.validate()?;
        Ok(Self::new(penalties, reduction))
    }

    /// Edit distance, without reduction.
    pub fn unit() -> Self {
        Self::new(AffinePenalties::unit(), ReductionConfig::none())
    }

    pub fn with_extend(self, extend: ExtendStrategy) -> Self {
        Self { extend, ..self }
    }

    /// Set up the wavefronts for aligning `pattern` to `text`.
    pub fn build<'a>(&self, pattern: Seq<'a>, text: Seq<'a>) -> WavefrontInstance<'a> {
        WavefrontInstance {
            pattern,
            text,
            params: *self,
            wavefronts: WavefrontSet::new(pattern.len(), text.len()),
            stats: WavefrontStats::init(pattern, text),
        }
    }

    /// The score of aligning `pattern` to `text`.
    /// Optimal when the reduction is disabled, an upper bound otherwise.
    pub fn cost(&self, pattern: Seq, text: Seq) -> Cost {
        self.cost_with_stats(pattern, text).0
    }

    pub fn cost_with_stats(&self, pattern: Seq, text: Seq) -> (Cost, WavefrontStats) {
        let mut instance = self.build(pattern, text);
        let cost = instance
            .align_for_bounded_dist(None)
            .unwrap_or_else(|| unreachable!("an unbounded alignment always reaches the end"));
        (cost, instance.stats)
    }

    /// The score when it is at most `s_max`, and `None` otherwise.
    pub fn cost_for_bounded_dist(&self, pattern: Seq, text: Seq, s_max: Cost) -> Option<Cost> {
        self.build(pattern, text).align_for_bounded_dist(Some(s_max))
    }
}

impl Aligner for WavefrontAligner {
    fn align(&mut self, a: Seq, b: Seq) -> (Cost, Option<Cigar>) {
        (self.cost(a, b), None)
    }
}

/// The state of a single alignment.
pub struct WavefrontInstance<'a> {
    pub pattern: Seq<'a>,
    pub text: Seq<'a>,
    pub params: WavefrontAligner,
    /// Wavefronts indexed by score. Only the last `max_step` scores are kept.
    pub wavefronts: WavefrontSet,
    pub stats: WavefrontStats,
}

impl<'a> WavefrontInstance<'a> {
    /// Extend the M wavefront of score `s` and reduce the layers of `s`.
    /// Returns true when the end is reached.
    fn extend_and_reduce(&mut self, s: Cost) -> bool {
        if let Some(m) = self.wavefronts.m(s) {
            let width = m.len() as usize;
            self.stats.extended_diagonals += width;
            self.stats.max_band_width = max(self.stats.max_band_width, width);
        }
        self.stats.matched_chars += extend_wavefronts(
            &mut self.wavefronts,
            self.pattern,
            self.text,
            s,
            self.params.extend,
        );

        let pruned = reduce_wavefronts(
            &mut self.wavefronts,
            self.pattern.len() as _,
            self.text.len() as _,
            s,
            &self.params.reduction,
        );
        if pruned > 0 {
            self.stats.reductions += 1;
            self.stats.pruned_diagonals += pruned;
        }

        self.wavefronts.reached_end(s)
    }

    /// Compute, extend and reduce the next score.
    /// Returns the score and whether the end was reached.
    fn next_score(&mut self) -> (Cost, bool) {
        let s = self.wavefronts.max_score().map_or(0, |s| s + 1);
        let layers = if s == 0 {
            WavefrontLayers::start()
        } else {
            compute_next(&self.wavefronts, &self.params.penalties, s)
        };
        if !layers.is_empty() {
            self.stats.layers += 1;
        }
        self.wavefronts.push(layers);
        let done = self.extend_and_reduce(s);
        if let Some(m) = self.wavefronts.m(s) {
            trace!("s={s}: M {:?}", m.range());
        }
        // Score s+1 reads back at most max_step scores.
        self.wavefronts.forget_before(s + 1 - self.params.penalties.max_step());
        (s, done)
    }

    /// Run until the end is reached, or until all scores up to `s_max` are
    /// exhausted. Can be resumed with a larger `s_max`.
    pub fn align_for_bounded_dist(&mut self, s_max: Option<Cost>) -> Option<Cost> {
        if let Some(s) = self.wavefronts.max_score() {
            if self.wavefronts.reached_end(s) {
                return Some(s);
            }
        }
        loop {
            let next = self.wavefronts.max_score().map_or(0, |s| s + 1);
            if s_max.map_or(false, |s_max| next > s_max) {
                return None;
            }
            let (s, done) = self.next_score();
            if done {
                self.stats.score = s;
                debug!(
                    "Aligned {} x {} with score {s}: {}",
                    self.pattern.len(),
                    self.text.len(),
                    self.stats
                );
                return Some(s);
            }
        }
    }
}
