//! Gap-affine wavefront alignment (WFA).
//!
//! The wavefronts of score `s` store, per diagonal `k = h - v`, the furthest
//! text position reachable with score `s`. This crate contains the two
//! engines that act on them after they are computed: the greedy extension
//! along matching characters, and the heuristic reduction of the band. A
//! score-only driver ties them to the gap-affine recurrence.

mod compute;

pub mod aligner;
pub mod cli;
pub mod extend;
pub mod reduction;
pub mod stats;
pub mod wavefront;

#[cfg(test)]
mod tests;

pub use aligner::{WavefrontAligner, WavefrontInstance};
pub use cli::WavefrontArgs;
pub use compute::compute_next;
pub use extend::{extend, extend_wavefronts, ExtendStrategy};
pub use reduction::{reduce_wavefront_offsets, reduce_wavefronts};
pub use stats::WavefrontStats;
pub use wavefront::{Wavefront, WavefrontLayers, WavefrontSet, OFFSET_NULL};

pub use wfa_types::{AffinePenalties, Fr, ReductionConfig, ReductionStrategy, WfaError};

/// Score of aligning `pattern` to `text` with the default penalties
/// (x=4, o=6, e=2) and without reduction.
pub fn wfa_affine(pattern: pa_types::Seq, text: pa_types::Seq) -> pa_types::Cost {
    WavefrontAligner::default().cost(pattern, text)
}
