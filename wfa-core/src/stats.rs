use derive_more::AddAssign;
use pa_types::{Cost, Seq};
use std::fmt::Display;

#[derive(Default, Clone, Copy, AddAssign, Debug, PartialEq, Eq)]
pub struct WavefrontStats {
    pub len_pattern: usize,
    pub len_text: usize,
    /// The computed score. 0 when the alignment was cut off.
    pub score: Cost,
    /// Number of scores with at least one wavefront.
    pub layers: usize,
    /// Number of diagonals the extension ran on.
    pub extended_diagonals: usize,
    /// Characters skipped through by greedy matching.
    pub matched_chars: usize,
    /// Number of scores at which the reduction dropped diagonals.
    pub reductions: usize,
    /// Total number of diagonals dropped by the reduction.
    pub pruned_diagonals: usize,
    /// Largest number of diagonals in any M wavefront.
    pub max_band_width: usize,
}

impl WavefrontStats {
    pub fn init(pattern: Seq, text: Seq) -> Self {
        Self {
            len_pattern: pattern.len(),
            len_text: text.len(),
            ..Default::default()
        }
    }
}

impl Display for WavefrontStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n {:>7} m {:>7} s {:>6} layers {:>6} ext {:>9} match {:>9} red {:>5} pruned {:>7} band {:>6}",
            self.len_pattern,
            self.len_text,
            self.score,
            self.layers,
            self.extended_diagonals,
            self.matched_chars,
            self.reductions,
            self.pruned_diagonals,
            self.max_band_width,
        )
    }
}
