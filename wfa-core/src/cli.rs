use crate::aligner::WavefrontAligner;
use crate::extend::ExtendStrategy;
use clap::Parser;
use pa_types::Cost;
use serde::{Deserialize, Serialize};
use wfa_types::{AffinePenalties, ReductionConfig};

fn default_mismatch() -> Cost {
    AffinePenalties::default().mismatch
}
fn default_gap_open() -> Cost {
    AffinePenalties::default().gap_opening
}
fn default_gap_extend() -> Cost {
    AffinePenalties::default().gap_extension
}

/// Wavefront aligner arguments.
#[derive(Parser, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[clap(next_help_heading = "Wavefront")]
#[serde(deny_unknown_fields)]
pub struct WavefrontArgs {
    /// Cost of a mismatch.
    #[clap(short = 'x', long, default_value_t = 4, display_order = 10)]
    #[serde(default = "default_mismatch")]
    pub mismatch: Cost,

    /// Cost of opening a gap, on top of the extension cost of its first character.
    #[clap(short = 'o', long, default_value_t = 6, display_order = 10)]
    #[serde(default = "default_gap_open")]
    pub gap_open: Cost,

    /// Cost of each gap character.
    #[clap(short = 'e', long, default_value_t = 2, display_order = 10)]
    #[serde(default = "default_gap_extend")]
    pub gap_extend: Cost,

    /// How to compare characters when extending diagonals.
    #[clap(long, default_value_t, value_enum, display_order = 10)]
    #[serde(default)]
    pub extend: ExtendStrategy,

    #[clap(flatten)]
    #[serde(default)]
    pub reduction: ReductionConfig,
}

impl Default for WavefrontArgs {
    fn default() -> Self {
        Self {
            mismatch: default_mismatch(),
            gap_open: default_gap_open(),
            gap_extend: default_gap_extend(),
            extend: ExtendStrategy::default(),
            reduction: ReductionConfig::default(),
        }
    }
}

impl WavefrontArgs {
    pub fn penalties(&self) -> wfa_types::Result<AffinePenalties> {
        AffinePenalties::new(self.mismatch, self.gap_open, self.gap_extend)
    }

    /// Validate the arguments and build the aligner.
    pub fn build(&self) -> wfa_types::Result<WavefrontAligner> {
        let aligner = WavefrontAligner::try_new(self.penalties()?, self.reduction)?;
        Ok(aligner.with_extend(self.extend))
    }
}
