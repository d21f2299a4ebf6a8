//! Configuration of the heuristic band reduction.

use crate::{Fr, Result, WfaError};
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

/// When to drop diagonals from a wavefront.
#[derive(Debug, PartialEq, Eq, Default, Clone, Copy, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReductionStrategy {
    /// Keep every diagonal. The computed score is optimal.
    #[default]
    None,
    /// After each extension, drop diagonals at the edges of the band that lag
    /// too far behind the diagonal closest to the end.
    /// The computed score is an upper bound on the optimal score.
    Dynamic,
}

fn default_min_wavefront_length() -> Fr {
    10
}
fn default_max_distance_threshold() -> Fr {
    50
}

/// Reduction arguments.
#[derive(Args, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[clap(next_help_heading = "Reduction")]
#[serde(deny_unknown_fields)]
pub struct ReductionConfig {
    #[clap(long = "reduction", default_value_t, value_enum, display_order = 20)]
    #[serde(default)]
    pub strategy: ReductionStrategy,

    /// Wavefronts with fewer diagonals than this are never reduced.
    #[clap(long, default_value_t = 10, value_name = "len", display_order = 20)]
    #[serde(default = "default_min_wavefront_length")]
    pub min_wavefront_length: Fr,

    /// Diagonals whose remaining distance to the end exceeds the minimum
    /// remaining distance by more than this are dropped.
    #[clap(long, default_value_t = 50, value_name = "cells", display_order = 20)]
    #[serde(default = "default_max_distance_threshold")]
    pub max_distance_threshold: Fr,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            strategy: ReductionStrategy::None,
            min_wavefront_length: default_min_wavefront_length(),
            max_distance_threshold: default_max_distance_threshold(),
        }
    }
}

impl ReductionConfig {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn dynamic(min_wavefront_length: Fr, max_distance_threshold: Fr) -> Self {
        Self {
            strategy: ReductionStrategy::Dynamic,
            min_wavefront_length,
            max_distance_threshold,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.strategy == ReductionStrategy::Dynamic
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_wavefront_length < 0 {
            return Err(WfaError::InvalidReduction {
                name: "min_wavefront_length",
                value: self.min_wavefront_length as i64,
            });
        }
        if self.max_distance_threshold < 0 {
            return Err(WfaError::InvalidReduction {
                name: "max_distance_threshold",
                value: self.max_distance_threshold as i64,
            });
        }
        Ok(())
    }
}
