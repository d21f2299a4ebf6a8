//! Gap-affine penalties.
//!
//! Matches are free. A mismatch costs `mismatch`, and a gap of length `l`
//! (an insertion or a deletion run) costs `gap_opening + l * gap_extension`.

use crate::{Result, WfaError};
use pa_types::{Cost, CostModel};
use serde::{Deserialize, Serialize};
use std::cmp::max;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AffinePenalties {
    pub mismatch: Cost,
    pub gap_opening: Cost,
    pub gap_extension: Cost,
}

/// The default WFA penalties (x=4, o=6, e=2).
impl Default for AffinePenalties {
    fn default() -> Self {
        Self {
            mismatch: 4,
            gap_opening: 6,
            gap_extension: 2,
        }
    }
}

impl AffinePenalties {
    /// Mismatches and gap extensions must be strictly positive, so that every
    /// edit strictly increases the score. The gap opening may be 0, which
    /// gives a linear gap cost.
    pub fn new(mismatch: Cost, gap_opening: Cost, gap_extension: Cost) -> Result<Self> {
        if mismatch <= 0 {
            return Err(WfaError::InvalidPenalty {
                name: "mismatch",
                value: mismatch,
                reason: "must be positive",
            });
        }
        if gap_opening < 0 {
            return Err(WfaError::InvalidPenalty {
                name: "gap_opening",
                value: gap_opening,
                reason: "must be non-negative",
            });
        }
        if gap_extension <= 0 {
            return Err(WfaError::InvalidPenalty {
                name: "gap_extension",
                value: gap_extension,
                reason: "must be positive",
            });
        }
        Ok(Self {
            mismatch,
            gap_opening,
            gap_extension,
        })
    }

    /// Unit costs: the score is the edit distance.
    pub fn unit() -> Self {
        Self {
            mismatch: 1,
            gap_opening: 0,
            gap_extension: 1,
        }
    }

    /// Linear gap costs: `sub` per mismatch and `indel` per gap character.
    pub fn linear(sub: Cost, indel: Cost) -> Result<Self> {
        Self::new(sub, 0, indel)
    }

    /// The cost of opening a gap and extending it by one character.
    #[inline]
    pub fn gap_open_extend(&self) -> Cost {
        self.gap_opening + self.gap_extension
    }

    /// The cost of a gap of length `len`. Empty gaps are free.
    pub fn gap_cost(&self, len: usize) -> Cost {
        if len == 0 {
            0
        } else {
            self.gap_opening + len as Cost * self.gap_extension
        }
    }

    /// The largest score difference the recurrence looks back over.
    /// Wavefronts more than this many scores old are never read again.
    pub fn max_step(&self) -> Cost {
        max(self.mismatch, self.gap_open_extend())
    }

    /// Re-check the invariants of [`AffinePenalties::new`], for values that
    /// were deserialized or assembled field by field.
    pub fn validate(&self) -> Result<()> {
        Self::new(self.mismatch, self.gap_opening, self.gap_extension).map(|_| ())
    }
}

impl TryFrom<CostModel> for AffinePenalties {
    type Error = WfaError;

    fn try_from(CostModel { sub, open, extend }: CostModel) -> Result<Self> {
        AffinePenalties::new(sub, open, extend)
    }
}
