use pa_types::Cost;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WfaError>;

/// Errors for configurations the wavefront aligner cannot run with.
///
/// The alignment itself never fails: empty wavefronts and skipped reductions
/// are regular states, not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WfaError {
    #[error("invalid penalty {name}={value}: {reason}")]
    InvalidPenalty {
        name: &'static str,
        value: Cost,
        reason: &'static str,
    },
    #[error("invalid reduction setting {name}={value}: must be non-negative")]
    InvalidReduction { name: &'static str, value: i64 },
}
