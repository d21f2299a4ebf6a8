//! Types shared by the wavefront crates: gap-affine penalties, the diagonal
//! reduction configuration, and the error type for invalid configurations.

pub mod error;
pub mod penalties;
pub mod reduction;

// Re-export types for convenience of `use wfa_types::*;`.
pub use error::*;
pub use penalties::*;
pub use reduction::*;

/// The type of diagonal indices and offsets along them.
/// Signed, so that diagonals below the main diagonal and unreachable offsets
/// can be represented.
pub type Fr = i32;
