//! Error type shared by both engines and the rule model.

use thiserror::Error;

/// Errors reported by engine construction and mutation.
///
/// Every fallible operation validates its input before touching engine
/// state, so receiving one of these never leaves an engine half-updated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A bounded grid was requested with a zero side, or with more cells
    /// than a dense buffer can address.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// A bounded grid was addressed outside `[0, width) x [0, height)`.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    /// Rule thresholds violate ordering or range, or a rulestring could not
    /// be expressed as survive/birth thresholds.
    #[error("invalid rule: {0}")]
    InvalidRule(String),
}
