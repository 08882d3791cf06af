//! Game of Life engines with configurable survive/birth rules.
//!
//! Two engines share one [`Universe`] capability set:
//! - [`BoundedLife`]: a dense fixed-size grid, optionally wrapping at the
//!   edges
//! - [`SparseLife`]: an unbounded plane that stores only live cells

pub mod bounded;
pub mod error;
pub mod neighbors;
pub mod rules;
pub mod sparse;
pub mod universe;

pub use bounded::{BoundedLife, BoundedLifeConfig};
pub use error::LifeError;
pub use rules::RuleSet;
pub use sparse::{Bounds, SparseLife};
pub use universe::{Coord, Universe};
