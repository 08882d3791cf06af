//! Unbounded sparse engine: a hash set of live coordinates on the `i64` plane.

mod bounds;
mod coord_set;
mod engine;

pub use bounds::Bounds;
pub use engine::SparseLife;
