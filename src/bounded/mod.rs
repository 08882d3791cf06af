//! Bounded dense engine: a fixed `width x height` grid, optionally a torus.

mod engine;
mod grid;

pub use engine::{BoundedLife, BoundedLifeConfig};
