//! The capability set shared by both engines.

use crate::error::LifeError;
use crate::rules::RuleSet;

/// A cell coordinate. Unrestricted on the sparse engine, confined to
/// `[0, width) x [0, height)` on the bounded one.
pub type Coord = (i64, i64);

/// What a driver (timer loop, UI, benchmark) needs from an engine.
///
/// Both engines expose the same operations as inherent methods; this trait
/// lets a driver pick one at construction time and hold it as
/// `Box<dyn Universe>`.
pub trait Universe {
    /// Flip one cell. Fails only on a bounded grid, for a coordinate
    /// outside it.
    fn toggle(&mut self, x: i64, y: i64) -> Result<(), LifeError>;

    /// Force one cell alive or dead, with the same bounds contract as
    /// [`Universe::toggle`].
    fn set_cell(&mut self, x: i64, y: i64, alive: bool) -> Result<(), LifeError>;

    fn is_alive(&self, x: i64, y: i64) -> bool;

    /// Advance one generation with synchronous update semantics.
    fn step(&mut self);

    fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Kill every cell and reset the generation counter.
    fn clear(&mut self);

    fn generation(&self) -> u64;

    fn population(&self) -> u64;

    fn rules(&self) -> RuleSet;

    /// Replace the active rules; they apply from the next step.
    fn set_rules(&mut self, rules: RuleSet) -> Result<(), LifeError>;

    /// Visit every live cell once, in no particular order.
    fn for_each_live(&self, f: &mut dyn FnMut(i64, i64));
}
