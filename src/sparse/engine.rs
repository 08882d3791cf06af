//! Unbounded sparse engine: only live coordinates are stored.

use std::cell::Cell;
use std::collections::HashSet;

use log::{debug, trace};

use super::bounds::Bounds;
use super::coord_set::CoordSet;
use crate::error::LifeError;
use crate::neighbors::{MOORE_OFFSETS, count_sparse};
use crate::rules::{RuleSet, RuleTable};
use crate::universe::{Coord, Universe};

#[derive(Clone, Copy, Debug)]
enum BoundsCache {
    Stale,
    Fresh(Option<Bounds>),
}

pub struct SparseLife {
    live: HashSet<Coord>,
    /// Back buffer for the next generation, kept to reuse its allocation.
    next: HashSet<Coord>,
    /// Active coordinates of the step in progress.
    frontier: CoordSet,
    rules: RuleSet,
    table: RuleTable,
    generation: u64,
    bounds_cache: Cell<BoundsCache>,
}

impl Default for SparseLife {
    fn default() -> Self {
        Self::new()
    }
}

impl SparseLife {
    /// An empty plane under Conway rules.
    pub fn new() -> Self {
        let rules = RuleSet::default();
        Self {
            live: HashSet::new(),
            next: HashSet::new(),
            frontier: CoordSet::new(),
            rules,
            table: RuleTable::new(&rules),
            generation: 0,
            bounds_cache: Cell::new(BoundsCache::Fresh(None)),
        }
    }

    /// An empty plane under explicit rules.
    pub fn with_rules(rules: RuleSet) -> Result<Self, LifeError> {
        let mut engine = Self::new();
        engine.set_rules(rules)?;
        Ok(engine)
    }

    #[inline]
    fn invalidate_bounds(&self) {
        self.bounds_cache.set(BoundsCache::Stale);
    }

    /// Flip one cell. Every `i64` pair is a valid coordinate.
    pub fn toggle(&mut self, x: i64, y: i64) {
        if !self.live.remove(&(x, y)) {
            self.live.insert((x, y));
        }
        self.invalidate_bounds();
    }

    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) {
        let changed = if alive {
            self.live.insert((x, y))
        } else {
            self.live.remove(&(x, y))
        };
        if changed {
            self.invalidate_bounds();
        }
    }

    /// Batch-set many live cells.
    pub fn set_cells_alive<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Coord>,
    {
        self.live.extend(cells);
        self.invalidate_bounds();
    }

    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.live.contains(&(x, y))
    }

    /// Advance one generation.
    ///
    /// Only live cells and their neighbors can be alive next, so those are
    /// the only coordinates evaluated. An empty plane is left untouched and
    /// its generation counter does not move.
    pub fn step(&mut self) {
        if self.live.is_empty() {
            return;
        }

        self.frontier.begin_step();
        self.frontier.reserve_for(self.live.len() * 9);
        for &(x, y) in &self.live {
            self.frontier.insert(x, y);
            for (dx, dy) in MOORE_OFFSETS {
                if let (Some(nx), Some(ny)) = (x.checked_add(dx), y.checked_add(dy)) {
                    self.frontier.insert(nx, ny);
                }
            }
        }

        let live = &self.live;
        self.next.clear();
        for &(x, y) in self.frontier.keys() {
            let neighbors = count_sparse(x, y, |nx, ny| live.contains(&(nx, ny)));
            if self.table.lookup(live.contains(&(x, y)), neighbors) {
                self.next.insert((x, y));
            }
        }

        std::mem::swap(&mut self.live, &mut self.next);
        self.generation += 1;
        self.invalidate_bounds();
        trace!(
            "sparse generation {} population {} active {}",
            self.generation,
            self.live.len(),
            self.frontier.len()
        );
    }

    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    pub fn clear(&mut self) {
        self.live.clear();
        self.next.clear();
        self.generation = 0;
        self.bounds_cache.set(BoundsCache::Fresh(None));
        debug!("sparse plane cleared");
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Replace the active rules from the next step on.
    pub fn set_rules(&mut self, rules: RuleSet) -> Result<(), LifeError> {
        rules.validate()?;
        self.rules = rules;
        self.table = RuleTable::new(&rules);
        debug!("sparse rules set to {rules}");
        Ok(())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> u64 {
        self.live.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Smallest rectangle covering every live cell, `None` when the plane is
    /// empty. Cached until the next mutation.
    pub fn bounds(&self) -> Option<Bounds> {
        if let BoundsCache::Fresh(bounds) = self.bounds_cache.get() {
            return bounds;
        }
        let bounds = Bounds::of(self.live.iter().copied());
        self.bounds_cache.set(BoundsCache::Fresh(bounds));
        bounds
    }

    /// Live cells in unspecified order. The borrow pins the engine, so the
    /// sequence is a consistent snapshot and can be restarted by calling
    /// this again.
    pub fn live_coordinates(&self) -> impl Iterator<Item = Coord> + '_ {
        self.live.iter().copied()
    }

    pub fn for_each_live<F: FnMut(i64, i64)>(&self, mut f: F) {
        for &(x, y) in &self.live {
            f(x, y);
        }
    }
}

impl Universe for SparseLife {
    fn toggle(&mut self, x: i64, y: i64) -> Result<(), LifeError> {
        SparseLife::toggle(self, x, y);
        Ok(())
    }

    fn set_cell(&mut self, x: i64, y: i64, alive: bool) -> Result<(), LifeError> {
        SparseLife::set_cell(self, x, y, alive);
        Ok(())
    }

    fn is_alive(&self, x: i64, y: i64) -> bool {
        self.live.contains(&(x, y))
    }

    fn step(&mut self) {
        SparseLife::step(self)
    }

    fn clear(&mut self) {
        SparseLife::clear(self)
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn population(&self) -> u64 {
        self.live.len() as u64
    }

    fn rules(&self) -> RuleSet {
        self.rules
    }

    fn set_rules(&mut self, rules: RuleSet) -> Result<(), LifeError> {
        SparseLife::set_rules(self, rules)
    }

    fn for_each_live(&self, f: &mut dyn FnMut(i64, i64)) {
        SparseLife::for_each_live(self, f)
    }
}
