//! Fixed-size dense engine with optional toroidal wraparound.

use log::{debug, trace};

use super::grid::CellGrid;
use crate::error::LifeError;
use crate::neighbors::{Topology, count_bounded};
use crate::rules::{RuleSet, RuleTable};
use crate::universe::{Coord, Universe};

/// Configuration for a [`BoundedLife`] instance.
///
/// Start from `BoundedLifeConfig::new(width, height)` and adjust the rest
/// via the builder methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedLifeConfig {
    pub width: usize,
    pub height: usize,
    /// Connect opposite edges so the grid behaves as a torus.
    pub wrap: bool,
    /// Initial rules; validated when the engine is built.
    pub rules: RuleSet,
}

impl BoundedLifeConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            wrap: false,
            rules: RuleSet::default(),
        }
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }
}

pub struct BoundedLife {
    grid: CellGrid,
    topology: Topology,
    rules: RuleSet,
    table: RuleTable,
    generation: u64,
    population: u64,
}

impl BoundedLife {
    /// Create an all-dead `width x height` grid under Conway rules.
    pub fn new(width: usize, height: usize, wrap: bool) -> Result<Self, LifeError> {
        Self::with_config(BoundedLifeConfig::new(width, height).wrap(wrap))
    }

    /// Create a grid from an explicit configuration.
    pub fn with_config(config: BoundedLifeConfig) -> Result<Self, LifeError> {
        let BoundedLifeConfig {
            width,
            height,
            wrap,
            rules,
        } = config;

        // Coordinates are reported as i64, so every cell index must fit one.
        let fits = width
            .checked_mul(height)
            .is_some_and(|len| i64::try_from(len).is_ok());
        if width == 0 || height == 0 || !fits {
            return Err(LifeError::InvalidDimension { width, height });
        }
        rules.validate()?;

        debug!("bounded grid {width}x{height} wrap={wrap} rules={rules}");
        Ok(Self {
            grid: CellGrid::new(width, height),
            topology: Topology {
                width,
                height,
                wrap,
            },
            rules,
            table: RuleTable::new(&rules),
            generation: 0,
            population: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.topology.width
    }

    pub fn height(&self) -> usize {
        self.topology.height
    }

    pub fn wraps(&self) -> bool {
        self.topology.wrap
    }

    /// Map a signed coordinate to a grid cell, rejecting anything off-grid.
    fn locate(&self, x: i64, y: i64) -> Result<(usize, usize), LifeError> {
        let Topology { width, height, .. } = self.topology;
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(cx), Ok(cy)) if cx < width && cy < height => Ok((cx, cy)),
            _ => Err(LifeError::OutOfBounds {
                x,
                y,
                width,
                height,
            }),
        }
    }

    pub fn toggle(&mut self, x: i64, y: i64) -> Result<(), LifeError> {
        let (cx, cy) = self.locate(x, y)?;
        let alive = !self.grid.get(cx, cy);
        self.write(cx, cy, alive);
        Ok(())
    }

    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) -> Result<(), LifeError> {
        let (cx, cy) = self.locate(x, y)?;
        self.write(cx, cy, alive);
        Ok(())
    }

    #[inline]
    fn write(&mut self, x: usize, y: usize, alive: bool) {
        let was = self.grid.replace(x, y, alive);
        match (was, alive) {
            (false, true) => self.population += 1,
            (true, false) => self.population -= 1,
            _ => {}
        }
    }

    /// Cell state for rendering. Off-grid coordinates read as dead.
    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.locate(x, y)
            .is_ok_and(|(cx, cy)| self.grid.get(cx, cy))
    }

    pub fn step(&mut self) {
        let topology = self.topology;
        let width = topology.width;
        let table = &self.table;

        self.population = self.grid.advance(|x, y, front| {
            let neighbors = count_bounded(topology, x, y, |nx, ny| front[ny * width + nx]);
            table.lookup(front[y * width + x], neighbors)
        });
        self.generation += 1;
        trace!(
            "bounded generation {} population {}",
            self.generation, self.population
        );
    }

    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Kill every cell and reset the generation counter. Size, wrap and
    /// rules are kept.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.population = 0;
        debug!("bounded grid cleared");
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    pub fn set_rules(&mut self, rules: RuleSet) -> Result<(), LifeError> {
        rules.validate()?;
        self.rules = rules;
        self.table = RuleTable::new(&rules);
        debug!("bounded rules set to {rules}");
        Ok(())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn is_empty(&self) -> bool {
        self.population == 0
    }

    /// Live cells in row-major order.
    pub fn live_coordinates(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.topology.width;
        self.grid
            .current()
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| ((i % width) as i64, (i / width) as i64))
    }

    pub fn for_each_live<F: FnMut(i64, i64)>(&self, mut f: F) {
        for (x, y) in self.live_coordinates() {
            f(x, y);
        }
    }
}

impl Universe for BoundedLife {
    fn toggle(&mut self, x: i64, y: i64) -> Result<(), LifeError> {
        BoundedLife::toggle(self, x, y)
    }

    fn set_cell(&mut self, x: i64, y: i64, alive: bool) -> Result<(), LifeError> {
        BoundedLife::set_cell(self, x, y, alive)
    }

    fn is_alive(&self, x: i64, y: i64) -> bool {
        BoundedLife::is_alive(self, x, y)
    }

    fn step(&mut self) {
        BoundedLife::step(self)
    }

    fn clear(&mut self) {
        BoundedLife::clear(self)
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn population(&self) -> u64 {
        self.population
    }

    fn rules(&self) -> RuleSet {
        self.rules
    }

    fn set_rules(&mut self, rules: RuleSet) -> Result<(), LifeError> {
        BoundedLife::set_rules(self, rules)
    }

    fn for_each_live(&self, f: &mut dyn FnMut(i64, i64)) {
        BoundedLife::for_each_live(self, f)
    }
}
