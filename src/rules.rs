//! Survive/birth thresholds and the per-step lookup table built from them.

use std::fmt;
use std::str::FromStr;

use crate::error::LifeError;

/// Size of the Moore neighborhood, and so the largest meaningful threshold.
pub const MAX_NEIGHBORS: u8 = 8;

/// Three thresholds that decide the next state of a cell.
///
/// A live cell survives when its live-neighbor count lies in
/// `survive_min..=survive_max`; a dead cell is born when the count equals
/// `birth_count`. Nothing ties `birth_count` to the survival range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleSet {
    pub survive_min: u8,
    pub survive_max: u8,
    pub birth_count: u8,
}

impl RuleSet {
    /// Conway's Game of Life, B3/S23.
    pub const CONWAY: Self = Self {
        survive_min: 2,
        survive_max: 3,
        birth_count: 3,
    };

    /// Build a rule set, rejecting thresholds that fail [`RuleSet::validate`].
    pub fn new(survive_min: u8, survive_max: u8, birth_count: u8) -> Result<Self, LifeError> {
        let rules = Self {
            survive_min,
            survive_max,
            birth_count,
        };
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), LifeError> {
        if self.survive_min > self.survive_max {
            return Err(LifeError::InvalidRule(format!(
                "survive_min {} exceeds survive_max {}",
                self.survive_min, self.survive_max
            )));
        }
        for (name, value) in [
            ("survive_min", self.survive_min),
            ("survive_max", self.survive_max),
            ("birth_count", self.birth_count),
        ] {
            if value > MAX_NEIGHBORS {
                return Err(LifeError::InvalidRule(format!(
                    "{name} {value} exceeds the {MAX_NEIGHBORS}-cell neighborhood"
                )));
            }
        }
        Ok(())
    }

    /// Next state of a cell given its current state and live-neighbor count.
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            (self.survive_min..=self.survive_max).contains(&neighbors)
        } else {
            neighbors == self.birth_count
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::CONWAY
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S", self.birth_count)?;
        for n in self.survive_min..=self.survive_max {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// Parses `B3/S23`-style rulestrings (either order, any case) as well as the
/// bare `23/3` survive/birth form.
///
/// Only rules expressible as one birth count and one contiguous survival
/// range are accepted.
impl FromStr for RuleSet {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |why: &str| LifeError::InvalidRule(format!("{s:?}: {why}"));

        let (left, right) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| invalid("expected two fields separated by '/'"))?;

        let (birth, survive) = match (tagged(left), tagged(right)) {
            (Some(('B', b)), Some(('S', sv))) | (Some(('S', sv)), Some(('B', b))) => (b, sv),
            (None, None) => (right, left),
            _ => return Err(invalid("expected one B field and one S field")),
        };

        let birth = digit_mask(birth).ok_or_else(|| invalid("neighbor counts must be digits 0-8"))?;
        let survive =
            digit_mask(survive).ok_or_else(|| invalid("neighbor counts must be digits 0-8"))?;

        if birth.count_ones() != 1 {
            return Err(invalid("exactly one birth count is supported"));
        }
        if survive == 0 {
            return Err(invalid("at least one survival count is required"));
        }
        let survive_min = survive.trailing_zeros() as u8;
        let survive_max = (15 - survive.leading_zeros()) as u8;
        let run = survive >> survive_min;
        if run & (run + 1) != 0 {
            return Err(invalid("survival counts must form one contiguous range"));
        }

        RuleSet::new(survive_min, survive_max, birth.trailing_zeros() as u8)
    }
}

fn tagged(field: &str) -> Option<(char, &str)> {
    let mut chars = field.chars();
    let tag = chars.next()?.to_ascii_uppercase();
    matches!(tag, 'B' | 'S').then(|| (tag, chars.as_str()))
}

fn digit_mask(digits: &str) -> Option<u16> {
    let mut mask = 0u16;
    for c in digits.chars() {
        let n = c.to_digit(10).filter(|&n| n <= MAX_NEIGHBORS as u32)?;
        mask |= 1 << n;
    }
    Some(mask)
}

/// Next-state lookup indexed by `[alive][neighbors]`.
///
/// Rebuilt whenever an engine's rules change so `step` does a single table
/// read per cell.
#[derive(Clone, Debug)]
pub struct RuleTable {
    table: [[bool; MAX_NEIGHBORS as usize + 1]; 2],
}

impl RuleTable {
    pub fn new(rules: &RuleSet) -> Self {
        let mut table = [[false; MAX_NEIGHBORS as usize + 1]; 2];
        for (alive, row) in table.iter_mut().enumerate() {
            for (neighbors, out) in row.iter_mut().enumerate() {
                *out = rules.next_state(alive == 1, neighbors as u8);
            }
        }
        Self { table }
    }

    #[inline(always)]
    pub fn lookup(&self, alive: bool, neighbors: u8) -> bool {
        self.table[alive as usize][neighbors as usize]
    }
}
