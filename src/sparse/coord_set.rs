//! Reusable deduper for the active-coordinate frontier of a sparse step.
//!
//! Open-addressed linear-probing set of `(i64, i64)` keys. Slots are cleared
//! lazily by an epoch stamp, so each step starts a fresh set without touching
//! the backing array. Keys are also appended to a dense list in insertion
//! order, which is what the step iterates.

use crate::universe::Coord;

const LOAD_NUM: usize = 3;
const LOAD_DEN: usize = 4;

#[derive(Clone, Copy)]
struct Slot {
    x: i64,
    y: i64,
    stamp: u32,
}

impl Slot {
    const EMPTY: Self = Self {
        x: 0,
        y: 0,
        stamp: 0,
    };
}

#[inline(always)]
fn coord_hash(x: i64, y: i64) -> u64 {
    const MX: u64 = 0x517c_c1b7_2722_0a95;
    const MY: u64 = 0x6c62_272e_07bb_0142;
    let hx = (x as u64).wrapping_mul(MX);
    let hy = (y as u64).wrapping_mul(MY);
    hx ^ hy.rotate_right(32)
}

#[inline]
fn slots_for(keys: usize) -> usize {
    keys.saturating_mul(LOAD_DEN)
        .div_ceil(LOAD_NUM)
        .next_power_of_two()
        .max(16)
}

pub struct CoordSet {
    slots: Vec<Slot>,
    mask: usize,
    stamp: u32,
    keys: Vec<Coord>,
}

impl CoordSet {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(cap: usize) -> Self {
        let slots = slots_for(cap);
        Self {
            slots: vec![Slot::EMPTY; slots],
            mask: slots - 1,
            stamp: 1,
            keys: Vec::with_capacity(cap),
        }
    }

    /// Forget every key in O(1) (amortized; a stamp wrap clears all slots).
    pub fn begin_step(&mut self) {
        self.keys.clear();
        self.stamp = self.stamp.wrapping_add(1);
        if self.stamp == 0 {
            self.stamp = 1;
            for slot in &mut self.slots {
                slot.stamp = 0;
            }
        }
    }

    pub fn reserve_for(&mut self, keys: usize) {
        if keys == 0 {
            return;
        }
        let needed = slots_for(keys);
        if needed > self.slots.len() {
            self.resize(needed);
        }
        self.keys.reserve(keys.saturating_sub(self.keys.len()));
    }

    #[inline(always)]
    fn needs_grow(&self) -> bool {
        self.keys.len() * LOAD_DEN >= self.slots.len() * LOAD_NUM
    }

    fn resize(&mut self, new_slots: usize) {
        debug_assert!(new_slots.is_power_of_two());
        self.slots = vec![Slot::EMPTY; new_slots];
        self.mask = new_slots - 1;
        for i in 0..self.keys.len() {
            let (x, y) = self.keys[i];
            let pos = self.probe(x, y);
            self.slots[pos] = Slot {
                x,
                y,
                stamp: self.stamp,
            };
        }
    }

    /// Slot holding `(x, y)` this step, or the empty slot where it belongs.
    #[inline(always)]
    fn probe(&self, x: i64, y: i64) -> usize {
        let mut pos = coord_hash(x, y) as usize & self.mask;
        loop {
            let slot = &self.slots[pos];
            if slot.stamp != self.stamp || (slot.x == x && slot.y == y) {
                return pos;
            }
            pos = (pos + 1) & self.mask;
        }
    }

    /// Insert a coordinate.
    /// Returns `true` if newly inserted, `false` if it already existed.
    #[inline]
    pub fn insert(&mut self, x: i64, y: i64) -> bool {
        if self.needs_grow() {
            self.resize((self.slots.len() * 2).max(16));
        }

        let pos = self.probe(x, y);
        if self.slots[pos].stamp == self.stamp {
            return false;
        }
        self.slots[pos] = Slot {
            x,
            y,
            stamp: self.stamp,
        };
        self.keys.push((x, y));
        true
    }

    /// Keys inserted since the last `begin_step`, in insertion order.
    pub fn keys(&self) -> &[Coord] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}
