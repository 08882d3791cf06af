//! Double-buffered dense cell storage for the bounded engine.
//!
//! Two row-major buffers of `width * height` cells; `phase` names the one
//! that holds the current generation. A step reads the front buffer, writes
//! every cell of the back buffer, then flips `phase`, so no cell ever sees a
//! neighbor's next state.

#[derive(Clone, Debug)]
pub struct CellGrid {
    width: usize,
    height: usize,
    bufs: [Vec<bool>; 2],
    phase: usize,
}

impl CellGrid {
    /// Allocate an all-dead grid. The caller guarantees `width * height`
    /// does not overflow.
    pub fn new(width: usize, height: usize) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            bufs: [vec![false; len], vec![false; len]],
            phase: 0,
        }
    }

    #[inline(always)]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.bufs[self.phase][self.index(x, y)]
    }

    /// Write a cell of the current generation, returning its previous state.
    #[inline]
    pub fn replace(&mut self, x: usize, y: usize, alive: bool) -> bool {
        let i = self.index(x, y);
        std::mem::replace(&mut self.bufs[self.phase][i], alive)
    }

    pub fn current(&self) -> &[bool] {
        &self.bufs[self.phase]
    }

    /// Fill the back buffer from `next(x, y, front)` and make it current.
    ///
    /// Returns the number of live cells written.
    pub fn advance<F>(&mut self, mut next: F) -> u64
    where
        F: FnMut(usize, usize, &[bool]) -> bool,
    {
        let width = self.width;
        let [a, b] = &mut self.bufs;
        let (front, back) = if self.phase == 0 {
            (a.as_slice(), b.as_mut_slice())
        } else {
            (b.as_slice(), a.as_mut_slice())
        };

        let mut live = 0u64;
        for (i, out) in back.iter_mut().enumerate() {
            let alive = next(i % width, i / width, front);
            *out = alive;
            live += alive as u64;
        }
        self.phase ^= 1;
        live
    }

    pub fn clear(&mut self) {
        for buf in &mut self.bufs {
            buf.fill(false);
        }
        self.phase = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::CellGrid;

    #[test]
    fn advance_reads_front_and_swaps() {
        let mut grid = CellGrid::new(3, 2);
        grid.replace(0, 0, true);

        // Shift every cell one column right; reads must see the old buffer.
        let live = grid.advance(|x, y, front| x > 0 && front[y * 3 + x - 1]);
        assert_eq!(live, 1);
        assert!(!grid.get(0, 0));
        assert!(grid.get(1, 0));

        let live = grid.advance(|x, y, front| x > 0 && front[y * 3 + x - 1]);
        assert_eq!(live, 1);
        assert!(grid.get(2, 0));
        assert!(!grid.get(1, 0));
    }

    #[test]
    fn replace_returns_previous_state() {
        let mut grid = CellGrid::new(2, 2);
        assert!(!grid.replace(1, 1, true));
        assert!(grid.replace(1, 1, false));
        assert!(!grid.get(1, 1));
    }

    #[test]
    fn clear_resets_both_buffers() {
        let mut grid = CellGrid::new(2, 2);
        grid.replace(0, 1, true);
        grid.advance(|_, _, _| true);
        grid.clear();
        assert!(grid.current().iter().all(|&c| !c));
        grid.advance(|x, y, front| front[y * 2 + x]);
        assert!(grid.current().iter().all(|&c| !c));
    }
}
