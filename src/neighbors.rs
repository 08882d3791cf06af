//! Moore-neighborhood counting for both grid topologies.
//!
//! Both counters walk the same eight offsets and take a membership test, so
//! the engines differ only in how a neighbor coordinate is resolved:
//! - bounded/wrap: reduced modulo the grid size (torus)
//! - bounded/no-wrap: dropped when it falls outside the grid
//! - sparse: looked up as-is, dropped only if it would overflow `i64`

/// The eight `(dx, dy)` offsets of the Moore neighborhood, `(0, 0)` excluded.
#[rustfmt::skip]
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Shape of a bounded grid as seen by the neighbor counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Topology {
    pub width: usize,
    pub height: usize,
    pub wrap: bool,
}

impl Topology {
    /// Resolve the neighbor of `(x, y)` at `(dx, dy)` to an in-grid cell.
    ///
    /// Returns `None` only on a non-wrapping grid when the neighbor lies off
    /// an edge.
    #[inline(always)]
    pub fn resolve(&self, x: usize, y: usize, dx: i64, dy: i64) -> Option<(usize, usize)> {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        let (w, h) = (self.width as i64, self.height as i64);
        if self.wrap {
            return Some((nx.rem_euclid(w) as usize, ny.rem_euclid(h) as usize));
        }
        if (0..w).contains(&nx) && (0..h).contains(&ny) {
            Some((nx as usize, ny as usize))
        } else {
            None
        }
    }
}

/// Count live neighbors of an in-grid cell on a bounded grid.
#[inline]
pub fn count_bounded<F>(topology: Topology, x: usize, y: usize, alive: F) -> u8
where
    F: Fn(usize, usize) -> bool,
{
    let mut count = 0u8;
    for (dx, dy) in MOORE_OFFSETS {
        if let Some((nx, ny)) = topology.resolve(x, y, dx, dy) {
            count += alive(nx, ny) as u8;
        }
    }
    count
}

/// Count live neighbors of any coordinate on the unbounded plane.
#[inline]
pub fn count_sparse<F>(x: i64, y: i64, alive: F) -> u8
where
    F: Fn(i64, i64) -> bool,
{
    let mut count = 0u8;
    for (dx, dy) in MOORE_OFFSETS {
        if let (Some(nx), Some(ny)) = (x.checked_add(dx), y.checked_add(dy)) {
            count += alive(nx, ny) as u8;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{MOORE_OFFSETS, Topology, count_bounded, count_sparse};

    fn grid_from(width: usize, height: usize, live: &[(usize, usize)]) -> Vec<bool> {
        let mut cells = vec![false; width * height];
        for &(x, y) in live {
            cells[y * width + x] = true;
        }
        cells
    }

    #[test]
    fn offsets_are_distinct_and_exclude_center() {
        let set: HashSet<_> = MOORE_OFFSETS.iter().copied().collect();
        assert_eq!(set.len(), 8);
        assert!(!set.contains(&(0, 0)));
    }

    #[test]
    fn corner_neighbor_counts_only_when_wrapping() {
        let cells = grid_from(4, 3, &[(3, 2)]);
        let lookup = |x: usize, y: usize| cells[y * 4 + x];

        let torus = Topology {
            width: 4,
            height: 3,
            wrap: true,
        };
        let plane = Topology { wrap: false, ..torus };

        assert_eq!(count_bounded(torus, 0, 0, lookup), 1);
        assert_eq!(count_bounded(plane, 0, 0, lookup), 0);
    }

    #[test]
    fn non_wrap_edges_are_symmetric() {
        // Full grid: every in-range neighbor is alive, so the count is just
        // the number of in-range neighbors.
        let cells = vec![true; 5 * 5];
        let lookup = |x: usize, y: usize| cells[y * 5 + x];
        let plane = Topology {
            width: 5,
            height: 5,
            wrap: false,
        };

        for (x, y) in [(0, 0), (4, 0), (0, 4), (4, 4)] {
            assert_eq!(count_bounded(plane, x, y, lookup), 3, "corner ({x},{y})");
        }
        for (x, y) in [(2, 0), (2, 4), (0, 2), (4, 2)] {
            assert_eq!(count_bounded(plane, x, y, lookup), 5, "edge ({x},{y})");
        }
        assert_eq!(count_bounded(plane, 2, 2, lookup), 8);
    }

    #[test]
    fn wrap_full_grid_always_counts_eight() {
        let cells = vec![true; 3 * 3];
        let lookup = |x: usize, y: usize| cells[y * 3 + x];
        let torus = Topology {
            width: 3,
            height: 3,
            wrap: true,
        };
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(count_bounded(torus, x, y, lookup), 8);
            }
        }
    }

    #[test]
    fn sparse_counts_by_membership() {
        let live: HashSet<(i64, i64)> = [(-1, -1), (0, -1), (5, 5), (1, 1)].into_iter().collect();
        let lookup = |x: i64, y: i64| live.contains(&(x, y));
        assert_eq!(count_sparse(0, 0, lookup), 3);
        assert_eq!(count_sparse(-1, -1, lookup), 1);
        assert_eq!(count_sparse(100, 100, lookup), 0);
    }

    #[test]
    fn sparse_skips_neighbors_past_i64_range() {
        let live: HashSet<(i64, i64)> = [(i64::MAX, i64::MAX - 1)].into_iter().collect();
        let lookup = |x: i64, y: i64| live.contains(&(x, y));
        assert_eq!(count_sparse(i64::MAX, i64::MAX, lookup), 1);
        assert_eq!(count_sparse(i64::MIN, i64::MIN, lookup), 0);
    }
}
