use grid_life::{BoundedLife, SparseLife};
use rand::RngCore;
use rand::SeedableRng;
use std::time::Instant;

const DENSITY: f64 = 0.42;

fn seed_cells(side: i64) -> Vec<(i64, i64)> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5EED_1234_ABCD_EF01);
    let threshold = (u64::MAX as f64 * DENSITY) as u64;
    let mut cells = Vec::new();
    for y in 0..side {
        for x in 0..side {
            if rng.next_u64() <= threshold {
                cells.push((x, y));
            }
        }
    }
    cells
}

/// Patterns grow by at most one cell per side per generation, so a margin of
/// `iterations + 1` keeps the bounded run free of edge effects and the two
/// engines must agree.
fn bench_pair(side: i64, iterations: u64) -> (f64, f64, u64, u64) {
    let cells = seed_cells(side);
    let margin = iterations as i64 + 1;
    let grid_side = (side + 2 * margin) as usize;

    let mut bounded = BoundedLife::new(grid_side, grid_side, false).expect("bench grid size");
    for &(x, y) in &cells {
        bounded
            .set_cell(x + margin, y + margin, true)
            .expect("seed lies inside the margin");
    }
    let start = Instant::now();
    bounded.step_n(iterations);
    let bounded_ms = start.elapsed().as_secs_f64() * 1000.0;

    let mut sparse = SparseLife::new();
    sparse.set_cells_alive(cells);
    let start = Instant::now();
    sparse.step_n(iterations);
    let sparse_ms = start.elapsed().as_secs_f64() * 1000.0;

    (bounded_ms, sparse_ms, bounded.population(), sparse.population())
}

fn main() {
    let scales: &[(i64, u64)] = &[(32, 200), (64, 200), (128, 100), (256, 50)];

    println!(
        "{:<10} {:>8} {:>14} {:>14} {:>10}",
        "Seed", "Iters", "Bounded(ms)", "Sparse(ms)", "Pop"
    );
    println!("{}", "-".repeat(60));

    for &(side, iters) in scales {
        let (bounded_ms, sparse_ms, bounded_pop, sparse_pop) = bench_pair(side, iters);
        let status = if bounded_pop == sparse_pop {
            "MATCH"
        } else {
            "MISMATCH"
        };
        println!(
            "{:<10} {:>8} {:>14.1} {:>14.1} {:>10} [{status}]",
            format!("{}x{}", side, side),
            iters,
            bounded_ms,
            sparse_ms,
            sparse_pop
        );
    }
}
