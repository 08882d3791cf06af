#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use grid_life::{BoundedLife, BoundedLifeConfig, RuleSet, SparseLife, Universe};
use log::{LevelFilter, error, info};
use rand::RngCore;
use rand::SeedableRng;
use std::time::{Duration, Instant};

const DEFAULT_SIDE: usize = 256;
const DEFAULT_DENSITY: f64 = 0.35;
const DEFAULT_GENERATIONS: u64 = 1000;
const DEFAULT_CHECK_INTERVAL: u64 = 100;
const DEFAULT_SEED: u64 = 0x5EED_1234_ABCD_EF01;

struct MainArgs {
    width: usize,
    height: usize,
    wrap: bool,
    sparse: bool,
    rules: RuleSet,
    generations: u64,
    check_interval: u64,
    density: f64,
    seed: u64,
}

fn parse_args() -> MainArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = MainArgs {
        width: DEFAULT_SIDE,
        height: DEFAULT_SIDE,
        wrap: false,
        sparse: false,
        rules: RuleSet::default(),
        generations: DEFAULT_GENERATIONS,
        check_interval: DEFAULT_CHECK_INTERVAL,
        density: DEFAULT_DENSITY,
        seed: DEFAULT_SEED,
    };
    let next_arg = |i: usize, flag: &str| -> &str {
        args.get(i)
            .map(String::as_str)
            .unwrap_or_else(|| panic!("{flag} requires a value"))
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                parsed.width = next_arg(i, "--width")
                    .parse()
                    .expect("--width requires a positive integer");
            }
            "--height" => {
                i += 1;
                parsed.height = next_arg(i, "--height")
                    .parse()
                    .expect("--height requires a positive integer");
            }
            "--wrap" => parsed.wrap = true,
            "--sparse" => parsed.sparse = true,
            "--rule" => {
                i += 1;
                parsed.rules = next_arg(i, "--rule")
                    .parse()
                    .unwrap_or_else(|err| panic!("--rule: {err}"));
            }
            "--generations" => {
                i += 1;
                parsed.generations = next_arg(i, "--generations")
                    .parse()
                    .expect("--generations requires a non-negative integer");
            }
            "--check-interval" => {
                i += 1;
                let n: u64 = next_arg(i, "--check-interval")
                    .parse()
                    .expect("--check-interval requires a positive integer");
                parsed.check_interval = n.max(1);
            }
            "--density" => {
                i += 1;
                let d: f64 = next_arg(i, "--density")
                    .parse()
                    .expect("--density requires a number in [0, 1]");
                parsed.density = d.clamp(0.0, 1.0);
            }
            "--seed" => {
                i += 1;
                parsed.seed = next_arg(i, "--seed")
                    .parse()
                    .expect("--seed requires an unsigned integer");
            }
            other => panic!(
                "unknown argument: {other}\nusage: grid_life [--width N] [--height N] [--wrap] [--sparse] [--rule B3/S23] [--generations N] [--check-interval N] [--density F] [--seed N]"
            ),
        }
        i += 1;
    }
    if parsed.sparse && parsed.wrap {
        panic!("--wrap only applies to the bounded engine");
    }
    parsed
}

fn build_universe(args: &MainArgs) -> Result<Box<dyn Universe>, grid_life::LifeError> {
    if args.sparse {
        Ok(Box::new(SparseLife::with_rules(args.rules)?))
    } else {
        let config = BoundedLifeConfig::new(args.width, args.height)
            .wrap(args.wrap)
            .rules(args.rules);
        Ok(Box::new(BoundedLife::with_config(config)?))
    }
}

/// Fill `[0, width) x [0, height)` at the requested density.
fn seed_random_world(universe: &mut dyn Universe, args: &MainArgs) -> Result<(), grid_life::LifeError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    let threshold = (u64::MAX as f64 * args.density) as u64;

    for y in 0..args.height as i64 {
        for x in 0..args.width as i64 {
            if rng.next_u64() <= threshold {
                universe.set_cell(x, y, true)?;
            }
        }
    }
    Ok(())
}

fn run(args: &MainArgs) -> Result<(), grid_life::LifeError> {
    let mut universe = build_universe(args)?;
    seed_random_world(universe.as_mut(), args)?;

    let engine = if args.sparse { "sparse" } else { "bounded" };
    info!(
        "{engine} universe {}x{} wrap={} rules={} seeded with {} live cells",
        args.width,
        args.height,
        args.wrap,
        args.rules,
        universe.population()
    );

    let mut total = Duration::ZERO;
    let mut done = 0u64;
    while done < args.generations {
        let batch = args.check_interval.min(args.generations - done);
        let start = Instant::now();
        universe.step_n(batch);
        let phase = start.elapsed();
        total += phase;
        done += batch;

        let phase_ms = phase.as_secs_f64() * 1000.0;
        let avg_ms = phase_ms / batch as f64;
        println!(
            "Generation {}: population = {} | {phase_ms:.3} ms total, {avg_ms:.6} ms/gen",
            universe.generation(),
            universe.population()
        );
        if universe.population() == 0 {
            info!("universe died out after {} generations", universe.generation());
            break;
        }
    }

    let total_ms = total.as_secs_f64() * 1000.0;
    let avg_ms = if done == 0 { 0.0 } else { total_ms / done as f64 };
    println!("\n--- Summary ({done} generations, {engine}) ---");
    println!("{total_ms:.3} ms total, {avg_ms:.6} ms/gen");
    Ok(())
}

fn main() {
    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
    {
        eprintln!("failed to install logger: {err}");
    }

    let args = parse_args();
    if let Err(err) = run(&args) {
        error!("{err}");
        std::process::exit(2);
    }
}
