use std::{error::Error, thread};

use lifegrid::Universe;
use log::info;
use rand::{SeedableRng, rngs::StdRng};

mod options;
mod stats;

use options::FillMode;

fn seed_from_args(args: &options::Args, universe: &mut Universe) -> Result<(), Box<dyn Error>> {
    if let Some(pattern) = args.pattern()? {
        info!("seeding with pattern {}", pattern.name);
        universe.seed(pattern.grid())?;
        return Ok(());
    }

    // setup the cells based on the fill mode
    let (rows, columns) = args.grid_size()?;
    match args.fill_mode()? {
        FillMode::Random => match args.rng_seed()? {
            Some(seed) => universe.auto_fill(rows, columns, &mut StdRng::seed_from_u64(seed))?,
            None => universe.auto_fill(rows, columns, &mut rand::rng())?,
        },
        mode => universe.seed(mode.create_grid(rows, columns))?,
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };
    simple_logger::init_with_level(args.log_level())?;
    info!("starting lifegrid v{}", env!("CARGO_PKG_VERSION"));

    let mut universe = Universe::with_expansion(args.expand());
    seed_from_args(&args, &mut universe)?;
    let sleep = args.sleep()?;
    let threads = args.multithreading();

    let mut stats = stats::SimpleRecord::new(universe.alive_count()?);
    println!("{}\n", universe);
    for _ in 0..args.generations()? {
        let previous = universe.clone();

        // compute the next generation
        if threads {
            universe.advance_generation_parallel()?;
        } else {
            universe.advance_generation()?;
        }
        stats.record(universe.alive_count()?);
        println!("{}\n", universe);

        if stats.has_report() {
            info!("{}", stats.report());
        }
        if universe == previous {
            info!("still life reached after {} generations", stats.generations());
            break;
        }
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }

    info!("{}", stats.report());
    Ok(())
}
