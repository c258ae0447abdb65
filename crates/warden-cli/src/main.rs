//! Command-line front end: read a patrol map, run both counts, print them
//! with the elapsed time.
//!
//! The two printed integers are the load-bearing output; the timing line
//! is informational. The input file is read exactly once and a read
//! failure aborts with no partial output.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use warden::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "warden", version, about = "Guard patrol coverage and loop-obstacle counter")]
struct Args {
    /// Path to the patrol map: equal-length lines of '.', '#', and one '^'.
    input: PathBuf,

    /// Worker threads for the obstacle search (0 = auto-detect).
    #[arg(long, default_value_t = 0)]
    workers: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let start = Instant::now();

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let map = PatrolMap::parse(text.lines())
        .with_context(|| format!("invalid patrol map in {}", args.input.display()))?;

    let config = SearchConfig {
        workers: (args.workers > 0).then_some(args.workers),
    };
    let report = ObstacleSearch::with_config(&map, config).run();

    println!("part 1: {}", report.visited_cells);
    println!("part 2: {}", report.loop_obstacles);
    println!("--- {:.6} seconds ---", start.elapsed().as_secs_f64());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn workers_default_to_auto() {
        let args = Args::parse_from(["warden", "input.txt"]);
        assert_eq!(args.workers, 0);
        let args = Args::parse_from(["warden", "input.txt", "--workers", "4"]);
        assert_eq!(args.workers, 4);
    }
}
