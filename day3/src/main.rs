use std::{env, io};

use anyhow::Result;
use day3::{count_valid, count_valid_flipped, parse_grid, TriangleError};
use tracing::info;
use tracing_subscriber::EnvFilter;
use util::{get_arg, read_input};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = env::args().collect::<Vec<_>>();
    let path = get_arg(&args, 1);

    info!(input = path.unwrap_or("<stdin>"), "reading triangles");

    let input = read_input(path)?;

    let grid = parse_grid(&input).map_err(|e| {
        if let TriangleError::MalformedToken { source, .. } = &e {
            eprintln!("{}", source.render());
        }
        e
    })?;

    let part1 = count_valid(&grid)?;
    let part2 = count_valid_flipped(&grid)?;

    println!("Part 1, {part1}");
    println!("Part 2, {part2}");

    Ok(())
}
