// main.rs - Conway's Game of Life in the terminal, one frame per tick

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use life_core::{advance, patterns, Grid, Pattern};

mod render;

#[derive(Parser, Debug)]
#[command(name = "life_term", about = "Conway's Game of Life in the terminal")]
struct Args {
    /// Number of columns.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,
    /// Number of rows.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,
    /// Milliseconds between generations.
    #[arg(
        long = "tick-ms",
        value_name = "MILLISECONDS",
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    tick_ms: u64,
    /// Starting pattern, placed in the middle of the grid.
    #[arg(long, default_value = "blinker", value_parser = parse_pattern)]
    pattern: &'static Pattern,
    /// Fill the grid randomly from this seed instead of using a pattern.
    #[arg(long, value_name = "SEED")]
    random: Option<u64>,
    /// Fraction of cells alive when seeding randomly.
    #[arg(long, default_value_t = 0.33, value_parser = parse_density)]
    density: f64,
    /// Stop after this many generations.
    #[arg(long)]
    generations: Option<u64>,
}

fn parse_pattern(name: &str) -> Result<&'static Pattern, String> {
    patterns::find(name).ok_or_else(|| {
        let known: Vec<_> = patterns::PATTERNS.iter().map(|p| p.name).collect();
        format!("unknown pattern '{name}', expected one of: {}", known.join(", "))
    })
}

fn parse_density(value: &str) -> Result<f64, String> {
    let density: f64 = value.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(format!("density must be between 0 and 1, got {density}"))
    }
}

fn seed_grid(args: &Args) -> anyhow::Result<Grid> {
    let mut grid = Grid::new(args.width as usize, args.height as usize)?;
    match args.random {
        Some(seed) => patterns::randomize(&mut grid, seed, args.density)?,
        None => args
            .pattern
            .place_centered(&mut grid)
            .with_context(|| format!("{} does not fit a {}x{} grid", args.pattern.name, args.width, args.height))?,
    }
    Ok(grid)
}

fn draw(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.write_all(render::frame(grid).as_bytes())?;
    out.flush()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut grid = seed_grid(&args)?;
    log::info!(
        "starting {}x{} grid with {} live cells, {} ms per generation",
        grid.width(),
        grid.height(),
        grid.population(),
        args.tick_ms
    );

    let mut ticker = tokio::time::interval(Duration::from_millis(args.tick_ms));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut stdout = io::stdout();

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut ctrl_c => {
                log::info!("interrupted at generation {}", grid.generation());
                break;
            }
        }

        draw(&mut stdout, &grid).context("failed to draw frame")?;
        if args.generations.is_some_and(|limit| grid.generation() >= limit) {
            log::info!("reached generation limit {}", grid.generation());
            break;
        }
        advance(&mut grid);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_console_run() {
        let args = Args::parse_from(["life_term"]);
        assert_eq!((args.width, args.height, args.tick_ms), (10, 10, 1000));
        assert_eq!(args.pattern.name, "Blinker");

        let grid = seed_grid(&args).unwrap();
        assert_eq!(grid.population(), 3);
        assert!(grid.get(3, 4).unwrap() && grid.get(4, 4).unwrap() && grid.get(5, 4).unwrap());
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Args::try_parse_from(["life_term", "--width", "0"]).is_err());
        assert!(Args::try_parse_from(["life_term", "--pattern", "spaceship"]).is_err());
        assert!(Args::try_parse_from(["life_term", "--density", "1.5"]).is_err());
    }

    #[test]
    fn pattern_too_large_is_reported() {
        let args = Args::parse_from(["life_term", "--pattern", "pulsar"]);
        assert!(seed_grid(&args).is_err());
    }

    #[test]
    fn random_seed_overrides_pattern() {
        let args = Args::parse_from(["life_term", "--random", "9", "--density", "1"]);
        assert_eq!(seed_grid(&args).unwrap().population(), 100);
    }
}
