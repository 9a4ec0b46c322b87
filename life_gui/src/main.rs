// main.rs - Conway's Game of Life in an egui window

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use life_core::patterns;

mod app;
mod history;
mod mode;
mod ui;

use app::GameOfLife;

#[derive(Parser, Debug)]
#[command(name = "life_gui", about = "Conway's Game of Life in a window")]
struct Args {
    /// Number of columns.
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..=500))]
    width: u32,
    /// Number of rows.
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..=500))]
    height: u32,
    /// Milliseconds between generations while running.
    #[arg(
        long = "tick-ms",
        value_name = "MILLISECONDS",
        default_value_t = 200,
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    tick_ms: u64,
    /// Edge length of a drawn cell in pixels.
    #[arg(long = "cell-size", value_name = "PIXELS", default_value_t = 15, value_parser = clap::value_parser!(u16).range(2..=64))]
    cell_size: u16,
    /// Pattern to place before the window opens.
    #[arg(long)]
    pattern: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut game = GameOfLife::new(
        args.width as usize,
        args.height as usize,
        f32::from(args.cell_size),
        Duration::from_millis(args.tick_ms),
    )?;

    if let Some(name) = &args.pattern {
        let index = patterns::PATTERNS
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
            .with_context(|| format!("unknown pattern '{name}'"))?;
        game.selected_pattern = index;
        game.apply_selected_pattern();
    }

    let (board_w, board_h) = game.layout.board_size(game.grid.width(), game.grid.height());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([(board_w + 40.0).max(800.0), board_h + 200.0]),
        ..Default::default()
    };

    log::info!("opening {}x{} board", args.width, args.height);
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(game)),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}
