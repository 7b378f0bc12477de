//! Perft breakdown report.
//!
//! Usage:
//! `cargo run --release --bin perft_report`
//! `cargo run --release --bin perft_report -- --depth 4 --playout 12 --seed 7`
//!
//! Set `RUST_LOG=plum_board=debug` to see per-move events.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use plum_board::move_generation::perft::{perft, perft_divide};
use plum_board::utils::random_playout::random_playout;
use plum_board::ChessBoard;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "perft_report", about = "Count legal-move trees from the standard layout")]
struct Args {
    /// Search depth in plies.
    #[arg(short, long, default_value_t = 3)]
    depth: u8,

    /// Random legal moves to play before counting.
    #[arg(short, long, default_value_t = 0)]
    playout: usize,

    /// Seed for the random playout.
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Print per-root-move node counts.
    #[arg(long)]
    divide: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut board = ChessBoard::new();

    if args.playout > 0 {
        let mut rng = StdRng::seed_from_u64(args.seed);
        let applied = random_playout(&mut board, args.playout, &mut rng)
            .context("random playout failed")?;
        info!(applied, seed = args.seed, "reached start position by playout");
    }

    println!("{board}");
    println!(
        "to move: {}  advantage: {} (+{})  finished: {}",
        board.current_player(),
        board.current_advantage().player_id(),
        board.current_advantage().magnitude,
        board.is_finished()
    );

    if args.divide {
        for (mv, counts) in perft_divide(&mut board, args.depth).context("perft divide failed")? {
            println!("{mv}: {}", counts.nodes);
        }
    }

    let started = Instant::now();
    let counts = perft(&mut board, args.depth).context("perft failed")?;
    let elapsed = started.elapsed();

    println!(
        "depth={} nodes={} captures={} ep={} castles={} promotions={} checks={} checkmates={} elapsed_ms={}",
        args.depth,
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates,
        elapsed.as_millis()
    );

    Ok(())
}
