//! Perft timing over the standard positions.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_rules -- [depth] [fen]
//!
//! Without a FEN every built-in position is run at `depth` (default 4).

use chess_rules::{perft, ChessError, GameState, START_FEN};
use std::env;
use std::time::{Duration, Instant};

const POSITIONS: &[(&str, &str)] = &[
    ("Starting position", START_FEN),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Position 3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    (
        "Position 4",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -",
    ),
    (
        "Position 5",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    ),
];

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn timed(fen: &str, depth: u8) -> Result<(u64, Duration), ChessError> {
    let state = GameState::from_fen(fen)?;
    let start = Instant::now();
    let nodes = perft(&state, depth)?;
    Ok((nodes, start.elapsed()))
}

fn main() -> Result<(), ChessError> {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    if let Some(fen) = args.get(2) {
        let (nodes, elapsed) = timed(fen, depth)?;
        println!("Position: {fen}");
        println!("Depth: {depth}");
        println!("Nodes: {nodes}");
        println!("Time: {elapsed:.3?}");
        println!("NPS: {:.0}", nps(nodes, elapsed));
        return Ok(());
    }

    println!("=== Perft, depth {depth} ===");
    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;
    for (name, fen) in POSITIONS {
        let (nodes, elapsed) = timed(fen, depth)?;
        total_nodes += nodes;
        total_time += elapsed;
        println!(
            "{name:.<30} {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
    Ok(())
}
