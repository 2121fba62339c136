//! Self-play CLI
//!
//! Plays random-engine games through the rules engine and reports the results.

use anyhow::{bail, Context, Result};
use chess_rules::{render, GameState};
use random_engine::RandomEngine;
use selfplay::{MatchRunner, SelfPlayConfig};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Chess rules self-play runner");
    println!();
    println!("Usage:");
    println!("  selfplay [--config FILE] [--games N] [--seed S] [--max-plies P] [--output FILE]");
    println!();
    println!("Flags override values from the config file.");
    println!("Set RUST_LOG=debug to log every ply.");
    println!();
    println!("Examples:");
    println!("  selfplay --games 20 --seed 7");
    println!("  selfplay --config selfplay.toml --output results.json");
}

fn flag_value<'a>(args: &'a [String], i: usize) -> Result<&'a str> {
    match args.get(i + 1) {
        Some(value) => Ok(value.as_str()),
        None => bail!("{} needs a value", args[i]),
    }
}

/// Returns `None` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<SelfPlayConfig>> {
    // The config file is read first so flags can override it.
    let mut config = match args.iter().position(|a| a == "--config" || a == "-c") {
        Some(i) => {
            let path = flag_value(args, i)?;
            SelfPlayConfig::load(Path::new(path))
                .with_context(|| format!("failed to load config from {path}"))?
        }
        None => SelfPlayConfig::default(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" | "help" => return Ok(None),
            "--config" | "-c" => {
                i += 1;
            }
            "--games" | "-g" => {
                let value = flag_value(args, i)?;
                config.games = value
                    .parse()
                    .with_context(|| format!("invalid game count: {value}"))?;
                i += 1;
            }
            "--seed" | "-s" => {
                let value = flag_value(args, i)?;
                config.seed = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid seed: {value}"))?,
                );
                i += 1;
            }
            "--max-plies" => {
                let value = flag_value(args, i)?;
                config.max_plies = value
                    .parse()
                    .with_context(|| format!("invalid ply cap: {value}"))?;
                i += 1;
            }
            "--output" | "-o" => {
                config.output = Some(PathBuf::from(flag_value(args, i)?));
                i += 1;
            }
            other => bail!("unknown argument: {other}"),
        }
        i += 1;
    }

    Ok(Some(config))
}

fn engine(seed: Option<u64>) -> RandomEngine {
    match seed {
        Some(seed) => RandomEngine::seeded(seed),
        None => RandomEngine::new(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(config) = parse_args(&args)? else {
        print_usage();
        return Ok(());
    };

    info!(
        games = config.games,
        max_plies = config.max_plies,
        seed = ?config.seed,
        "starting self-play"
    );

    let mut engine1 = engine(config.seed);
    let mut engine2 = engine(config.seed.map(|s| s.wrapping_add(1)));

    let runner = MatchRunner::new(config.clone());
    let results = runner
        .run_match(&mut engine1, &mut engine2)
        .context("self-play aborted")?;

    if let Some(last) = results.games.last() {
        let state = GameState::from_fen(&last.final_fen)
            .context("final position did not round-trip")?
            .with_perspective(config.perspective);
        println!("Final position of game {}:", last.number);
        println!("{}", render(&state));
    }
    results.print_report();

    if let Some(path) = &config.output {
        results
            .save(path)
            .with_context(|| format!("failed to write results to {}", path.display()))?;
        info!(path = %path.display(), "results saved");
    } else {
        debug!("no output path configured, results not saved");
    }

    Ok(())
}
