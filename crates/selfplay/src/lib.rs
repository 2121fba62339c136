//! Self-play runner for the chess rules engine
//!
//! This crate provides infrastructure for:
//! - Playing full games between two engines through the rules engine
//! - Classifying how each game ended
//! - Writing results to JSON and printing a report
//!
//! # Usage
//!
//! ```bash
//! # Ten seeded random games, capped at 300 plies
//! cargo run -p selfplay -- --games 10 --seed 42 --max-plies 300
//!
//! # Settings from a TOML file, results to JSON
//! cargo run -p selfplay -- --config selfplay.toml --output results.json
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
