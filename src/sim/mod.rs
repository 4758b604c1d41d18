//! Monte Carlo simulation of a board variant.
//!
//! ## Key Types
//!
//! - `SimulationConfig`: games, master seed and turn cap
//! - `GameSummary`: one game's turns, draws and outcome
//! - `SimulationReport`: aggregate statistics for a batch
//! - `SampleStats`: mean, population stdev, p50 and p90 of a sample

mod runner;
mod stats;

pub use runner::{simulate, simulate_game, GameSummary, SimulationConfig, SimulationReport};
pub use stats::{mean, percentile, SampleStats};
