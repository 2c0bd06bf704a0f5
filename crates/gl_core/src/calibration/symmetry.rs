//! Home/away symmetry check.
//!
//! Plays the same pairing twice over the same seeds, once with each lineup at
//! home. The engine has no home advantage, so for large batches the win rate
//! of a lineup should not depend on which side it starts on.

use super::batch::{run_batch, BatchReport};
use crate::engine::config::MatchConfig;
use crate::engine::match_runner::MatchSide;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// 기본 허용 편차
pub const DEFAULT_SYMMETRY_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymmetryReport {
    /// `first` at home.
    pub forward: BatchReport,
    /// `second` at home.
    pub swapped: BatchReport,
    /// Win rate of `first` at home minus its win rate away.
    pub home_bias: f64,
    pub is_symmetric: bool,
}

pub fn check_home_symmetry(
    first: &MatchSide,
    second: &MatchSide,
    config: &MatchConfig,
    seeds: &[u64],
    tolerance: f64,
) -> Result<SymmetryReport> {
    let forward = run_batch(first, second, config, seeds)?;
    let swapped = run_batch(second, first, config, seeds)?;

    let first_away_rate = if swapped.runs == 0 {
        0.0
    } else {
        swapped.away_wins as f64 / swapped.runs as f64
    };
    let home_bias = forward.home_win_rate() - first_away_rate;

    Ok(SymmetryReport { forward, swapped, home_bias, is_symmetric: home_bias.abs() <= tolerance })
}
