//! Team stat aggregation.
//!
//! A lineup is reduced to one per-player average: each entry's stats are
//! multiplied by its rank bonus, summed, then divided by the lineup size.

use crate::error::{MatchError, Result};
use crate::roster::{Lineup, PlayStyle, PlayerStats, LINEUP_SIZE};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// 팀 합산 스탯 (경기 중 변동)
///
/// Owned by a single match invocation; the phase loop mutates its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub speed: f64,
    pub shoot_accuracy: f64,
    pub shoot_power: f64,
    pub defense: f64,
    pub stamina: f64,
}

impl TeamStats {
    /// 순간 전력 = (speed + defense + stamina) / 3
    pub fn power(&self) -> f64 {
        (self.speed + self.defense + self.stamina) / 3.0
    }

    /// 골 확률 = min((accuracy + power) / 2, cap)
    pub fn goal_rate(&self, cap: f64) -> f64 {
        ((self.shoot_accuracy + self.shoot_power) / 2.0).min(cap)
    }

    /// All five stats multiplied.
    pub fn scale_all(&mut self, factor: f64) {
        self.scale_skills(factor);
        self.stamina *= factor;
    }

    /// Speed, accuracy, power and defense multiplied; stamina untouched.
    pub fn scale_skills(&mut self, factor: f64) {
        self.speed *= factor;
        self.shoot_accuracy *= factor;
        self.shoot_power *= factor;
        self.defense *= factor;
    }

    fn add_player(&mut self, player: &PlayerStats) {
        self.speed += player.speed;
        self.shoot_accuracy += player.shoot_accuracy;
        self.shoot_power += player.shoot_power;
        self.defense += player.defense;
        self.stamina += player.stamina;
    }
}

impl From<PlayerStats> for TeamStats {
    fn from(player: PlayerStats) -> Self {
        let mut stats = TeamStats::default();
        stats.add_player(&player);
        stats
    }
}

/// Output of [`aggregate_stats`].
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedTeam {
    pub stats: TeamStats,
    pub styles: Vec<PlayStyle>,
}

/// 팀 스탯 계산
///
/// Fails with [`MatchError::InvalidLineup`] unless the lineup has exactly
/// [`LINEUP_SIZE`] entries; the empty lineup never reaches the division.
pub fn aggregate_stats(lineup: &Lineup) -> Result<AggregatedTeam> {
    if lineup.len() != LINEUP_SIZE {
        warn!(found = lineup.len(), expected = LINEUP_SIZE, "rejecting lineup");
        return Err(MatchError::InvalidLineup { expected: LINEUP_SIZE, found: lineup.len() });
    }

    let mut stats = TeamStats::default();
    for player in lineup.effective_stats() {
        stats.add_player(&player);
    }
    stats.scale_all(1.0 / lineup.len() as f64);

    Ok(AggregatedTeam { stats, styles: lineup.styles() })
}
