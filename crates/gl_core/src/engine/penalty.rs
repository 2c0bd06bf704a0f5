//! 승부차기 (penalty shootout)
//!
//! Each side's keeper is its best defender (first one on ties). Kickers rotate
//! through the lineup in order. A round is one home kick then one away kick;
//! after the regular rounds the shootout goes to sudden death and only stops
//! on a round that ends untied. Past `max_shootout_rounds` a level shootout
//! is settled by lot so the loop always terminates; the kicked tally stays
//! level and `by_lot` marks the decision.

use super::config::MatchConfig;
use super::events::{MatchEvent, Side};
use super::rng::RandomSource;
use crate::error::{MatchError, Result};
use crate::roster::{Lineup, PlayerStats, LINEUP_SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShootoutResult {
    pub winner: Side,
    pub home_score: u32,
    pub away_score: u32,
    pub rounds: u32,
    /// Sudden death hit the round cap and a lot decided the winner.
    pub by_lot: bool,
    pub events: Vec<MatchEvent>,
}

/// Final tally without the kick log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootoutScore {
    pub home_score: u32,
    pub away_score: u32,
    pub rounds: u32,
    pub by_lot: bool,
}

impl ShootoutResult {
    pub fn winner_is_home(&self) -> bool {
        self.winner.is_home()
    }

    pub fn score(&self) -> ShootoutScore {
        ShootoutScore {
            home_score: self.home_score,
            away_score: self.away_score,
            rounds: self.rounds,
            by_lot: self.by_lot,
        }
    }

    pub fn log(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

/// 수비력이 가장 높은 선수 (동률이면 앞 순번)
pub fn best_defender(players: &[PlayerStats]) -> Option<&PlayerStats> {
    players.iter().fold(None, |best: Option<&PlayerStats>, player| match best {
        Some(current) if player.defense <= current.defense => Some(current),
        _ => Some(player),
    })
}

/// 킥: 공격자 (정확도 + 파워) vs 수비자 수비력, 각각 균등 난수 배율
pub fn perform_kick(
    attacker: &PlayerStats,
    defender: &PlayerStats,
    rng: &mut impl RandomSource,
) -> bool {
    let attack = rng.next_f64() * attacker.attack_score();
    let defense = rng.next_f64() * defender.defense;
    attack > defense
}

/// 승부차기 (라인업 기준, 등급 보정 스탯 사용)
pub fn run_penalty_shootout(
    home: &Lineup,
    away: &Lineup,
    config: &MatchConfig,
    rng: &mut impl RandomSource,
) -> Result<ShootoutResult> {
    for lineup in [home, away] {
        if lineup.is_empty() {
            return Err(MatchError::InvalidLineup { expected: LINEUP_SIZE, found: 0 });
        }
    }
    Ok(shootout(&home.effective_stats(), &away.effective_stats(), config, rng))
}

/// Shootout over effective stats. Both slices must be non-empty.
pub(crate) fn shootout(
    home: &[PlayerStats],
    away: &[PlayerStats],
    config: &MatchConfig,
    rng: &mut impl RandomSource,
) -> ShootoutResult {
    let (Some(home_keeper), Some(away_keeper)) = (best_defender(home), best_defender(away)) else {
        // Unreachable through run_penalty_shootout.
        let winner = if home.is_empty() { Side::Away } else { Side::Home };
        return ShootoutResult {
            winner,
            home_score: 0,
            away_score: 0,
            rounds: 0,
            by_lot: false,
            events: Vec::new(),
        };
    };

    let regular_rounds = home.len().max(away.len()) as u32;
    let round_cap = config.max_shootout_rounds.max(regular_rounds);

    let mut events = Vec::new();
    let mut home_score = 0u32;
    let mut away_score = 0u32;
    let mut round = 1u32;

    while round <= regular_rounds || home_score == away_score {
        if round > round_cap {
            return settle_by_lot(home_score, away_score, round - 1, events, rng);
        }

        let index = (round - 1) as usize;
        let home_kicker = &home[index % home.len()];
        let away_kicker = &away[index % away.len()];

        let home_scored = perform_kick(home_kicker, away_keeper, rng);
        if home_scored {
            home_score += 1;
        }
        events.push(MatchEvent::PenaltyKick {
            round,
            side: Side::Home,
            scored: home_scored,
            home_score,
            away_score,
        });

        let away_scored = perform_kick(away_kicker, home_keeper, rng);
        if away_scored {
            away_score += 1;
        }
        events.push(MatchEvent::PenaltyKick {
            round,
            side: Side::Away,
            scored: away_scored,
            home_score,
            away_score,
        });

        debug!(round, home_scored, away_scored, home_score, away_score, "penalty round");
        round += 1;
    }

    let winner = if home_score > away_score { Side::Home } else { Side::Away };
    events.push(MatchEvent::ShootoutDecided { winner, home_score, away_score, by_lot: false });

    ShootoutResult { winner, home_score, away_score, rounds: round - 1, by_lot: false, events }
}

fn settle_by_lot(
    home_score: u32,
    away_score: u32,
    rounds: u32,
    mut events: Vec<MatchEvent>,
    rng: &mut impl RandomSource,
) -> ShootoutResult {
    let winner = if rng.next_f64() < 0.5 { Side::Home } else { Side::Away };
    warn!(rounds, %winner, "shootout still level at round cap, settled by lot");
    events.push(MatchEvent::ShootoutDecided { winner, home_score, away_score, by_lot: true });

    ShootoutResult { winner, home_score, away_score, rounds, by_lot: true, events }
}
