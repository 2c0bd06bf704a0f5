//! End-to-end match flow.
//!
//! aggregate(home), aggregate(away) -> style bonus -> regulation phases ->
//! shootout when level -> rating update for both sides.

use super::config::MatchConfig;
use super::events::Side;
use super::penalty::{shootout, ShootoutScore};
use super::rating::{update_ratings, RatingChange};
use super::rng::RandomSource;
use super::simulator::simulate_match;
use super::stats::aggregate_stats;
use super::style::{apply_style_bonus, resolve_style_bonus, StyleBonus};
use crate::error::Result;
use crate::roster::Lineup;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One participant: a lineup and the owner's pre-match rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSide {
    pub lineup: Lineup,
    pub rating: i32,
}

impl MatchSide {
    pub fn new(lineup: impl Into<Lineup>, rating: i32) -> Self {
        Self { lineup: lineup.into(), rating }
    }
}

/// 경기 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_goals: u32,
    pub away_goals: u32,
    pub winner: Side,
    /// Present only when regulation ended level.
    pub shootout: Option<ShootoutScore>,
    pub style_bonus: StyleBonus,
    pub log: Vec<String>,
    pub home_rating: RatingChange,
    pub away_rating: RatingChange,
}

impl MatchResult {
    pub fn home_won(&self) -> bool {
        self.winner.is_home()
    }

    pub fn went_to_shootout(&self) -> bool {
        self.shootout.is_some()
    }

    pub fn home_rating_delta(&self) -> i32 {
        self.home_rating.delta
    }

    pub fn away_rating_delta(&self) -> i32 {
        self.away_rating.delta
    }

    pub fn rating(&self, side: Side) -> RatingChange {
        match side {
            Side::Home => self.home_rating,
            Side::Away => self.away_rating,
        }
    }
}

/// 경기 진행
///
/// Fails only on an invalid config or a lineup that is not exactly three
/// players; nothing is mutated on failure.
pub fn play_match(
    home: &MatchSide,
    away: &MatchSide,
    config: &MatchConfig,
    rng: &mut impl RandomSource,
) -> Result<MatchResult> {
    config.validate()?;

    let home_team = aggregate_stats(&home.lineup)?;
    let away_team = aggregate_stats(&away.lineup)?;

    let style_bonus = resolve_style_bonus(&home_team.styles, &away_team.styles);
    let mut home_stats = home_team.stats;
    let mut away_stats = away_team.stats;
    apply_style_bonus(style_bonus, &mut home_stats, &mut away_stats, config.style_advantage);

    let regulation = simulate_match(home_stats, away_stats, config, rng);
    let mut log = regulation.log();

    let (winner, shootout_score) = match regulation.leader() {
        Some(side) => (side, None),
        None => {
            let result = shootout(
                &home.lineup.effective_stats(),
                &away.lineup.effective_stats(),
                config,
                rng,
            );
            log.extend(result.log());
            (result.winner, Some(result.score()))
        }
    };

    let (home_rating, away_rating) =
        update_ratings(home.rating, away.rating, winner.is_home(), config.k_factor);

    info!(
        home_goals = regulation.home_goals,
        away_goals = regulation.away_goals,
        %winner,
        shootout = shootout_score.is_some(),
        home_delta = home_rating.delta,
        away_delta = away_rating.delta,
        "match finished"
    );

    Ok(MatchResult {
        home_goals: regulation.home_goals,
        away_goals: regulation.away_goals,
        winner,
        shootout: shootout_score,
        style_bonus,
        log,
        home_rating,
        away_rating,
    })
}
