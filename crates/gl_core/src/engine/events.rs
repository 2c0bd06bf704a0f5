//! Match sides and the event log.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    pub fn is_home(self) -> bool {
        self == Side::Home
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of the match log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    /// `side` pushed the ball `distance` units toward the opponent's goal.
    Advance { phase: u32, side: Side, distance: i64, ball_position: i64 },
    /// Neither side moved the ball.
    Stalemate { phase: u32, ball_position: i64 },
    Goal { phase: u32, side: Side, home_goals: u32, away_goals: u32 },
    Miss { phase: u32, side: Side },
    /// Non-stamina stats of `side` multiplied by `factor`.
    Fatigue { phase: u32, side: Side, factor: f64, stamina: f64 },
    PenaltyKick { round: u32, side: Side, scored: bool, home_score: u32, away_score: u32 },
    ShootoutDecided { winner: Side, home_score: u32, away_score: u32, by_lot: bool },
}

impl MatchEvent {
    pub fn phase(&self) -> Option<u32> {
        match self {
            MatchEvent::Advance { phase, .. }
            | MatchEvent::Stalemate { phase, .. }
            | MatchEvent::Goal { phase, .. }
            | MatchEvent::Miss { phase, .. }
            | MatchEvent::Fatigue { phase, .. } => Some(*phase),
            MatchEvent::PenaltyKick { .. } | MatchEvent::ShootoutDecided { .. } => None,
        }
    }

    pub fn is_goal(&self) -> bool {
        matches!(self, MatchEvent::Goal { .. })
    }

    pub fn is_shot(&self) -> bool {
        matches!(self, MatchEvent::Goal { .. } | MatchEvent::Miss { .. })
    }
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchEvent::Advance { phase, side, distance, ball_position } => write!(
                f,
                "[{:02}] {} advances the ball {} (ball at {})",
                phase, side, distance, ball_position
            ),
            MatchEvent::Stalemate { phase, ball_position } => {
                write!(f, "[{:02}] midfield stalemate (ball at {})", phase, ball_position)
            }
            MatchEvent::Goal { phase, side, home_goals, away_goals } => write!(
                f,
                "[{:02}] GOAL for {}! {} - {}",
                phase, side, home_goals, away_goals
            ),
            MatchEvent::Miss { phase, side } => write!(f, "[{:02}] {} shot missed", phase, side),
            MatchEvent::Fatigue { phase, side, factor, stamina } => write!(
                f,
                "[{:02}] {} tiring (stamina {:.1}), stats x{}",
                phase, side, stamina, factor
            ),
            MatchEvent::PenaltyKick { round, side, scored, home_score, away_score } => write!(
                f,
                "[PK {}] {} {} ({} - {})",
                round,
                side,
                if *scored { "scores" } else { "misses" },
                home_score,
                away_score
            ),
            MatchEvent::ShootoutDecided { winner, home_score, away_score, by_lot } => {
                write!(f, "[PK] {} wins the shootout {} - {}", winner, home_score, away_score)?;
                if *by_lot {
                    f.write_str(" (decided by lot)")?;
                }
                Ok(())
            }
        }
    }
}
