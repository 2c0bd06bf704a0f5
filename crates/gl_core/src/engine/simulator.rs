//! Phase-based match simulation.
//!
//! Each phase moves an abstract ball position along a line: positive values
//! are toward the away goal, negative toward the home goal. The side whose
//! instantaneous power is higher pushes the expected movement its way, the
//! rest is noise of `±random_range`. Reaching `±shootable_distance` triggers a
//! shot and puts the ball back at the center spot.
//!
//! ## Phase order
//! 1. Power of both sides from the current (decayed) stats
//! 2. Ball movement + log entry
//! 3. Shot check at `±shootable_distance`
//! 4. Stamina decay, then fatigue at every `fatigue_interval`-th phase
//!
//! ## RNG draws per phase
//! One draw for the ball movement; a shot takes two more (defense divisor,
//! then the `[0, 100)` roll).

use super::config::MatchConfig;
use super::events::{MatchEvent, Side};
use super::rng::RandomSource;
use super::stats::TeamStats;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// State after a phase has fully resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseSnapshot {
    pub phase: u32,
    pub ball_position: i64,
    pub home: TeamStats,
    pub away: TeamStats,
}

/// 정규 시간 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub home_goals: u32,
    pub away_goals: u32,
    pub events: Vec<MatchEvent>,
    pub snapshots: Vec<PhaseSnapshot>,
}

impl SimulationOutcome {
    /// `None` when regulation ends level.
    pub fn leader(&self) -> Option<Side> {
        match self.home_goals.cmp(&self.away_goals) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn is_level(&self) -> bool {
        self.home_goals == self.away_goals
    }

    pub fn log(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    pub fn final_stats(&self) -> Option<(TeamStats, TeamStats)> {
        self.snapshots.last().map(|s| (s.home, s.away))
    }
}

/// `Math.round` semantics: halves round toward positive infinity.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Single-match simulator. Owns both teams' stats for the duration of a run.
pub struct MatchSimulator<'a> {
    config: &'a MatchConfig,
    home: TeamStats,
    away: TeamStats,
    ball_position: i64,
    home_goals: u32,
    away_goals: u32,
    events: Vec<MatchEvent>,
    snapshots: Vec<PhaseSnapshot>,
}

impl<'a> MatchSimulator<'a> {
    pub fn new(config: &'a MatchConfig, home: TeamStats, away: TeamStats) -> Self {
        Self {
            config,
            home,
            away,
            ball_position: 0,
            home_goals: 0,
            away_goals: 0,
            events: Vec::new(),
            snapshots: Vec::new(),
        }
    }

    pub fn ball_position(&self) -> i64 {
        self.ball_position
    }

    pub fn score(&self) -> (u32, u32) {
        (self.home_goals, self.away_goals)
    }

    pub fn run(mut self, rng: &mut impl RandomSource) -> SimulationOutcome {
        for phase in 1..=self.config.phases {
            self.step(phase, rng);
        }

        debug!(
            home_goals = self.home_goals,
            away_goals = self.away_goals,
            phases = self.config.phases,
            "regulation finished"
        );

        SimulationOutcome {
            home_goals: self.home_goals,
            away_goals: self.away_goals,
            events: self.events,
            snapshots: self.snapshots,
        }
    }

    /// Resolves one phase (1-based).
    pub fn step(&mut self, phase: u32, rng: &mut impl RandomSource) {
        let delta = self.ball_delta(rng);
        self.ball_position += delta;
        self.log_movement(phase, delta);

        if self.ball_position as f64 >= self.config.shootable_distance {
            self.take_shot(phase, Side::Home, rng);
        } else if self.ball_position as f64 <= -self.config.shootable_distance {
            self.take_shot(phase, Side::Away, rng);
        }

        self.apply_stamina(phase);

        trace!(phase, ball = self.ball_position, "phase resolved");
        self.snapshots.push(PhaseSnapshot {
            phase,
            ball_position: self.ball_position,
            home: self.home,
            away: self.away,
        });
    }

    fn ball_delta(&self, rng: &mut impl RandomSource) -> i64 {
        let range = self.config.random_range;
        let advantage = self.home.power() - self.away.power();
        let raw = rng.uniform(0.0, 2.0 * range) - range + range * (advantage / 100.0);
        round_half_up(raw)
    }

    fn log_movement(&mut self, phase: u32, delta: i64) {
        let ball_position = self.ball_position;
        let event = match delta {
            0 => MatchEvent::Stalemate { phase, ball_position },
            d if d > 0 => {
                MatchEvent::Advance { phase, side: Side::Home, distance: d, ball_position }
            }
            d => MatchEvent::Advance { phase, side: Side::Away, distance: -d, ball_position },
        };
        self.events.push(event);
    }

    /// 슛: 공격 팀 골 확률 - 수비 팀 수비력 / (u + 2) > roll(0..100)
    fn take_shot(&mut self, phase: u32, shooter: Side, rng: &mut impl RandomSource) {
        let (attack, defense) = match shooter {
            Side::Home => (&self.home, &self.away),
            Side::Away => (&self.away, &self.home),
        };
        let goal_rate = attack.goal_rate(self.config.goal_rate_cap);
        let resistance = defense.defense / (rng.next_f64() + 2.0);
        let roll = rng.uniform(0.0, 100.0);

        if goal_rate - resistance > roll {
            match shooter {
                Side::Home => self.home_goals += 1,
                Side::Away => self.away_goals += 1,
            }
            debug!(phase, side = %shooter, home = self.home_goals, away = self.away_goals, "goal");
            self.events.push(MatchEvent::Goal {
                phase,
                side: shooter,
                home_goals: self.home_goals,
                away_goals: self.away_goals,
            });
        } else {
            debug!(phase, side = %shooter, goal_rate, resistance, roll, "shot missed");
            self.events.push(MatchEvent::Miss { phase, side: shooter });
        }

        self.ball_position = 0;
    }

    fn apply_stamina(&mut self, phase: u32) {
        let stamina = &self.config.stamina;
        self.home.stamina *= stamina.decay_rate;
        self.away.stamina *= stamina.decay_rate;

        if !stamina.is_checkpoint(phase) {
            return;
        }

        for side in [Side::Home, Side::Away] {
            let team = match side {
                Side::Home => &mut self.home,
                Side::Away => &mut self.away,
            };
            if let Some(factor) = stamina.fatigue_factor(team.stamina) {
                team.scale_skills(factor);
                debug!(phase, side = %side, factor, stamina = team.stamina, "fatigue");
                self.events.push(MatchEvent::Fatigue {
                    phase,
                    side,
                    factor,
                    stamina: team.stamina,
                });
            }
        }
    }
}

/// 경기 시뮬레이션 (정규 시간)
///
/// Runs `config.phases` phases over copies of the given stats.
pub fn simulate_match(
    home: TeamStats,
    away: TeamStats,
    config: &MatchConfig,
    rng: &mut impl RandomSource,
) -> SimulationOutcome {
    MatchSimulator::new(config, home, away).run(rng)
}
