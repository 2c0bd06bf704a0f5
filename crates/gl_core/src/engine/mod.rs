//! 경기 엔진
//!
//! Turn-based 1D match: three-player lineups are averaged into team stats,
//! the ball moves along a single axis for a fixed number of phases, and a
//! level score goes to a penalty shootout. Ratings are updated afterwards.

pub mod config; // Tuning constants and profiles
pub mod events;
pub mod match_runner; // play_match: the full pipeline
pub mod penalty;
pub mod rating; // ELO
pub mod rng; // Injectable randomness
pub mod simulator;
pub mod stats;
pub mod style; // Play-style advantage

pub use config::{MatchConfig, StaminaConfig, MAX_PHASES, MAX_SHOOTOUT_ROUNDS};
pub use events::{MatchEvent, Side};
pub use match_runner::{play_match, MatchResult, MatchSide};
pub use penalty::{best_defender, perform_kick, run_penalty_shootout, ShootoutResult, ShootoutScore};
pub use rating::{expected_score, update_rating, update_ratings, RatingChange, DEFAULT_K};
pub use rng::{FixedRandom, RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use simulator::{simulate_match, MatchSimulator, PhaseSnapshot, SimulationOutcome};
pub use stats::{aggregate_stats, AggregatedTeam, TeamStats};
pub use style::{apply_style_bonus, dominant_style, resolve_style_bonus, StyleBonus};
