//! Batch runner: one seeded match per seed, in parallel.

use crate::engine::config::MatchConfig;
use crate::engine::match_runner::{play_match, MatchResult, MatchSide};
use crate::engine::rng::SeededRandom;
use crate::error::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Aggregate outcome of a batch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub runs: usize,
    pub home_wins: usize,
    pub away_wins: usize,
    /// Matches that ended level after regulation.
    pub shootouts: usize,
    /// Shootouts settled by lot at the round cap.
    pub lot_decisions: usize,
    pub avg_home_goals: f64,
    pub avg_away_goals: f64,
    pub avg_home_rating_delta: f64,
}

impl BatchReport {
    pub fn home_win_rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.home_wins as f64 / self.runs as f64
        }
    }

    pub fn shootout_rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.shootouts as f64 / self.runs as f64
        }
    }

    fn from_results(results: &[MatchResult]) -> Self {
        let mut report = BatchReport { runs: results.len(), ..Default::default() };
        if results.is_empty() {
            return report;
        }

        let mut home_goals = 0u64;
        let mut away_goals = 0u64;
        let mut home_delta = 0i64;
        for result in results {
            if result.home_won() {
                report.home_wins += 1;
            } else {
                report.away_wins += 1;
            }
            if let Some(shootout) = result.shootout {
                report.shootouts += 1;
                if shootout.by_lot {
                    report.lot_decisions += 1;
                }
            }
            home_goals += u64::from(result.home_goals);
            away_goals += u64::from(result.away_goals);
            home_delta += i64::from(result.home_rating.delta);
        }

        let runs = results.len() as f64;
        report.avg_home_goals = home_goals as f64 / runs;
        report.avg_away_goals = away_goals as f64 / runs;
        report.avg_home_rating_delta = home_delta as f64 / runs;
        report
    }
}

/// 배치 시뮬레이션
///
/// Every match gets its own `SeededRandom`, and results are folded in seed
/// order, so the report does not depend on thread scheduling.
pub fn run_batch(
    home: &MatchSide,
    away: &MatchSide,
    config: &MatchConfig,
    seeds: &[u64],
) -> Result<BatchReport> {
    config.validate()?;

    let results: Vec<MatchResult> = seeds
        .par_iter()
        .map(|&seed| play_match(home, away, config, &mut SeededRandom::new(seed)))
        .collect::<Result<_>>()?;

    let report = BatchReport::from_results(&results);
    info!(
        runs = report.runs,
        home_wins = report.home_wins,
        shootouts = report.shootouts,
        "batch finished"
    );
    Ok(report)
}

/// Convenience wrapper over `first_seed..first_seed + runs`.
pub fn run_seed_range(
    home: &MatchSide,
    away: &MatchSide,
    config: &MatchConfig,
    first_seed: u64,
    runs: usize,
) -> Result<BatchReport> {
    let seeds: Vec<u64> = (first_seed..).take(runs).collect();
    run_batch(home, away, config, &seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;
    use crate::roster::{Lineup, PlayerStats, RankTier, RosterEntry};

    fn side(value: f64, rating: i32) -> MatchSide {
        let entries = (0..3)
            .map(|_| RosterEntry::new("p", PlayerStats::uniform(value), RankTier::Normal))
            .collect::<Vec<_>>();
        MatchSide::new(Lineup::new(entries), rating)
    }

    #[test]
    fn test_counts_add_up() {
        let report =
            run_seed_range(&side(55.0, 1500), &side(50.0, 1500), &MatchConfig::default(), 0, 64)
                .unwrap();
        assert_eq!(report.runs, 64);
        assert_eq!(report.home_wins + report.away_wins, 64);
        assert!(report.shootouts <= 64);
        assert!(report.lot_decisions <= report.shootouts);
    }

    #[test]
    fn test_report_is_deterministic() {
        let config = MatchConfig::default();
        let seeds: Vec<u64> = (100..150).collect();
        let a = run_batch(&side(60.0, 1500), &side(58.0, 1520), &config, &seeds).unwrap();
        let b = run_batch(&side(60.0, 1500), &side(58.0, 1520), &config, &seeds).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_stronger_side_wins_more() {
        let report =
            run_seed_range(&side(80.0, 1500), &side(30.0, 1500), &MatchConfig::default(), 0, 100)
                .unwrap();
        assert!(report.home_win_rate() > 0.9, "rate {}", report.home_win_rate());
        assert!(report.avg_home_goals > report.avg_away_goals);
    }

    #[test]
    fn test_empty_batch() {
        let report = run_batch(&side(50.0, 1500), &side(50.0, 1500), &MatchConfig::default(), &[])
            .unwrap();
        assert_eq!(report.runs, 0);
        assert_eq!(report.home_win_rate(), 0.0);
    }

    #[test]
    fn test_bad_lineup_fails_the_batch() {
        let short = MatchSide::new(
            vec![RosterEntry::new("p", PlayerStats::uniform(50.0), RankTier::Normal)],
            1500,
        );
        let err = run_seed_range(&short, &side(50.0, 1500), &MatchConfig::default(), 0, 8)
            .unwrap_err();
        assert_eq!(err, MatchError::InvalidLineup { expected: 3, found: 1 });
    }
}
