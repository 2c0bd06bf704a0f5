//! 상대 찾기 (rating-window matchmaking)
//!
//! The pool is every other account within `±RATING_WINDOW` of the host.
//! Opponents are drawn uniformly at random, with replacement, until one has a
//! full lineup or `MAX_ATTEMPTS` draws have been spent.

use crate::engine::rng::RandomSource;
use crate::error::MatchmakingError;
use crate::roster::LINEUP_SIZE;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// 허용 레이팅 차이 (양방향, 경계 포함)
pub const RATING_WINDOW: i32 = 50;

/// 최대 추첨 횟수
pub const MAX_ATTEMPTS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentCandidate {
    pub account_id: u64,
    pub rating: i32,
    /// Number of players currently in the account's lineup.
    pub lineup_size: usize,
}

impl OpponentCandidate {
    pub fn is_ready(&self) -> bool {
        self.lineup_size >= LINEUP_SIZE
    }
}

pub fn in_rating_window(host_rating: i32, rating: i32) -> bool {
    rating.abs_diff(host_rating) <= RATING_WINDOW.unsigned_abs()
}

/// 상대 선택
pub fn find_opponent<'a>(
    host_id: u64,
    host_rating: i32,
    candidates: &'a [OpponentCandidate],
    rng: &mut impl RandomSource,
) -> Result<&'a OpponentCandidate, MatchmakingError> {
    let pool: Vec<&OpponentCandidate> = candidates
        .iter()
        .filter(|c| c.account_id != host_id && in_rating_window(host_rating, c.rating))
        .collect();

    if pool.is_empty() {
        debug!(host_id, host_rating, "no candidates in rating window");
        return Err(MatchmakingError::NoCandidates);
    }

    for attempt in 1..=MAX_ATTEMPTS {
        let index = ((rng.next_f64() * pool.len() as f64) as usize).min(pool.len() - 1);
        let candidate = pool[index];
        if candidate.is_ready() {
            debug!(host_id, opponent = candidate.account_id, attempt, "opponent found");
            return Ok(candidate);
        }
    }

    warn!(host_id, pool = pool.len(), "no opponent with a full lineup");
    Err(MatchmakingError::NoReadyOpponent { attempts: MAX_ATTEMPTS })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::{FixedRandom, SeededRandom, SequenceRandom};

    fn candidate(account_id: u64, rating: i32, lineup_size: usize) -> OpponentCandidate {
        OpponentCandidate { account_id, rating, lineup_size }
    }

    #[test]
    fn test_window_is_inclusive() {
        assert!(in_rating_window(1500, 1550));
        assert!(in_rating_window(1500, 1450));
        assert!(!in_rating_window(1500, 1551));
        assert!(!in_rating_window(1500, 1449));
    }

    #[test]
    fn test_window_at_i32_extremes() {
        assert!(!in_rating_window(i32::MIN, i32::MAX));
        assert!(!in_rating_window(i32::MAX, i32::MIN));
        assert!(in_rating_window(i32::MAX, i32::MAX - 50));

        let candidates = [candidate(2, i32::MAX, 3)];
        let err = find_opponent(1, i32::MIN, &candidates, &mut FixedRandom::new(0.5)).unwrap_err();
        assert_eq!(err, MatchmakingError::NoCandidates);
    }

    #[test]
    fn test_empty_pool() {
        let err = find_opponent(1, 1500, &[], &mut FixedRandom::new(0.5)).unwrap_err();
        assert_eq!(err, MatchmakingError::NoCandidates);
    }

    #[test]
    fn test_host_and_out_of_window_are_excluded() {
        let candidates = [candidate(1, 1500, 3), candidate(2, 1700, 3), candidate(3, 1300, 3)];
        let err = find_opponent(1, 1500, &candidates, &mut FixedRandom::new(0.5)).unwrap_err();
        assert_eq!(err, MatchmakingError::NoCandidates);
    }

    #[test]
    fn test_skips_incomplete_lineups() {
        let candidates = [candidate(2, 1490, 1), candidate(3, 1510, 3)];
        // First draw lands on #2 (not ready), second on #3.
        let mut rng = SequenceRandom::new(vec![0.1, 0.9]);
        let opponent = find_opponent(1, 1500, &candidates, &mut rng).unwrap();
        assert_eq!(opponent.account_id, 3);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let candidates = [candidate(2, 1500, 2), candidate(3, 1500, 0)];
        let mut rng = SeededRandom::new(5);
        let err = find_opponent(1, 1500, &candidates, &mut rng).unwrap_err();
        assert_eq!(err, MatchmakingError::NoReadyOpponent { attempts: MAX_ATTEMPTS });
    }

    #[test]
    fn test_only_ready_opponent_is_eventually_found() {
        let candidates: Vec<_> = (2..12).map(|id| candidate(id, 1500, usize::from(id == 7) * 3)).collect();
        let opponent = find_opponent(1, 1500, &candidates, &mut SeededRandom::new(42)).unwrap();
        assert_eq!(opponent.account_id, 7);
    }
}
