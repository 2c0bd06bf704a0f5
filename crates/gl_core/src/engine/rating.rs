//! ELO rating update.
//!
//! Each side is updated from its own pre-match rating and the opponent's
//! pre-match rating:
//! - Expected score: E = 1 / (1 + 10^((R_opp - R_self) / 400))
//! - New rating: R' = R_self + K * (S - E), S = 1 for a win, 0 for a loss
//!
//! New ratings are rounded half away from zero, which keeps the two deltas
//! exact negations of each other. No floor is applied; results saturate at
//! the `i32` bounds.

use serde::{Deserialize, Serialize};

/// Default K factor
pub const DEFAULT_K: i32 = 32;

/// 기대 승률
pub fn expected_score(self_rating: i32, opponent_rating: i32) -> f64 {
    let diff = i64::from(opponent_rating) - i64::from(self_rating);
    1.0 / (1.0 + 10f64.powf(diff as f64 / 400.0))
}

/// ELO 계산
pub fn update_rating(self_rating: i32, opponent_rating: i32, self_won: bool, k: i32) -> i32 {
    let actual = if self_won { 1.0 } else { 0.0 };
    let expected = expected_score(self_rating, opponent_rating);
    self_rating.saturating_add((f64::from(k) * (actual - expected)).round() as i32)
}

/// One account's rating movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingChange {
    pub old: i32,
    pub new: i32,
    pub delta: i32,
}

impl RatingChange {
    pub fn new(old: i32, new: i32) -> Self {
        Self { old, new, delta: new.saturating_sub(old) }
    }
}

/// Updates both sides from the same pre-match ratings.
pub fn update_ratings(
    home_rating: i32,
    away_rating: i32,
    home_won: bool,
    k: i32,
) -> (RatingChange, RatingChange) {
    let home = update_rating(home_rating, away_rating, home_won, k);
    let away = update_rating(away_rating, home_rating, !home_won, k);
    (RatingChange::new(home_rating, home), RatingChange::new(away_rating, away))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_score_equal_ratings() {
        assert!((expected_score(1500, 1500) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_expected_score_higher_rated() {
        let expected = expected_score(1700, 1500);
        assert!(expected > 0.7 && expected < 0.8);
        assert!((expected + expected_score(1500, 1700) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_even_match() {
        assert_eq!(update_rating(1500, 1500, true, DEFAULT_K), 1516);
        assert_eq!(update_rating(1500, 1500, false, DEFAULT_K), 1484);
    }

    #[test]
    fn test_upset_win_gains_more() {
        let upset = update_rating(1300, 1500, true, DEFAULT_K) - 1300;
        let expected_win = update_rating(1500, 1300, true, DEFAULT_K) - 1500;
        assert!(upset > expected_win);
        assert!(upset > 20);
    }

    #[test]
    fn test_ratings_may_go_negative() {
        assert!(update_rating(-10, 400, false, DEFAULT_K) < -10);
        assert_eq!(update_rating(0, 0, false, DEFAULT_K), -16);
    }

    #[test]
    fn test_extreme_ratings_do_not_overflow() {
        assert_eq!(expected_score(i32::MIN, i32::MAX), 0.0);
        assert_eq!(expected_score(i32::MAX, i32::MIN), 1.0);

        let (winner, loser) = update_ratings(i32::MAX, i32::MIN, true, DEFAULT_K);
        assert_eq!(winner, RatingChange { old: i32::MAX, new: i32::MAX, delta: 0 });
        assert_eq!(loser, RatingChange { old: i32::MIN, new: i32::MIN, delta: 0 });

        let (favourite, underdog) = update_ratings(i32::MAX - 10, i32::MIN + 10, false, DEFAULT_K);
        assert_eq!(favourite.new, i32::MAX - 42);
        assert_eq!(underdog.new, i32::MIN + 42);

        // Even-match wins at the bounds saturate instead of wrapping.
        assert_eq!(update_rating(i32::MAX, i32::MAX, true, DEFAULT_K), i32::MAX);
        assert_eq!(update_rating(i32::MIN, i32::MIN, false, DEFAULT_K), i32::MIN);
    }

    #[test]
    fn test_update_ratings_pair() {
        let (home, away) = update_ratings(1500, 1500, false, DEFAULT_K);
        assert_eq!(home, RatingChange { old: 1500, new: 1484, delta: -16 });
        assert_eq!(away, RatingChange { old: 1500, new: 1516, delta: 16 });
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: with one K for both sides the deltas are zero-sum
            #[test]
            fn prop_deltas_are_zero_sum(
                home in -3000i32..5000,
                away in -3000i32..5000,
                home_won in any::<bool>(),
                k in 1i32..64
            ) {
                let (h, a) = update_ratings(home, away, home_won, k);
                prop_assert_eq!(h.delta, -a.delta);
                if home_won {
                    prop_assert!(h.delta >= 0);
                } else {
                    prop_assert!(h.delta <= 0);
                }
            }
        }
    }
}
