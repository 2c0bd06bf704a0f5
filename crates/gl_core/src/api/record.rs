//! 경기 기록 (persistence hand-off)
//!
//! The caller stores the record and applies both rating updates in the same
//! transaction; nothing here touches storage.

use crate::engine::match_runner::MatchResult;
use crate::engine::Side;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingUpdate {
    pub account_id: u64,
    pub old: i32,
    pub new: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: Uuid,
    pub played_at: DateTime<Utc>,
    pub home_account_id: u64,
    pub away_account_id: u64,
    pub result: MatchResult,
}

impl MatchRecord {
    pub fn new(home_account_id: u64, away_account_id: u64, result: MatchResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            played_at: Utc::now(),
            home_account_id,
            away_account_id,
            result,
        }
    }

    pub fn account_id(&self, side: Side) -> u64 {
        match side {
            Side::Home => self.home_account_id,
            Side::Away => self.away_account_id,
        }
    }

    pub fn winner_account_id(&self) -> u64 {
        self.account_id(self.result.winner)
    }

    /// Home first, then away.
    pub fn rating_updates(&self) -> [RatingUpdate; 2] {
        [Side::Home, Side::Away].map(|side| {
            let change = self.result.rating(side);
            RatingUpdate { account_id: self.account_id(side), old: change.old, new: change.new }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rating::RatingChange;
    use crate::engine::style::StyleBonus;

    fn result() -> MatchResult {
        MatchResult {
            home_goals: 2,
            away_goals: 1,
            winner: Side::Home,
            shootout: None,
            style_bonus: StyleBonus::default(),
            log: vec![],
            home_rating: RatingChange::new(1500, 1516),
            away_rating: RatingChange::new(1500, 1484),
        }
    }

    #[test]
    fn test_rating_updates() {
        let record = MatchRecord::new(7, 9, result());
        assert_eq!(
            record.rating_updates(),
            [
                RatingUpdate { account_id: 7, old: 1500, new: 1516 },
                RatingUpdate { account_id: 9, old: 1500, new: 1484 },
            ]
        );
        assert_eq!(record.winner_account_id(), 7);
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let a = MatchRecord::new(1, 2, result());
        let b = MatchRecord::new(1, 2, result());
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.get_version_num(), 4);
    }

    #[test]
    fn test_record_json_round_trip() {
        let record = MatchRecord::new(1, 2, result());
        let json = serde_json::to_string(&record).unwrap();
        let back: MatchRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, record.id);
        assert_eq!(back.played_at, record.played_at);
        assert_eq!(back.result, record.result);
    }
}
