// 선수 등급 (강화 단계)
use serde::{Deserialize, Serialize};
use std::fmt;

/// 강화 등급 NORMAL < MAGIC < RARE < UNIQUE < EPIC < LEGENDARY
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RankTier {
    #[default]
    Normal = 0,
    Magic = 1,
    Rare = 2,
    Unique = 3,
    Epic = 4,
    Legendary = 5,
}

impl RankTier {
    pub const COUNT: usize = 6;

    pub const ALL: [RankTier; Self::COUNT] = [
        RankTier::Normal,
        RankTier::Magic,
        RankTier::Rare,
        RankTier::Unique,
        RankTier::Epic,
        RankTier::Legendary,
    ];

    /// Slot of this tier in a [`RankTable`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// 한 단계 위 등급 (LEGENDARY는 그대로)
    pub fn next(self) -> RankTier {
        Self::ALL[(self.index() + 1).min(Self::COUNT - 1)]
    }

    /// 한 단계 아래 등급 (NORMAL은 그대로)
    pub fn prev(self) -> RankTier {
        Self::ALL[self.index().saturating_sub(1)]
    }

    pub fn is_max(self) -> bool {
        self == RankTier::Legendary
    }

    /// 노말 대비 올스탯 상승률
    pub fn stat_bonus(self) -> f64 {
        STAT_BONUSES.get(self)
    }

    pub fn name(self) -> &'static str {
        match self {
            RankTier::Normal => "normal",
            RankTier::Magic => "magic",
            RankTier::Rare => "rare",
            RankTier::Unique => "unique",
            RankTier::Epic => "epic",
            RankTier::Legendary => "legendary",
        }
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for RankTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RankTier::ALL
            .into_iter()
            .find(|rank| rank.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown rank tier: {}", s))
    }
}

/// Constant table with one slot per [`RankTier`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankTable<T: Copy>([T; RankTier::COUNT]);

impl<T: Copy> RankTable<T> {
    pub const fn new(values: [T; RankTier::COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, rank: RankTier) -> T {
        self.0[rank.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (RankTier, T)> + '_ {
        RankTier::ALL.iter().map(move |&rank| (rank, self.get(rank)))
    }
}

/// 강화 스탯 상승률 (노말 대비)
pub const STAT_BONUSES: RankTable<f64> = RankTable::new([1.0, 1.02, 1.05, 1.09, 1.15, 1.25]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(RankTier::Normal < RankTier::Magic);
        assert!(RankTier::Epic < RankTier::Legendary);
        let mut sorted = RankTier::ALL;
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, RankTier::ALL);
    }

    #[test]
    fn test_next_and_prev_saturate() {
        assert_eq!(RankTier::Normal.prev(), RankTier::Normal);
        assert_eq!(RankTier::Normal.next(), RankTier::Magic);
        assert_eq!(RankTier::Legendary.next(), RankTier::Legendary);
        assert_eq!(RankTier::Legendary.prev(), RankTier::Epic);
    }

    #[test]
    fn test_stat_bonus_range() {
        assert_eq!(RankTier::Normal.stat_bonus(), 1.0);
        assert_eq!(RankTier::Legendary.stat_bonus(), 1.25);
        let bonuses: Vec<f64> = STAT_BONUSES.iter().map(|(_, b)| b).collect();
        assert!(bonuses.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_rank() {
        assert_eq!("EPIC".parse::<RankTier>(), Ok(RankTier::Epic));
        assert_eq!(" rare ".parse::<RankTier>(), Ok(RankTier::Rare));
        assert!("mythic".parse::<RankTier>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&RankTier::Unique).unwrap();
        assert_eq!(json, "\"unique\"");
        let back: RankTier = serde_json::from_str("\"legendary\"").unwrap();
        assert_eq!(back, RankTier::Legendary);
    }
}
