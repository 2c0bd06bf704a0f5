// 선수 스탯 / 로스터 / 라인업
use super::rank::RankTier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 팀 인원
pub const LINEUP_SIZE: usize = 3;

/// 플레이 스타일 (가위바위보 상성)
///
/// highPressing > poacher > targetMan > highPressing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayStyle {
    HighPressing,
    Poacher,
    TargetMan,
    /// 스타일 없음
    #[default]
    #[serde(rename = "none", alias = "")]
    Unassigned,
}

impl PlayStyle {
    /// Styles that take part in the advantage cycle.
    pub const CYCLE: [PlayStyle; 3] =
        [PlayStyle::HighPressing, PlayStyle::Poacher, PlayStyle::TargetMan];

    /// 상성 우위 여부
    pub fn beats(self, other: PlayStyle) -> bool {
        matches!(
            (self, other),
            (PlayStyle::HighPressing, PlayStyle::Poacher)
                | (PlayStyle::Poacher, PlayStyle::TargetMan)
                | (PlayStyle::TargetMan, PlayStyle::HighPressing)
        )
    }

    pub fn is_assigned(self) -> bool {
        self != PlayStyle::Unassigned
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayStyle::HighPressing => "highPressing",
            PlayStyle::Poacher => "poacher",
            PlayStyle::TargetMan => "targetMan",
            PlayStyle::Unassigned => "none",
        }
    }
}

impl fmt::Display for PlayStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 선수 기본 스탯 (불변 값)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub speed: f64,
    pub shoot_accuracy: f64,
    pub shoot_power: f64,
    pub defense: f64,
    pub stamina: f64,
    #[serde(default)]
    pub style: PlayStyle,
}

impl PlayerStats {
    pub fn new(
        speed: f64,
        shoot_accuracy: f64,
        shoot_power: f64,
        defense: f64,
        stamina: f64,
        style: PlayStyle,
    ) -> Self {
        Self { speed, shoot_accuracy, shoot_power, defense, stamina, style }
    }

    /// Every stat set to `value`, no style.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value, value, PlayStyle::Unassigned)
    }

    pub fn with_style(mut self, style: PlayStyle) -> Self {
        self.style = style;
        self
    }

    /// All five stats multiplied by `factor`; style is kept.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            speed: self.speed * factor,
            shoot_accuracy: self.shoot_accuracy * factor,
            shoot_power: self.shoot_power * factor,
            defense: self.defense * factor,
            stamina: self.stamina * factor,
            style: self.style,
        }
    }

    /// Penalty kick strength: accuracy plus power.
    pub fn attack_score(&self) -> f64 {
        self.shoot_accuracy + self.shoot_power
    }
}

/// 보유 선수 (스탯 + 강화 등급)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(default)]
    pub name: String,
    pub player: PlayerStats,
    #[serde(default)]
    pub rank: RankTier,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, player: PlayerStats, rank: RankTier) -> Self {
        Self { name: name.into(), player, rank }
    }

    /// 등급 보정치가 적용된 스탯
    pub fn effective_stats(&self) -> PlayerStats {
        self.player.scaled(self.rank.stat_bonus())
    }

    pub fn style(&self) -> PlayStyle {
        self.player.style
    }
}

/// 경기 출전 라인업
///
/// Size is not enforced on construction; aggregation rejects anything other
/// than [`LINEUP_SIZE`] entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lineup {
    entries: Vec<RosterEntry>,
}

impl Lineup {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.len() == LINEUP_SIZE
    }

    pub fn styles(&self) -> Vec<PlayStyle> {
        self.entries.iter().map(RosterEntry::style).collect()
    }

    pub fn effective_stats(&self) -> Vec<PlayerStats> {
        self.entries.iter().map(RosterEntry::effective_stats).collect()
    }
}

impl From<Vec<RosterEntry>> for Lineup {
    fn from(entries: Vec<RosterEntry>) -> Self {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_cycle() {
        assert!(PlayStyle::HighPressing.beats(PlayStyle::Poacher));
        assert!(PlayStyle::Poacher.beats(PlayStyle::TargetMan));
        assert!(PlayStyle::TargetMan.beats(PlayStyle::HighPressing));

        assert!(!PlayStyle::Poacher.beats(PlayStyle::HighPressing));
        for style in PlayStyle::CYCLE {
            assert!(!style.beats(style));
            assert!(!style.beats(PlayStyle::Unassigned));
            assert!(!PlayStyle::Unassigned.beats(style));
        }
    }

    #[test]
    fn test_effective_stats_apply_rank_bonus() {
        let entry = RosterEntry::new(
            "striker",
            PlayerStats::new(80.0, 60.0, 40.0, 20.0, 100.0, PlayStyle::Poacher),
            RankTier::Legendary,
        );
        let eff = entry.effective_stats();

        assert_eq!(eff.speed, 100.0);
        assert_eq!(eff.shoot_accuracy, 75.0);
        assert_eq!(eff.shoot_power, 50.0);
        assert_eq!(eff.defense, 25.0);
        assert_eq!(eff.stamina, 125.0);
        assert_eq!(eff.style, PlayStyle::Poacher);
    }

    #[test]
    fn test_player_json_uses_camel_case() {
        let json = r#"{
            "speed": 70, "shootAccuracy": 65, "shootPower": 60,
            "defense": 40, "stamina": 80, "style": "targetMan"
        }"#;
        let stats: PlayerStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.shoot_accuracy, 65.0);
        assert_eq!(stats.style, PlayStyle::TargetMan);

        let no_style: PlayerStats = serde_json::from_str(
            r#"{"speed": 1, "shootAccuracy": 1, "shootPower": 1, "defense": 1, "stamina": 1, "style": ""}"#,
        )
        .unwrap();
        assert_eq!(no_style.style, PlayStyle::Unassigned);
    }

    #[test]
    fn test_lineup_is_complete() {
        let entry = RosterEntry::new("a", PlayerStats::uniform(50.0), RankTier::Normal);
        assert!(!Lineup::new(vec![entry.clone(); 2]).is_complete());
        assert!(Lineup::new(vec![entry.clone(); 3]).is_complete());
        assert!(Lineup::default().is_empty());
    }
}
