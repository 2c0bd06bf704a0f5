// 팀 컬러 (플레이 스타일 상성) 시스템
use super::stats::TeamStats;
use crate::roster::PlayStyle;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// 팀 컬러로 인정되는 최소 인원
pub const DOMINANT_STYLE_MIN_COUNT: usize = 2;

/// 스타일 보너스 적용 여부
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleBonus {
    pub home: bool,
    pub away: bool,
}

/// 팀 컬러: 2명 이상이 공유하는 스타일, 없으면 `Unassigned`
pub fn dominant_style(styles: &[PlayStyle]) -> PlayStyle {
    let mut counts: HashMap<PlayStyle, usize> = HashMap::new();
    for style in styles.iter().copied().filter(|s| s.is_assigned()) {
        *counts.entry(style).or_insert(0) += 1;
    }

    PlayStyle::CYCLE
        .into_iter()
        .find(|style| counts.get(style).copied().unwrap_or(0) >= DOMINANT_STYLE_MIN_COUNT)
        .unwrap_or(PlayStyle::Unassigned)
}

/// One side's rule: its style beats the opponent's, or it has a style and the
/// opponent has none.
fn has_advantage(own: PlayStyle, opponent: PlayStyle) -> bool {
    own.is_assigned() && (own.beats(opponent) || !opponent.is_assigned())
}

/// 상성 판정 (양 팀 독립적으로 같은 규칙 적용)
pub fn resolve_style_bonus(home_styles: &[PlayStyle], away_styles: &[PlayStyle]) -> StyleBonus {
    let home = dominant_style(home_styles);
    let away = dominant_style(away_styles);
    let bonus = StyleBonus { home: has_advantage(home, away), away: has_advantage(away, home) };

    debug!(%home, %away, home_bonus = bonus.home, away_bonus = bonus.away, "style matchup");
    bonus
}

/// Applies `advantage` to every stat of each side that earned the bonus.
pub fn apply_style_bonus(
    bonus: StyleBonus,
    home: &mut TeamStats,
    away: &mut TeamStats,
    advantage: f64,
) {
    if bonus.home {
        home.scale_all(advantage);
    }
    if bonus.away {
        away.scale_all(advantage);
    }
}
