//! 선수 강화
//!
//! One attempt rolls against the success rate of the current rank, boosted by
//! the sacrificed materials. A failed attempt rolls for destruction first and
//! then for a one-step downgrade; if neither hits the rank is unchanged.

use crate::engine::rng::RandomSource;
use crate::error::UpgradeError;
use crate::roster::{RankTable, RankTier};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// 강화 1회 비용 (캐시). Debiting is up to the caller.
pub const UPGRADE_COST: u32 = 500;

/// 최대 강화 재료 수
pub const MAX_UPGRADE_MATERIALS: usize = 5;

/// 기본 성공 확률 (현재 등급 기준, 레전더리는 강화 불가)
pub const UPGRADE_SUCCESS_RATES: RankTable<f64> =
    RankTable::new([0.75, 0.50, 0.25, 0.05, 0.01, 0.0]);

/// 재료 등급별 성공 확률 증가량 (합산 후 곱연산)
pub const MATERIAL_BONUSES: RankTable<f64> = RankTable::new([0.1, 0.2, 0.3, 0.5, 1.0, 2.0]);

/// 실패 시 등급 하락 확률
pub const DOWNGRADE_RATES: RankTable<f64> = RankTable::new([0.0, 0.1, 0.1, 0.1, 0.09, 0.0]);

/// 실패 시 파괴 확률
pub const DESTRUCTION_RATES: RankTable<f64> = RankTable::new([0.0, 0.0, 0.0, 0.0, 0.01, 0.0]);

/// 강화 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum UpgradeOutcome {
    Success { rank: RankTier },
    Failure { rank: RankTier },
    Downgrade { rank: RankTier },
    /// The player is gone; the caller removes it from the roster.
    Destroyed,
}

impl UpgradeOutcome {
    /// Rank after the attempt, `None` when destroyed.
    pub fn rank(&self) -> Option<RankTier> {
        match self {
            UpgradeOutcome::Success { rank }
            | UpgradeOutcome::Failure { rank }
            | UpgradeOutcome::Downgrade { rank } => Some(*rank),
            UpgradeOutcome::Destroyed => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UpgradeOutcome::Success { .. })
    }

    /// 결과 안내 메시지
    pub fn message(&self) -> &'static str {
        match self {
            UpgradeOutcome::Success { .. } => "강화 성공! 선수 등급이 한 단계 올랐습니다.",
            UpgradeOutcome::Failure { .. } => "강화 실패. 등급은 그대로 유지됩니다.",
            UpgradeOutcome::Downgrade { .. } => "강화 실패. 선수 등급이 한 단계 내려갔습니다.",
            UpgradeOutcome::Destroyed => "강화 실패. 선수가 파괴되었습니다.",
        }
    }
}

fn check_attempt(current: RankTier, materials: &[RankTier]) -> Result<(), UpgradeError> {
    if current.is_max() {
        return Err(UpgradeError::AlreadyMaxRank);
    }
    if materials.len() > MAX_UPGRADE_MATERIALS {
        return Err(UpgradeError::TooManyMaterials {
            max: MAX_UPGRADE_MATERIALS,
            found: materials.len(),
        });
    }
    Ok(())
}

/// 최종 성공 확률 = min(1, base × (1 + Σ 재료 보너스))
pub fn upgrade_success_rate(
    current: RankTier,
    materials: &[RankTier],
) -> Result<f64, UpgradeError> {
    check_attempt(current, materials)?;
    let bonus: f64 = materials.iter().map(|m| MATERIAL_BONUSES.get(*m)).sum();
    Ok((UPGRADE_SUCCESS_RATES.get(current) * (1.0 + bonus)).min(1.0))
}

/// 강화 시도
///
/// Draws one value for success; a failure draws one for destruction and, if
/// the player survives, one for the downgrade.
pub fn resolve_upgrade(
    current: RankTier,
    materials: &[RankTier],
    rng: &mut impl RandomSource,
) -> Result<UpgradeOutcome, UpgradeError> {
    let success_rate = upgrade_success_rate(current, materials)?;

    let outcome = if rng.next_f64() < success_rate {
        UpgradeOutcome::Success { rank: current.next() }
    } else if rng.next_f64() < DESTRUCTION_RATES.get(current) {
        UpgradeOutcome::Destroyed
    } else if rng.next_f64() < DOWNGRADE_RATES.get(current) {
        UpgradeOutcome::Downgrade { rank: current.prev() }
    } else {
        UpgradeOutcome::Failure { rank: current }
    };

    debug!(%current, materials = materials.len(), success_rate, "upgrade roll");
    info!(%current, ?outcome, "upgrade resolved");
    Ok(outcome)
}
