//! 선수 가치 평가
//!
//! Value is a weighted sum of the five stats; the shop price and the gacha
//! pickup weight are both derived from it.

use crate::engine::rng::RandomSource;
use crate::roster::PlayerStats;
use serde::{Deserialize, Serialize};

/// 가중치: 공격 능력 위주
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueWeights {
    pub shoot_accuracy: f64,
    pub shoot_power: f64,
    pub speed: f64,
    pub stamina: f64,
    pub defense: f64,
}

pub const VALUE_WEIGHTS: ValueWeights = ValueWeights {
    shoot_accuracy: 0.3,
    shoot_power: 0.3,
    speed: 0.3,
    stamina: 0.05,
    defense: 0.05,
};

/// ±5% 변동
pub const VALUE_VARIATION: f64 = 0.05;

/// 가격 = round(가치 × 60)
pub const PRICE_PER_VALUE: f64 = 60.0;

/// 뽑기 가중치 = round(1e5 / 가치), 최소 1
pub const PICKUP_WEIGHT_SCALE: f64 = 1e5;

/// 기본 가치 (변동 없음)
pub fn player_value(stats: &PlayerStats) -> f64 {
    let w = VALUE_WEIGHTS;
    stats.shoot_accuracy * w.shoot_accuracy
        + stats.shoot_power * w.shoot_power
        + stats.speed * w.speed
        + stats.stamina * w.stamina
        + stats.defense * w.defense
}

/// 가치 + 무작위 변동 (±5%)
pub fn value_with_variation(stats: &PlayerStats, rng: &mut impl RandomSource) -> f64 {
    let variation = rng.uniform(-VALUE_VARIATION, VALUE_VARIATION);
    player_value(stats) * (1.0 + variation)
}

pub fn price(value: f64) -> i64 {
    (value * PRICE_PER_VALUE).round() as i64
}

/// Lower value means a higher chance to be drawn.
pub fn pickup_weight(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        return 1;
    }
    ((PICKUP_WEIGHT_SCALE / value).round() as u64).max(1)
}

/// Priced listing for one player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    pub value: f64,
    pub price: i64,
    pub pickup_weight: u64,
}

impl Valuation {
    pub fn from_value(value: f64) -> Self {
        Self { value, price: price(value), pickup_weight: pickup_weight(value) }
    }
}

pub fn appraise(stats: &PlayerStats, rng: &mut impl RandomSource) -> Valuation {
    Valuation::from_value(value_with_variation(stats, rng))
}
