//! Upgrade / matchmaking / valuation JSON API
//!
//! Same envelope as the match API: `schema_version` must be 1 and `seed` is
//! optional (thread RNG without it).

use super::match_json::check_schema;
use crate::engine::rng::{RandomSource, SeededRandom, ThreadRandom};
use crate::matchmaking::{find_opponent, OpponentCandidate};
use crate::progression::{
    appraise, player_value, resolve_upgrade, upgrade_success_rate, UpgradeOutcome, Valuation,
    UPGRADE_COST,
};
use crate::roster::{PlayerStats, RankTier};
use crate::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Seeded when a seed is given, thread RNG otherwise.
fn with_rng<T>(seed: Option<u64>, f: impl FnOnce(&mut dyn RandomSource) -> T) -> T {
    match seed {
        Some(seed) => f(&mut SeededRandom::new(seed)),
        None => f(&mut ThreadRandom::new()),
    }
}

fn parse<'a, T: Deserialize<'a>>(json: &'a str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid JSON request: {}", e))
}

fn render<T: Serialize>(response: &T) -> Result<String, String> {
    serde_json::to_string(response).map_err(|e| format!("Failed to serialize response: {}", e))
}

// ========== Upgrade ==========

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub seed: Option<u64>,
    pub rank: RankTier,
    #[serde(default)]
    pub materials: Vec<RankTier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeResponse {
    pub schema_version: u8,
    pub from: RankTier,
    pub success_rate: f64,
    pub outcome: UpgradeOutcome,
    pub message: String,
    /// Cash the caller should debit for this attempt.
    pub cost: u32,
}

pub fn upgrade_request(request: &UpgradeRequest) -> Result<UpgradeResponse, String> {
    check_schema(request.schema_version)?;
    let success_rate =
        upgrade_success_rate(request.rank, &request.materials).map_err(|e| e.to_string())?;
    let outcome = with_rng(request.seed, |mut rng| {
        resolve_upgrade(request.rank, &request.materials, &mut rng)
    })
    .map_err(|e| e.to_string())?;

    Ok(UpgradeResponse {
        schema_version: SCHEMA_VERSION,
        from: request.rank,
        success_rate,
        outcome,
        message: outcome.message().to_string(),
        cost: UPGRADE_COST,
    })
}

/// 강화 (JSON)
pub fn upgrade_player_json(request_json: &str) -> Result<String, String> {
    render(&upgrade_request(&parse(request_json)?)?)
}

// ========== Matchmaking ==========

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpponentRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub seed: Option<u64>,
    pub host_id: u64,
    pub host_rating: i32,
    pub candidates: Vec<OpponentCandidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpponentResponse {
    pub schema_version: u8,
    pub opponent: OpponentCandidate,
}

pub fn opponent_request(request: &OpponentRequest) -> Result<OpponentResponse, String> {
    check_schema(request.schema_version)?;
    let opponent = with_rng(request.seed, |mut rng| {
        find_opponent(request.host_id, request.host_rating, &request.candidates, &mut rng).cloned()
    })
    .map_err(|e| e.to_string())?;
    Ok(OpponentResponse { schema_version: SCHEMA_VERSION, opponent })
}

/// 상대 찾기 (JSON)
pub fn find_opponent_json(request_json: &str) -> Result<String, String> {
    render(&opponent_request(&parse(request_json)?)?)
}

// ========== Valuation ==========

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub seed: Option<u64>,
    pub stats: PlayerStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueResponse {
    pub schema_version: u8,
    /// Weighted value before the random variation.
    pub base_value: f64,
    pub valuation: Valuation,
}

pub fn value_request(request: &ValueRequest) -> Result<ValueResponse, String> {
    check_schema(request.schema_version)?;
    let valuation = with_rng(request.seed, |mut rng| appraise(&request.stats, &mut rng));
    Ok(ValueResponse {
        schema_version: SCHEMA_VERSION,
        base_value: player_value(&request.stats),
        valuation,
    })
}

/// 선수 가치 평가 (JSON)
pub fn value_player_json(request_json: &str) -> Result<String, String> {
    render(&value_request(&parse(request_json)?)?)
}
