//! Match JSON API
//!
//! Request (schema_version = 1):
//! ```json
//! {
//!   "schema_version": 1,
//!   "seed": 42,
//!   "home": { "account_id": 1, "rating": 1500, "lineup": [ ... ] },
//!   "away": { "account_id": 2, "rating": 1480, "lineup": [ ... ] },
//!   "config": { "phases": 50 }
//! }
//! ```
//! `seed` and `config` are optional. Without a seed the match uses the thread
//! RNG; without a config the `GL_MATCH_PROFILE` profile applies.

use super::record::MatchRecord;
use crate::engine::config::MatchConfig;
use crate::engine::match_runner::{play_match, MatchResult, MatchSide};
use crate::engine::rng::{SeededRandom, ThreadRandom};
use crate::error::MatchError;
use crate::roster::Lineup;
use crate::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamEntry {
    pub account_id: u64,
    pub rating: i32,
    pub lineup: Lineup,
}

impl TeamEntry {
    fn side(&self) -> MatchSide {
        MatchSide { lineup: self.lineup.clone(), rating: self.rating }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub seed: Option<u64>,
    pub home: TeamEntry,
    pub away: TeamEntry,
    #[serde(default)]
    pub config: Option<MatchConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    pub record: MatchRecord,
}

pub(crate) fn check_schema(version: u8) -> Result<(), String> {
    if version != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", version));
    }
    Ok(())
}

/// Runs one match from seed and optional config.
pub fn run_match(
    home: &MatchSide,
    away: &MatchSide,
    config: &MatchConfig,
    seed: Option<u64>,
) -> Result<MatchResult, MatchError> {
    match seed {
        Some(seed) => play_match(home, away, config, &mut SeededRandom::new(seed)),
        None => play_match(home, away, config, &mut ThreadRandom::new()),
    }
}

/// Typed entry point; `simulate_match_json` wraps it.
pub fn simulate_request(request: &MatchRequest) -> Result<MatchResponse, String> {
    check_schema(request.schema_version)?;
    if request.home.account_id == request.away.account_id {
        return Err(format!("Account {} cannot play itself", request.home.account_id));
    }

    let config = request.config.clone().unwrap_or_else(MatchConfig::from_env_or_default);
    let result = run_match(&request.home.side(), &request.away.side(), &config, request.seed)
        .map_err(|e| {
            if e.is_caller_error() {
                warn!(error = %e, "rejected match request");
            }
            format!("Match failed: {}", e)
        })?;

    Ok(MatchResponse {
        schema_version: SCHEMA_VERSION,
        record: MatchRecord::new(request.home.account_id, request.away.account_id, result),
    })
}

/// 경기 시뮬레이션 (JSON in, JSON out)
pub fn simulate_match_json(request_json: &str) -> Result<String, String> {
    let request: MatchRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    let response = simulate_request(&request)?;
    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}
