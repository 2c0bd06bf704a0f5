//! gl CLI library
//!
//! 요청 파일 로드 → gl_core 호출 → 응답 구조체
//! The binary only parses arguments and prints what these functions return.

use anyhow::{Context, Result};
use gl_core::api::{
    simulate_request, upgrade_request, value_request, MatchRequest, MatchResponse,
    UpgradeRequest, UpgradeResponse, ValueRequest, ValueResponse,
};
use gl_core::calibration::{run_seed_range, BatchReport};
use gl_core::engine::{MatchConfig, MatchSide};
use gl_core::{PlayerStats, RankTier, SCHEMA_VERSION};
use std::fs;
use std::path::Path;

/// 경기 요청 JSON 파일 읽기
pub fn load_match_request(path: &Path) -> Result<MatchRequest> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse match request: {}", path.display()))
}

/// `--config` 파일이 있으면 로드, 없으면 `None`
pub fn load_config(path: Option<&Path>) -> Result<Option<MatchConfig>> {
    path.map(|p| {
        MatchConfig::load_from_path(p)
            .with_context(|| format!("Failed to load match config: {}", p.display()))
    })
    .transpose()
}

/// `simulate`: command-line config and seed override the request file.
pub fn simulate(
    request_path: &Path,
    config_path: Option<&Path>,
    seed: Option<u64>,
) -> Result<MatchResponse> {
    let mut request = load_match_request(request_path)?;
    if let Some(config) = load_config(config_path)? {
        request.config = Some(config);
    }
    if seed.is_some() {
        request.seed = seed;
    }
    simulate_request(&request).map_err(anyhow::Error::msg)
}

/// `calibrate`: `runs` seeded matches of the request's pairing.
pub fn calibrate(
    request_path: &Path,
    config_path: Option<&Path>,
    runs: usize,
    first_seed: u64,
) -> Result<BatchReport> {
    let request = load_match_request(request_path)?;
    let config = match load_config(config_path)? {
        Some(config) => config,
        None => request.config.clone().unwrap_or_else(MatchConfig::from_env_or_default),
    };

    let home = MatchSide::new(request.home.lineup, request.home.rating);
    let away = MatchSide::new(request.away.lineup, request.away.rating);
    run_seed_range(&home, &away, &config, first_seed, runs).context("Calibration batch failed")
}

/// `upgrade`
pub fn upgrade(rank: RankTier, materials: Vec<RankTier>, seed: Option<u64>) -> Result<UpgradeResponse> {
    let request = UpgradeRequest { schema_version: SCHEMA_VERSION, seed, rank, materials };
    upgrade_request(&request).map_err(anyhow::Error::msg)
}

/// `value`
pub fn value(stats: PlayerStats, seed: Option<u64>) -> Result<ValueResponse> {
    let request = ValueRequest { schema_version: SCHEMA_VERSION, seed, stats };
    value_request(&request).map_err(anyhow::Error::msg)
}
