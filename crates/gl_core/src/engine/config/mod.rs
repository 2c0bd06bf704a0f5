//! # Match Configuration
//!
//! 경기 시뮬레이션 튜닝 상수를 한 곳에서 관리한다.
//!
//! ## 사용법
//! ```rust
//! use gl_core::engine::config::MatchConfig;
//!
//! let config = MatchConfig::default();
//! let arcade = MatchConfig::arcade();
//! assert!(arcade.shootable_distance < config.shootable_distance);
//! ```
//!
//! ## Environment Variables
//!
//! - `GL_MATCH_PROFILE`: Select preset (production, arcade)

mod stamina_config;

pub use stamina_config::StaminaConfig;

use crate::error::{ConfigError, MatchError};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// 페이즈 수 상한
pub const MAX_PHASES: u32 = 10_000;

/// 승부차기 라운드 상한
pub const MAX_SHOOTOUT_ROUNDS: u32 = 10_000;

/// 경기 엔진 전체 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// 페이즈 수 (기본: 50)
    pub phases: u32,
    /// 공 이동 기본 랜덤 계수 (기본: 30)
    pub random_range: f64,
    /// 슛 시도 가능 거리 (기본: 80)
    pub shootable_distance: f64,
    /// 팀 컬러 보너스 비율 (기본: 1.1)
    pub style_advantage: f64,
    /// 골 확률 상한 (기본: 100)
    pub goal_rate_cap: f64,
    /// ELO K 계수 (기본: 32)
    pub k_factor: i32,
    /// Sudden-death cap before the shootout is settled by lot (기본: 100)
    pub max_shootout_rounds: u32,
    /// Stamina / fatigue
    pub stamina: StaminaConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            phases: 50,
            random_range: 30.0,
            shootable_distance: 80.0,
            style_advantage: 1.1,
            goal_rate_cap: 100.0,
            k_factor: 32,
            max_shootout_rounds: 100,
            stamina: StaminaConfig::default(),
        }
    }
}

impl MatchConfig {
    /// 라이브 서비스 설정 (기본)
    pub fn production() -> Self {
        Self::default()
    }

    /// 아케이드 스타일 (짧은 슛 거리, 더 많은 골)
    pub fn arcade() -> Self {
        let mut cfg = Self::default();
        cfg.random_range = 35.0;
        cfg.shootable_distance = 60.0;
        cfg.stamina.decay_rate = 0.98;
        cfg
    }

    /// Same config with a different phase count.
    pub fn with_phases(mut self, phases: u32) -> Self {
        self.phases = phases;
        self
    }

    pub fn from_env_or_default() -> Self {
        match env::var("GL_MATCH_PROFILE").unwrap_or_default().to_lowercase().as_str() {
            "arcade" => Self::arcade(),
            _ => Self::production(),
        }
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        self.check().map_err(MatchError::InvalidConfig)
    }

    fn check(&self) -> Result<(), String> {
        if self.phases == 0 || self.phases > MAX_PHASES {
            return Err(format!("phases must be in 1..={MAX_PHASES}, got {}", self.phases));
        }
        if !(self.random_range.is_finite() && self.random_range > 0.0) {
            return Err(format!("random_range must be positive, got {}", self.random_range));
        }
        if !(self.shootable_distance.is_finite() && self.shootable_distance > 0.0) {
            return Err(format!(
                "shootable_distance must be positive, got {}",
                self.shootable_distance
            ));
        }
        if !(self.style_advantage.is_finite() && self.style_advantage > 0.0) {
            return Err(format!("style_advantage must be positive, got {}", self.style_advantage));
        }
        if !(self.goal_rate_cap.is_finite() && self.goal_rate_cap > 0.0) {
            return Err(format!("goal_rate_cap must be positive, got {}", self.goal_rate_cap));
        }
        if self.k_factor <= 0 {
            return Err(format!("k_factor must be positive, got {}", self.k_factor));
        }
        if self.max_shootout_rounds == 0 || self.max_shootout_rounds > MAX_SHOOTOUT_ROUNDS {
            return Err(format!(
                "max_shootout_rounds must be in 1..={MAX_SHOOTOUT_ROUNDS}, got {}",
                self.max_shootout_rounds
            ));
        }
        self.stamina.validate()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_yaml::from_str(yaml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a `.yaml`/`.yml` or `.json` file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()).map(str::to_lowercase).as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            Some("json") => Self::from_json_str(&text),
            _ => Err(ConfigError::UnsupportedFormat { path: path.display().to_string() }),
        }
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let cfg = MatchConfig::default();
        assert_eq!(cfg.phases, 50);
        assert_eq!(cfg.random_range, 30.0);
        assert_eq!(cfg.shootable_distance, 80.0);
        assert_eq!(cfg.k_factor, 32);
        assert!((cfg.stamina.decay_rate - 0.97).abs() < 1e-9);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_arcade_reaches_shots_sooner() {
        let production = MatchConfig::production();
        let arcade = MatchConfig::arcade();
        assert!(arcade.shootable_distance < production.shootable_distance);
        assert!(arcade.random_range > production.random_range);
        assert!(arcade.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_phases() {
        let cfg = MatchConfig::default().with_phases(0);
        assert!(matches!(cfg.validate(), Err(MatchError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_non_positive_k_factor() {
        for k_factor in [0, -32] {
            let cfg = MatchConfig { k_factor, ..MatchConfig::default() };
            assert!(matches!(cfg.validate(), Err(MatchError::InvalidConfig(_))), "k {k_factor}");
        }
        let err = MatchConfig::from_json_str(r#"{"k_factor": -32}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(MatchError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_bounds_loop_counts() {
        assert!(MatchConfig::default().with_phases(MAX_PHASES).validate().is_ok());
        assert!(MatchConfig::default().with_phases(MAX_PHASES + 1).validate().is_err());
        assert!(MatchConfig::default().with_phases(u32::MAX).validate().is_err());

        let rounds = MatchConfig { max_shootout_rounds: u32::MAX, ..MatchConfig::default() };
        assert!(rounds.validate().is_err());
    }

    #[test]
    fn test_nan_multipliers_are_rejected() {
        let style = MatchConfig::from_yaml_str("style_advantage: .nan\n").unwrap_err();
        assert!(matches!(style, ConfigError::Invalid(MatchError::InvalidConfig(_))));

        let cap = MatchConfig { goal_rate_cap: f64::NAN, ..MatchConfig::default() };
        assert!(cap.validate().is_err());
        let inf = MatchConfig { style_advantage: f64::INFINITY, ..MatchConfig::default() };
        assert!(inf.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let cfg = MatchConfig::from_yaml_str("phases: 20\nstamina:\n  decay_rate: 0.9\n").unwrap();
        assert_eq!(cfg.phases, 20);
        assert_eq!(cfg.stamina.decay_rate, 0.9);
        assert_eq!(cfg.stamina.tired_threshold, 50.0);
        assert_eq!(cfg.shootable_distance, 80.0);
    }

    #[test]
    fn test_invalid_json_config_is_rejected() {
        let err = MatchConfig::from_json_str(r#"{"random_range": -1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(MatchError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_from_path() {
        let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(yaml, "phases: 30\nk_factor: 16").unwrap();
        let cfg = MatchConfig::load_from_path(yaml.path()).unwrap();
        assert_eq!(cfg.phases, 30);
        assert_eq!(cfg.k_factor, 16);

        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, "{}", serde_json::to_string(&MatchConfig::arcade()).unwrap()).unwrap();
        let loaded = MatchConfig::load_from_path(json.path()).unwrap();
        assert_eq!(loaded.shootable_distance, 60.0);
        assert_eq!(loaded.phases, 50);

        let txt = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        assert!(matches!(
            MatchConfig::load_from_path(txt.path()),
            Err(ConfigError::UnsupportedFormat { .. })
        ));
    }
}
