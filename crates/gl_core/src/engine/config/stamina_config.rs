//! Stamina Configuration

use serde::{Deserialize, Serialize};

/// Stamina 감소 / 피로 파라미터
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaminaConfig {
    /// 페이즈마다 곱해지는 stamina 감소율 (기본: 0.97)
    pub decay_rate: f64,
    /// 피로 판정 주기 (페이즈 수) (기본: 10)
    pub fatigue_interval: u32,

    // === Fatigue Thresholds ===
    /// 이 값 미만이면 지친 상태 (기본: 50)
    pub tired_threshold: f64,
    /// 지친 상태 능력치 배율 (기본: 0.9)
    pub tired_penalty: f64,
    /// 이 값 미만이면 탈진 상태 (기본: 25)
    pub exhausted_threshold: f64,
    /// 탈진 상태 능력치 배율 (기본: 0.8)
    pub exhausted_penalty: f64,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            decay_rate: 0.97,
            fatigue_interval: 10,

            tired_threshold: 50.0,
            tired_penalty: 0.9,
            exhausted_threshold: 25.0,
            exhausted_penalty: 0.8,
        }
    }
}

impl StaminaConfig {
    /// Whether `phase` (1-based) is a fatigue checkpoint.
    pub fn is_checkpoint(&self, phase: u32) -> bool {
        self.fatigue_interval > 0 && phase % self.fatigue_interval == 0
    }

    /// Multiplier for the non-stamina stats at a checkpoint.
    ///
    /// Thresholds are exclusive of each other; the lower one wins.
    pub fn fatigue_factor(&self, stamina: f64) -> Option<f64> {
        if stamina < self.exhausted_threshold {
            Some(self.exhausted_penalty)
        } else if stamina < self.tired_threshold {
            Some(self.tired_penalty)
        } else {
            None
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if !(self.decay_rate > 0.0 && self.decay_rate <= 1.0) {
            return Err(format!("stamina decay_rate must be in (0, 1], got {}", self.decay_rate));
        }
        if self.fatigue_interval == 0 {
            return Err("stamina fatigue_interval must be positive".to_string());
        }
        if self.exhausted_threshold > self.tired_threshold {
            return Err(format!(
                "exhausted_threshold ({}) must not exceed tired_threshold ({})",
                self.exhausted_threshold, self.tired_threshold
            ));
        }
        for (name, penalty) in
            [("tired_penalty", self.tired_penalty), ("exhausted_penalty", self.exhausted_penalty)]
        {
            if !(penalty > 0.0 && penalty <= 1.0) {
                return Err(format!("{} must be in (0, 1], got {}", name, penalty));
            }
        }
        Ok(())
    }
}
