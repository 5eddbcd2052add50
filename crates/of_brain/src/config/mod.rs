//! # Brain Configuration Module
//!
//! 컨트롤러 학습/판단에 쓰이는 모든 튜닝 상수를 중앙에서 관리.
//!
//! ## 사용법
//! ```rust
//! use of_brain::config::BrainConfig;
//!
//! let config = BrainConfig::default();
//! let fast = BrainConfig::fast_adapt();
//! assert!(fast.training.learning_rate > config.training.learning_rate);
//! ```
//!
//! ## Environment Variables
//!
//! - `OF_BRAIN_PROFILE`: preset 선택 (fast_adapt, steady, default)

mod field_config;
mod goalkeeper_config;
mod network_config;
mod training_config;

pub use field_config::FieldConfig;
pub use goalkeeper_config::GoalkeeperConfig;
pub use network_config::NetworkConfig;
pub use training_config::{ActionThresholds, TrainingConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::{BrainError, Result};

/// 전체 설정
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BrainConfig {
    pub field: FieldConfig,
    pub network: NetworkConfig,
    pub training: TrainingConfig,
    pub actions: ActionThresholds,
    pub goalkeeper: GoalkeeperConfig,
}

impl BrainConfig {
    /// 보상에 빠르게 반응 (학습률 2배, 반복 절반)
    pub fn fast_adapt() -> Self {
        let mut cfg = Self::default();
        cfg.training.learning_rate = 0.06;
        cfg.training.scoring_learning_rate = 0.2;
        cfg.training.iterations = 150;
        cfg
    }

    /// 느리고 안정적인 드리프트
    pub fn steady() -> Self {
        let mut cfg = Self::default();
        cfg.training.learning_rate = 0.015;
        cfg.training.scoring_learning_rate = 0.05;
        cfg.training.iterations = 500;
        cfg
    }

    pub fn from_env_or_default() -> Self {
        match env::var("OF_BRAIN_PROFILE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "fast_adapt" | "fast" => Self::fast_adapt(),
            "steady" => Self::steady(),
            _ => Self::default(),
        }
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// 확장자로 포맷 판별 (.json 외에는 YAML로 취급)
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text),
            _ => Self::from_yaml_str(&text),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let t = &self.training;
        if t.iterations == 0 {
            return Err(BrainError::InvalidConfig("training.iterations must be > 0".into()));
        }
        for (name, lr) in [
            ("training.learning_rate", t.learning_rate),
            ("training.scoring_learning_rate", t.scoring_learning_rate),
        ] {
            if !lr.is_finite() || lr <= 0.0 {
                return Err(BrainError::InvalidConfig(format!("{} must be finite and > 0", name)));
            }
        }
        if !t.error_thresh.is_finite() || t.error_thresh < 0.0 {
            return Err(BrainError::InvalidConfig("training.error_thresh must be >= 0".into()));
        }
        if !t.momentum.is_finite() || !(0.0..1.0).contains(&t.momentum) {
            return Err(BrainError::InvalidConfig("training.momentum must be in [0, 1)".into()));
        }
        if !t.scoring_reward.is_finite() {
            return Err(BrainError::InvalidConfig("training.scoring_reward must be finite".into()));
        }
        if self.network.hidden_layers.is_empty() || self.network.hidden_layers.contains(&0) {
            return Err(BrainError::InvalidConfig(
                "network.hidden_layers must be non-empty with non-zero widths".into(),
            ));
        }
        let f = &self.field;
        for (name, value) in [
            ("field.width", f.width),
            ("field.height", f.height),
            ("field.shooting_range", f.shooting_range),
            ("field.passing_range", f.passing_range),
            ("field.max_ball_speed", f.max_ball_speed),
        ] {
            // NaN은 `<= 0.0` 비교를 통과하므로 is_finite 먼저
            if !value.is_finite() || value <= 0.0 {
                return Err(BrainError::InvalidConfig(format!("{} must be finite and > 0", name)));
            }
        }
        let a = &self.actions;
        if ![a.shoot, a.pass, a.intercept].iter().all(|v| v.is_finite()) {
            return Err(BrainError::InvalidConfig("actions thresholds must be finite".into()));
        }
        if self.goalkeeper.vertical_divisor == 0.0 || self.goalkeeper.recovery_divisor == 0.0 {
            return Err(BrainError::InvalidConfig("goalkeeper divisors must be non-zero".into()));
        }
        Ok(())
    }
}
