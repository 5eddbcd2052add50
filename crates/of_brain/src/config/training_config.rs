//! Online training and action classification parameters

use serde::{Deserialize, Serialize};

use crate::brain::predictor::TrainOptions;

/// 틱당 학습 패스 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// 학습 반복 상한 (기본: 300)
    pub iterations: usize,
    /// 오차가 이보다 작아지면 조기 종료 (기본: 0.001)
    pub error_thresh: f32,
    /// 평상시 학습률 (기본: 0.03)
    pub learning_rate: f32,
    /// 득점 틱 학습률 (기본: 0.1)
    pub scoring_learning_rate: f32,
    /// 모멘텀 (기본: 0.1)
    pub momentum: f32,
    /// 학습 중 trace 로그 주기 (기본: 50)
    pub log_period: usize,
    /// 득점 틱 보상 배수 (기본: 2.0)
    pub scoring_reward: f32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            iterations: 300,
            error_thresh: 0.001,
            learning_rate: 0.03,
            scoring_learning_rate: 0.1,
            momentum: 0.1,
            log_period: 50,
            scoring_reward: 2.0,
        }
    }
}

impl TrainingConfig {
    pub fn options_for(&self, is_scoring: bool) -> TrainOptions {
        TrainOptions {
            iterations: self.iterations,
            error_thresh: self.error_thresh,
            learning_rate: if is_scoring { self.scoring_learning_rate } else { self.learning_rate },
            momentum: self.momentum,
            log_period: self.log_period,
        }
    }

    pub fn reward_multiplier(&self, is_scoring: bool) -> f32 {
        if is_scoring {
            self.scoring_reward
        } else {
            1.0
        }
    }
}

/// 액션 분류 임계값 (strict `>`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionThresholds {
    pub shoot: f32,
    pub pass: f32,
    pub intercept: f32,
}

impl Default for ActionThresholds {
    fn default() -> Self {
        Self { shoot: 0.7, pass: 0.7, intercept: 0.7 }
    }
}
