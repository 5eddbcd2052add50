//! Pitch dimensions and featurizer ranges

use serde::{Deserialize, Serialize};

/// 필드 크기와 입력 특성 계산용 거리 기준
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// 필드 가로 (기본: 800)
    pub width: f32,
    /// 필드 세로 (기본: 600)
    pub height: f32,
    /// 상대 골대까지 이 거리 미만이면 슈팅 범위 (기본: 200)
    pub shooting_range: f32,
    /// 동료가 이 거리 미만에 있으면 패스 범위 (기본: 150)
    pub passing_range: f32,
    /// 속도 정규화 기준 (틱당 필드 단위, 기본: 20)
    pub max_ball_speed: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            shooting_range: 200.0,
            passing_range: 150.0,
            max_ball_speed: 20.0,
        }
    }
}

impl FieldConfig {
    pub fn diagonal(&self) -> f32 {
        self.width.hypot(self.height)
    }
}
