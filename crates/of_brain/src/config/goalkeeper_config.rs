//! Goalkeeper target-synthesis geometry

use serde::{Deserialize, Serialize};

/// 골키퍼 목표 행동 계산 상수
///
/// 모든 비교는 strict(`<`): 경계값과 정확히 같으면 범위 밖.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalkeeperConfig {
    /// 골대까지 거리가 이보다 작으면 적극 대응 (기본: 200)
    pub close_to_goal: f32,
    /// 공의 골대 수평 거리가 이보다 작고 골대로 향하면 적극 대응 (기본: 250)
    pub ball_near_goal_x: f32,
    /// 공의 골대 수직 거리가 이보다 작아야 적극 대응 (기본: 150)
    pub vertical_band: f32,
    /// 골라인에서 공의 수직 오프셋까지 최적 위치 비율 (기본: 0.8)
    pub optimal_y_ratio: f32,
    /// 수직 보정 분모 (기본: 50)
    pub vertical_divisor: f32,
    /// 골라인 복귀 분모 (기본: 30)
    pub recovery_divisor: f32,
    /// 골라인 복귀 게인 (기본: 2)
    pub recovery_gain: f32,
    /// 수직 보정 게인 (기본: 3)
    pub vertical_gain: f32,
}

impl Default for GoalkeeperConfig {
    fn default() -> Self {
        Self {
            close_to_goal: 200.0,
            ball_near_goal_x: 250.0,
            vertical_band: 150.0,
            optimal_y_ratio: 0.8,
            vertical_divisor: 50.0,
            recovery_divisor: 30.0,
            recovery_gain: 2.0,
            vertical_gain: 3.0,
        }
    }
}
