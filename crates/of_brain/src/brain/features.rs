//! Input featurization
//!
//! 공/선수/팀 컨텍스트를 고정 길이 입력 벡터로 변환.

use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;
use crate::models::{BallState, Position, TeamContext};

pub const INPUT_SIZE: usize = 12;

/// 컨트롤러 입력 특성 (모두 대략 [0, 1], 속도만 [-1, 1])
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputFeatures {
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub player_x: f32,
    pub player_y: f32,
    pub dist_to_ball: f32,
    pub dist_to_opponent_goal: f32,
    pub dist_to_own_goal: f32,
    /// 1.0 = 슈팅 범위 안
    pub in_shooting_range: f32,
    /// 1.0 = 패스 가능한 동료 있음
    pub in_passing_range: f32,
    /// 가장 가까운 상대까지 거리 (상대가 없으면 1.0)
    pub nearest_opponent: f32,
}

impl InputFeatures {
    pub fn to_array(&self) -> [f32; INPUT_SIZE] {
        [
            self.ball_x,
            self.ball_y,
            self.ball_vx,
            self.ball_vy,
            self.player_x,
            self.player_y,
            self.dist_to_ball,
            self.dist_to_opponent_goal,
            self.dist_to_own_goal,
            self.in_shooting_range,
            self.in_passing_range,
            self.nearest_opponent,
        ]
    }
}

pub trait Featurizer {
    fn make_input(&self, ball: &BallState, player_position: &Position, context: &TeamContext) -> InputFeatures;
}

/// 필드 크기 기준 정규화 featurizer
#[derive(Debug, Clone, Default)]
pub struct FieldFeaturizer {
    field: FieldConfig,
}

impl FieldFeaturizer {
    pub fn new(field: FieldConfig) -> Self {
        Self { field }
    }
}

fn indicator(flag: bool) -> f32 {
    if flag {
        1.0
    } else {
        0.0
    }
}

impl Featurizer for FieldFeaturizer {
    fn make_input(&self, ball: &BallState, player_position: &Position, context: &TeamContext) -> InputFeatures {
        let field = &self.field;
        let diagonal = field.diagonal();
        let unit = |v: f32, span: f32| (v / span).clamp(0.0, 1.0);
        let speed = |v: f32| (v / field.max_ball_speed).clamp(-1.0, 1.0);

        let to_opponent_goal = player_position.distance_to(&context.opponent_goal);
        let in_passing_range = context
            .teammates
            .iter()
            .any(|mate| player_position.distance_to(mate) < field.passing_range);
        let nearest_opponent = context
            .opponents
            .iter()
            .map(|opp| player_position.distance_to(opp))
            .fold(None, |acc: Option<f32>, d| Some(acc.map_or(d, |a| a.min(d))));

        InputFeatures {
            ball_x: unit(ball.position.x, field.width),
            ball_y: unit(ball.position.y, field.height),
            ball_vx: speed(ball.velocity.x),
            ball_vy: speed(ball.velocity.y),
            player_x: unit(player_position.x, field.width),
            player_y: unit(player_position.y, field.height),
            dist_to_ball: unit(player_position.distance_to(&ball.position), diagonal),
            dist_to_opponent_goal: unit(to_opponent_goal, diagonal),
            dist_to_own_goal: unit(player_position.distance_to(&context.own_goal), diagonal),
            in_shooting_range: indicator(to_opponent_goal < field.shooting_range),
            in_passing_range: indicator(in_passing_range),
            nearest_opponent: nearest_opponent.map_or(1.0, |d| unit(d, diagonal)),
        }
    }
}
