//! Target-Behavior Synthesizer
//!
//! 역할별로 "이번 틱에 컨트롤러가 냈어야 할 출력"을 계산한다.
//! 순수 함수: 숨은 상태 없음, 같은 입력이면 같은 결과.
//!
//! ## 역할별 범위 (보상 스케일링 전)
//!
//! | Role | move | shoot | pass | intercept |
//! |------|------|-------|------|-----------|
//! | Forward | ±1.0 | [0, 1] | [0, 1] | 0.2 |
//! | Midfielder | ±0.8 | [0, 0.7] | [0, 1.2] | 0.5 |
//! | Defender | ±0.6 | [0, 0.3] | [0, 1.5] | 0.8 |
//! | Goalkeeper | [-1, 1] | 1 | [0, 1] | 1 |

use serde::{Deserialize, Serialize};

use super::features::InputFeatures;
use super::output::OutputChannels;
use crate::config::GoalkeeperConfig;
use crate::models::{BallState, Player, Role, TeamContext};

/// 공을 향해 (delta > 0 이면 +magnitude, 아니면 -magnitude)
fn chase(delta: f32, magnitude: f32) -> f32 {
    if delta > 0.0 {
        magnitude
    } else {
        -magnitude
    }
}

/// 0이면 0을 반환하는 부호 함수 (`f32::signum`은 0.0에서 1.0)
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// 골키퍼 판단의 중간값
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalkeeperReading {
    pub distance_to_goal: f32,
    pub ball_closing: bool,
    pub optimal_y: f32,
    pub vertical_adjustment: f32,
    pub aggressive: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TargetSynthesizer {
    goalkeeper: GoalkeeperConfig,
}

impl TargetSynthesizer {
    pub fn new(goalkeeper: GoalkeeperConfig) -> Self {
        Self { goalkeeper }
    }

    pub fn synthesize(
        &self,
        role: Role,
        input: &InputFeatures,
        player: &Player,
        ball: &BallState,
        context: &TeamContext,
    ) -> OutputChannels {
        let dx = ball.position.x - player.position.x;
        let dy = ball.position.y - player.position.y;

        match role {
            Role::Forward => OutputChannels {
                move_x: chase(dx, 1.0),
                move_y: chase(dy, 1.0),
                shoot_ball: input.in_shooting_range,
                pass_ball: input.in_passing_range,
                intercept: 0.2,
            },
            Role::Midfielder => OutputChannels {
                move_x: chase(dx, 0.8),
                move_y: chase(dy, 0.8),
                shoot_ball: input.in_shooting_range * 0.7,
                pass_ball: input.in_passing_range * 1.2,
                intercept: 0.5,
            },
            // 공과 거리 유지: player - ball > 0 이면 음수 방향
            Role::Defender => OutputChannels {
                move_x: -chase(-dx, 0.6),
                move_y: -chase(-dy, 0.6),
                shoot_ball: input.in_shooting_range * 0.3,
                pass_ball: input.in_passing_range * 1.5,
                intercept: 0.8,
            },
            Role::Goalkeeper => self.goalkeeper_target(input, player, ball, context),
        }
    }

    pub fn goalkeeper_reading(&self, player: &Player, ball: &BallState, context: &TeamContext) -> GoalkeeperReading {
        let gk = &self.goalkeeper;
        let goal = context.own_goal;

        let distance_to_goal = player.position.distance_to(&goal);
        let ball_closing = player.team.is_toward_own_goal(ball.velocity.x);
        let optimal_y = goal.y + (ball.position.y - goal.y) * gk.optimal_y_ratio;
        let vertical_adjustment = (optimal_y - player.position.y) / gk.vertical_divisor;

        let aggressive = (distance_to_goal < gk.close_to_goal
            || ((ball.position.x - goal.x).abs() < gk.ball_near_goal_x && ball_closing))
            && (ball.position.y - goal.y).abs() < gk.vertical_band;

        GoalkeeperReading { distance_to_goal, ball_closing, optimal_y, vertical_adjustment, aggressive }
    }

    fn goalkeeper_target(
        &self,
        input: &InputFeatures,
        player: &Player,
        ball: &BallState,
        context: &TeamContext,
    ) -> OutputChannels {
        let gk = &self.goalkeeper;
        let reading = self.goalkeeper_reading(player, ball, context);

        let (move_x, move_y) = if reading.aggressive {
            (
                sign(ball.position.x - player.position.x),
                sign(ball.position.y - player.position.y),
            )
        } else {
            let x_offset = player.position.x - context.own_goal.x;
            let recovery = -x_offset / gk.recovery_divisor;
            (
                (recovery * gk.recovery_gain).clamp(-1.0, 1.0),
                (reading.vertical_adjustment * gk.vertical_gain).clamp(-1.0, 1.0),
            )
        };

        OutputChannels {
            move_x,
            move_y,
            // 항상 걷어내기/가로채기 시도
            shoot_ball: 1.0,
            pass_ball: input.in_passing_range,
            intercept: 1.0,
        }
    }
}
