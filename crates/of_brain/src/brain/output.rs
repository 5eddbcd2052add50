//! Five-channel controller output (target and actual share this shape)

use serde::{Deserialize, Serialize};

use crate::models::Position;

pub const OUTPUT_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputChannels {
    pub move_x: f32,
    pub move_y: f32,
    pub shoot_ball: f32,
    pub pass_ball: f32,
    pub intercept: f32,
}

impl OutputChannels {
    /// 모든 채널에 같은 배수 적용 (보상 스케일링)
    pub fn scaled(&self, k: f32) -> Self {
        Self {
            move_x: self.move_x * k,
            move_y: self.move_y * k,
            shoot_ball: self.shoot_ball * k,
            pass_ball: self.pass_ball * k,
            intercept: self.intercept * k,
        }
    }

    pub fn to_array(&self) -> [f32; OUTPUT_SIZE] {
        [self.move_x, self.move_y, self.shoot_ball, self.pass_ball, self.intercept]
    }

    /// 예측기 원시 출력 해석. 누락되거나 유한하지 않은 채널은 0
    pub fn from_raw(raw: &[f32]) -> Self {
        let channel = |i: usize| raw.get(i).copied().filter(|v| v.is_finite()).unwrap_or(0.0);
        Self {
            move_x: channel(0),
            move_y: channel(1),
            shoot_ball: channel(2),
            pass_ball: channel(3),
            intercept: channel(4),
        }
    }

    pub fn movement(&self) -> Position {
        Position::new(self.move_x, self.move_y)
    }
}
