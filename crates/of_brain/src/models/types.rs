//! Pitch geometry primitives

use serde::{Deserialize, Serialize};

/// 피치 좌표 (필드 단위, 기본 800 x 600)
///
/// x는 레드 골대(0)에서 블루 골대(field width) 방향으로 증가.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ZERO: Position = Position { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// 공 운동 상태 (위치 + 속도)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BallState {
    pub position: Position,
    /// 틱당 이동량 (필드 단위)
    pub velocity: Position,
}

impl BallState {
    pub fn new(position: Position, velocity: Position) -> Self {
        Self { position, velocity }
    }

    pub fn at_rest(position: Position) -> Self {
        Self { position, velocity: Position::ZERO }
    }
}
