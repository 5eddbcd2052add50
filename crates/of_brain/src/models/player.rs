//! Player identity: side, role, position

use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::Position;

/// 팀 (진영)
///
/// - `Red`: 낮은 x 쪽 골대를 수비
/// - `Blue`: 높은 x 쪽 골대를 수비
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    /// 공의 수평 속도가 자기 골대를 향하는지 여부
    pub fn is_toward_own_goal(&self, velocity_x: f32) -> bool {
        match self {
            Team::Red => velocity_x < 0.0,
            Team::Blue => velocity_x > 0.0,
        }
    }

    pub fn opponent(&self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Red => "red",
            Team::Blue => "blue",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 포지션 역할 - 목표 행동 합성 분기를 결정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Forward, Role::Midfielder, Role::Defender, Role::Goalkeeper];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Forward => "forward",
            Role::Midfielder => "midfielder",
            Role::Defender => "defender",
            Role::Goalkeeper => "goalkeeper",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub team: Team,
    pub role: Role,
    pub position: Position,
}

impl Player {
    pub fn new(id: u32, team: Team, role: Role, position: Position) -> Self {
        Self { id, team, role, position }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} #{}", self.team, self.role, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toward_own_goal_is_side_dependent() {
        assert!(Team::Red.is_toward_own_goal(-1.0));
        assert!(!Team::Red.is_toward_own_goal(1.0));
        assert!(Team::Blue.is_toward_own_goal(1.0));
        assert!(!Team::Blue.is_toward_own_goal(-1.0));
        // 정지한 공은 어느 쪽으로도 향하지 않음
        assert!(!Team::Red.is_toward_own_goal(0.0));
        assert!(!Team::Blue.is_toward_own_goal(0.0));
    }

    #[test]
    fn test_player_display() {
        let p = Player::new(7, Team::Blue, Role::Goalkeeper, Position::ZERO);
        assert_eq!(p.to_string(), "blue goalkeeper #7");
    }

    #[test]
    fn test_role_serde_lowercase() {
        let json = serde_json::to_string(&Role::Midfielder).unwrap();
        assert_eq!(json, "\"midfielder\"");
        let role: Role = serde_json::from_str("\"defender\"").unwrap();
        assert_eq!(role, Role::Defender);
    }
}
