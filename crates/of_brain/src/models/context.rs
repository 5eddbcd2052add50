//! Per-tick team context (read-only)

use serde::{Deserialize, Serialize};

use super::player::Team;
use super::types::Position;
use crate::config::FieldConfig;

/// 한 틱 동안 한 팀에게 주어지는 읽기 전용 컨텍스트
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamContext {
    pub own_goal: Position,
    pub opponent_goal: Position,
    #[serde(default)]
    pub teammates: Vec<Position>,
    #[serde(default)]
    pub opponents: Vec<Position>,
}

impl TeamContext {
    /// 필드 설정으로부터 해당 팀의 골대 좌표 구성
    pub fn for_team(team: Team, field: &FieldConfig) -> Self {
        let left = Position::new(0.0, field.height / 2.0);
        let right = Position::new(field.width, field.height / 2.0);
        let (own_goal, opponent_goal) = match team {
            Team::Red => (left, right),
            Team::Blue => (right, left),
        };
        Self { own_goal, opponent_goal, teammates: Vec::new(), opponents: Vec::new() }
    }

    pub fn with_teammates(mut self, teammates: Vec<Position>) -> Self {
        self.teammates = teammates;
        self
    }

    pub fn with_opponents(mut self, opponents: Vec<Position>) -> Self {
        self.opponents = opponents;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goals_per_side() {
        let field = FieldConfig::default();
        let red = TeamContext::for_team(Team::Red, &field);
        assert_eq!(red.own_goal, Position::new(0.0, 300.0));
        assert_eq!(red.opponent_goal, Position::new(800.0, 300.0));

        let blue = TeamContext::for_team(Team::Blue, &field);
        assert_eq!(blue.own_goal, red.opponent_goal);
        assert_eq!(blue.opponent_goal, red.own_goal);
    }
}
