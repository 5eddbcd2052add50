//! Action classification and result packaging

use serde::{Deserialize, Serialize};

use super::output::OutputChannels;
use crate::config::ActionThresholds;
use crate::models::{Action, Position};

/// 한 틱의 최종 판단 (이동 벡터 + 이산 액션)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BrainDecision {
    pub movement: Position,
    pub action: Action,
}

/// shoot > pass > intercept > move 순서로 첫 번째로 임계값을 넘는 채널
pub fn classify(output: &OutputChannels, thresholds: &ActionThresholds) -> Action {
    if output.shoot_ball > thresholds.shoot {
        Action::Shoot
    } else if output.pass_ball > thresholds.pass {
        Action::Pass
    } else if output.intercept > thresholds.intercept {
        Action::Intercept
    } else {
        Action::Move
    }
}

pub fn package(output: &OutputChannels, thresholds: &ActionThresholds) -> BrainDecision {
    BrainDecision { movement: output.movement(), action: classify(output, thresholds) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn out(shoot: f32, pass: f32, intercept: f32) -> OutputChannels {
        OutputChannels { move_x: 0.1, move_y: -0.2, shoot_ball: shoot, pass_ball: pass, intercept }
    }

    #[test]
    fn test_shoot_checked_before_pass() {
        let t = ActionThresholds::default();
        assert_eq!(classify(&out(0.8, 0.9, 0.0), &t), Action::Shoot);
        assert_eq!(classify(&out(0.5, 0.9, 0.95), &t), Action::Pass);
        assert_eq!(classify(&out(0.5, 0.6, 0.95), &t), Action::Intercept);
        assert_eq!(classify(&out(0.5, 0.6, 0.65), &t), Action::Move);
    }

    #[test]
    fn test_threshold_is_strict() {
        let t = ActionThresholds::default();
        assert_eq!(classify(&out(0.7, 0.7, 0.7), &t), Action::Move);
        assert_eq!(classify(&out(0.7001, 0.0, 0.0), &t), Action::Shoot);
    }

    #[test]
    fn test_nan_channels_fall_through_to_move() {
        let t = ActionThresholds::default();
        assert_eq!(classify(&out(f32::NAN, f32::NAN, f32::NAN), &t), Action::Move);
    }

    #[test]
    fn test_package_carries_movement() {
        let decision = package(&out(0.0, 0.0, 0.0), &ActionThresholds::default());
        assert_eq!(decision.movement, Position::new(0.1, -0.2));
        assert_eq!(decision.action, Action::Move);
    }

    proptest! {
        #[test]
        fn prop_classification_follows_priority(
            s in -1.0f32..2.0, p in -1.0f32..2.0, i in -1.0f32..2.0,
        ) {
            let action = classify(&out(s, p, i), &ActionThresholds::default());
            let expected = if s > 0.7 {
                Action::Shoot
            } else if p > 0.7 {
                Action::Pass
            } else if i > 0.7 {
                Action::Intercept
            } else {
                Action::Move
            };
            prop_assert_eq!(action, expected);
        }
    }
}
