//! Controller - one player's owned predictor plus last-tick cache

use super::classifier::BrainDecision;
use super::network::FeedForwardNet;
use super::predictor::TrainingReport;
use crate::models::{Action, Position};

/// 선수 한 명의 행동 컨트롤러
///
/// 예측기는 이 값이 독점 소유한다. 리셋은 제자리 수정이 아니라
/// 새 `Controller` 값으로 교체하는 방식.
#[derive(Debug, Clone, PartialEq)]
pub struct Controller<P = FeedForwardNet> {
    pub net: P,
    pub last_output: Position,
    pub last_action: Action,
    /// 마지막 학습 결과 (새 컨트롤러는 `None`)
    pub last_report: Option<TrainingReport>,
}

impl<P> Controller<P> {
    pub fn new(net: P) -> Self {
        Self { net, last_output: Position::ZERO, last_action: Action::Move, last_report: None }
    }

    pub fn decision(&self) -> BrainDecision {
        BrainDecision { movement: self.last_output, action: self.last_action }
    }

    pub fn is_fresh(&self) -> bool {
        self.last_report.is_none()
    }
}

impl Controller<FeedForwardNet> {
    /// 가중치 없는 컨트롤러 - 첫 업데이트에서 교체된다
    pub fn untrained() -> Self {
        Self::new(FeedForwardNet::untrained())
    }
}
