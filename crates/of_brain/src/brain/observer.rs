//! BrainObserver - diagnostics side channel
//!
//! 리셋/학습/내부 조회 실패를 관찰자에게 알린다. 관찰자는 동작에 영향을 주지 않는다.
//!
//! - `TracingObserver`: `tracing` 로그 (기본)
//! - `RecordingObserver`: 메모리에 이벤트 기록 (테스트, 드릴 요약)
//! - `NoopObserver`: 아무것도 하지 않음

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::features::InputFeatures;
use super::output::OutputChannels;
use super::predictor::{LayerShape, TrainingReport};
use crate::error::BrainError;
use crate::models::{Player, Role, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetReason {
    /// 이번 틱 이전부터 망가져 있었음
    Stale,
    /// 이번 틱 학습이 망가뜨림
    Induced,
}

/// 학습 1회의 진단 정보
#[derive(Debug, Clone, Copy)]
pub struct TrainingTrace<'a> {
    pub input: &'a InputFeatures,
    pub target: &'a OutputChannels,
    pub output: &'a OutputChannels,
    pub report: &'a TrainingReport,
    pub learning_rate: f32,
    /// 내부 조회 실패 시 `None`
    pub layer_shapes: Option<&'a [LayerShape]>,
}

pub trait BrainObserver {
    fn on_reset(&mut self, player: &Player, reason: ResetReason, cause: &BrainError);

    fn on_trained(&mut self, _player: &Player, _trace: &TrainingTrace<'_>) {}

    fn on_introspection_error(&mut self, _player: &Player, _err: &BrainError) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl BrainObserver for TracingObserver {
    fn on_reset(&mut self, player: &Player, reason: ResetReason, cause: &BrainError) {
        match reason {
            ResetReason::Stale => warn!(
                team = %player.team, role = %player.role, id = player.id, %cause,
                "controller network is degenerate, reinitializing"
            ),
            ResetReason::Induced => warn!(
                team = %player.team, role = %player.role, id = player.id, %cause,
                "controller network became invalid after training, reinitializing"
            ),
        }
    }

    fn on_trained(&mut self, player: &Player, trace: &TrainingTrace<'_>) {
        debug!(
            team = %player.team,
            role = %player.role,
            id = player.id,
            input = ?trace.input,
            output = ?trace.output,
            target = ?trace.target,
            iterations = trace.report.iterations,
            error = trace.report.error,
            learning_rate = trace.learning_rate,
            layers = ?trace.layer_shapes,
            "controller trained"
        );
    }

    fn on_introspection_error(&mut self, player: &Player, err: &BrainError) {
        warn!(team = %player.team, role = %player.role, id = player.id, %err, "failed to inspect controller weights");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl BrainObserver for NoopObserver {
    fn on_reset(&mut self, _player: &Player, _reason: ResetReason, _cause: &BrainError) {}
}

/// 기록용 이벤트 (소유 데이터)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BrainEvent {
    Reset { player_id: u32, team: Team, role: Role, reason: ResetReason, cause: String },
    Trained { player_id: u32, team: Team, role: Role, report: TrainingReport },
    IntrospectionFailed { player_id: u32, team: Team, role: Role, error: String },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub events: Vec<BrainEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resets(&self) -> impl Iterator<Item = &BrainEvent> {
        self.events.iter().filter(|e| matches!(e, BrainEvent::Reset { .. }))
    }

    pub fn reset_count(&self) -> usize {
        self.resets().count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl BrainObserver for RecordingObserver {
    fn on_reset(&mut self, player: &Player, reason: ResetReason, cause: &BrainError) {
        self.events.push(BrainEvent::Reset {
            player_id: player.id,
            team: player.team,
            role: player.role,
            reason,
            cause: cause.to_string(),
        });
    }

    fn on_trained(&mut self, player: &Player, trace: &TrainingTrace<'_>) {
        self.events.push(BrainEvent::Trained {
            player_id: player.id,
            team: player.team,
            role: player.role,
            report: *trace.report,
        });
    }

    fn on_introspection_error(&mut self, player: &Player, err: &BrainError) {
        self.events.push(BrainEvent::IntrospectionFailed {
            player_id: player.id,
            team: player.team,
            role: player.role,
            error: err.to_string(),
        });
    }
}
